//! Topological ordering of directed acyclic graphs.

use std::collections::HashMap;

use crate::error::{PathError, Result};
use crate::traits::{Graph, NodeSet};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// On the current DFS stack.
    Open,
    /// Fully explored.
    Done,
}

struct Frame<N> {
    node: N,
    succ: Vec<N>,
    next: usize,
}

impl<N> Frame<N> {
    fn new<G: Graph<Node = N>>(graph: &G, node: N) -> Self {
        let mut succ = Vec::new();
        graph.neighbors(&node, &mut succ);
        Self {
            node,
            succ,
            next: 0,
        }
    }
}

/// Iterative three-colour DFS over every node, roots taken in `nodes()`
/// order.
///
/// Returns the DFS post-order, or `Err(node)` at the first back edge, where
/// `node` is the target of that edge (a node on the current stack).
pub(crate) fn post_order<G: NodeSet>(graph: &G) -> std::result::Result<Vec<G::Node>, G::Node> {
    let mut marks: HashMap<G::Node, Mark> = HashMap::new();
    let mut order = Vec::new();
    let mut stack: Vec<Frame<G::Node>> = Vec::new();

    for root in graph.nodes() {
        if marks.contains_key(&root) {
            continue;
        }
        marks.insert(root.clone(), Mark::Open);
        stack.push(Frame::new(graph, root));

        while let Some(top) = stack.last_mut() {
            let Some(next) = top.succ.get(top.next).cloned() else {
                if let Some(done) = stack.pop() {
                    marks.insert(done.node.clone(), Mark::Done);
                    order.push(done.node);
                }
                continue;
            };
            top.next += 1;
            match marks.get(&next) {
                Some(Mark::Open) => return Err(next),
                Some(Mark::Done) => {}
                None => {
                    marks.insert(next.clone(), Mark::Open);
                    stack.push(Frame::new(graph, next));
                }
            }
        }
    }

    Ok(order)
}

/// Order the nodes so every edge's source comes before its target.
///
/// The order is the reverse of a DFS post-order. Acyclicity is checked
/// during the same walk: a cyclic graph fails with
/// [`PathError::CycleDetected`], naming a node on the cycle.
pub fn topological_sort<G: NodeSet>(graph: &G) -> Result<Vec<G::Node>> {
    match post_order(graph) {
        Ok(mut order) => {
            order.reverse();
            log::debug!("topological sort of {} nodes", order.len());
            Ok(order)
        }
        Err(node) => {
            log::debug!("topological sort: cycle through {node:?}");
            Err(PathError::cycle(&node))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DiGraph;

    fn position<T: PartialEq>(order: &[T], x: &T) -> usize {
        order.iter().position(|n| n == x).unwrap()
    }

    #[test]
    fn sources_come_first() {
        let g = DiGraph::from_adjacency([
            ("shirt", vec!["tie", "belt"]),
            ("tie", vec!["jacket"]),
            ("pants", vec!["shoes", "belt"]),
            ("belt", vec!["jacket"]),
            ("socks", vec!["shoes"]),
            ("shoes", vec![]),
            ("jacket", vec![]),
        ]);
        let order = topological_sort(&g).unwrap();
        assert_eq!(order.len(), 7);
        for e in g.all_edges() {
            assert!(
                position(&order, &e.from) < position(&order, &e.to),
                "{} before {}",
                e.from,
                e.to
            );
        }
    }

    #[test]
    fn reverse_post_order_is_deterministic() {
        let g = DiGraph::from_adjacency([
            ("A", vec!["B", "C"]),
            ("B", vec!["D", "E"]),
            ("C", vec!["F"]),
            ("D", vec![]),
            ("E", vec!["F"]),
            ("F", vec![]),
        ]);
        let order = topological_sort(&g).unwrap();
        assert_eq!(order, vec!["A", "C", "B", "E", "F", "D"]);
        assert_eq!(topological_sort(&g).unwrap(), order);
    }

    #[test]
    fn cyclic_input_fails() {
        let g = DiGraph::from_adjacency([('A', vec!['B']), ('B', vec!['C']), ('C', vec!['A'])]);
        assert_eq!(
            topological_sort(&g).unwrap_err(),
            PathError::CycleDetected { node: "'A'".into() }
        );

        let looped = DiGraph::from_adjacency([(1, vec![1])]);
        assert!(topological_sort(&looped).is_err());
    }

    #[test]
    fn isolated_nodes_and_empty_graph() {
        let mut g: DiGraph<u8> = DiGraph::new();
        assert!(topological_sort(&g).unwrap().is_empty());
        g.add_node(2);
        g.add_node(1);
        assert_eq!(topological_sort(&g).unwrap(), vec![1, 2]);
    }
}
