//! Breadth-first and depth-first traversal.
//!
//! Every traversal returns the set of nodes reachable from `start`. The
//! `*_with` variants take an observation hook `hook(graph, node, visited)`
//! which is called exactly once per node, at its first visit and before it
//! is added to `visited`. The hook only observes; it cannot change the
//! visited set.

use std::collections::{HashSet, VecDeque};

use crate::error::{PathError, Result};
use crate::traits::Graph;

/// Breadth-first traversal from `start`.
pub fn bfs<G: Graph>(graph: &G, start: &G::Node) -> Result<HashSet<G::Node>> {
    bfs_with(graph, start, |_, _, _| {})
}

/// Breadth-first traversal with an observation hook.
///
/// Nodes are visited in non-decreasing hop count from `start`, FIFO
/// within a level.
pub fn bfs_with<G, F>(graph: &G, start: &G::Node, mut hook: F) -> Result<HashSet<G::Node>>
where
    G: Graph,
    F: FnMut(&G, &G::Node, &HashSet<G::Node>),
{
    if !graph.contains(start) {
        return Err(PathError::node_not_found(start));
    }

    let mut visited = HashSet::new();
    let mut discovered = HashSet::new();
    let mut queue = VecDeque::new();
    discovered.insert(start.clone());
    queue.push_back(start.clone());

    let mut nbuf = Vec::new();
    while let Some(node) = queue.pop_front() {
        log::trace!("bfs visit {node:?}");
        hook(graph, &node, &visited);
        nbuf.clear();
        graph.neighbors(&node, &mut nbuf);
        for n in nbuf.drain(..) {
            if discovered.insert(n.clone()) {
                queue.push_back(n);
            }
        }
        visited.insert(node);
    }

    log::debug!("bfs from {start:?}: {} nodes visited", visited.len());
    Ok(visited)
}

/// Depth-first traversal from `start` using an explicit stack.
pub fn dfs<G: Graph>(graph: &G, start: &G::Node) -> Result<HashSet<G::Node>> {
    dfs_with(graph, start, |_, _, _| {})
}

/// Depth-first traversal with an observation hook.
///
/// Visits nodes in the same pre-order as [`dfs_recursive`] but keeps its
/// frontier on the heap, so depth is bounded only by memory.
pub fn dfs_with<G, F>(graph: &G, start: &G::Node, mut hook: F) -> Result<HashSet<G::Node>>
where
    G: Graph,
    F: FnMut(&G, &G::Node, &HashSet<G::Node>),
{
    if !graph.contains(start) {
        return Err(PathError::node_not_found(start));
    }

    let mut visited = HashSet::new();
    let mut stack = vec![start.clone()];
    let mut nbuf = Vec::new();

    while let Some(node) = stack.pop() {
        if visited.contains(&node) {
            continue;
        }
        log::trace!("dfs visit {node:?}");
        hook(graph, &node, &visited);
        nbuf.clear();
        graph.neighbors(&node, &mut nbuf);
        // Reversed so the first neighbour is explored first.
        stack.extend(nbuf.drain(..).rev().filter(|n| !visited.contains(n)));
        visited.insert(node);
    }

    log::debug!("dfs from {start:?}: {} nodes visited", visited.len());
    Ok(visited)
}

/// Recursive depth-first traversal with an observation hook.
///
/// Convenience only: recursion depth equals the longest simple path
/// explored, which can overflow the stack on large or degenerate graphs
/// (a long chain, a big open grid). Prefer [`dfs_with`].
pub fn dfs_recursive<G, F>(graph: &G, start: &G::Node, mut hook: F) -> Result<HashSet<G::Node>>
where
    G: Graph,
    F: FnMut(&G, &G::Node, &HashSet<G::Node>),
{
    if !graph.contains(start) {
        return Err(PathError::node_not_found(start));
    }
    let mut visited = HashSet::new();
    descend(graph, start, &mut visited, &mut hook);
    Ok(visited)
}

fn descend<G, F>(graph: &G, node: &G::Node, visited: &mut HashSet<G::Node>, hook: &mut F)
where
    G: Graph,
    F: FnMut(&G, &G::Node, &HashSet<G::Node>),
{
    hook(graph, node, visited);
    visited.insert(node.clone());

    let mut nbuf = Vec::new();
    graph.neighbors(node, &mut nbuf);
    for n in &nbuf {
        if !visited.contains(n) {
            descend(graph, n, visited, hook);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DiGraph;

    fn sample() -> DiGraph<&'static str> {
        DiGraph::from_adjacency([
            ("A", vec!["B", "C"]),
            ("B", vec!["D", "E"]),
            ("C", vec!["F"]),
            ("D", vec![]),
            ("E", vec!["F"]),
            ("F", vec![]),
        ])
    }

    #[test]
    fn bfs_visits_level_by_level() {
        let g = sample();
        let mut order = Vec::new();
        let visited = bfs_with(&g, &"A", |_, n, seen| {
            assert!(!seen.contains(n));
            order.push(*n);
        })
        .unwrap();
        assert_eq!(order, vec!["A", "B", "C", "D", "E", "F"]);
        assert_eq!(visited.len(), 6);
    }

    #[test]
    fn dfs_visits_depth_first() {
        let g = sample();
        let mut order = Vec::new();
        dfs_with(&g, &"A", |_, n, _| order.push(*n)).unwrap();
        assert_eq!(order, vec!["A", "B", "D", "E", "F", "C"]);
    }

    #[test]
    fn recursive_and_iterative_dfs_agree() {
        let g = sample();
        let mut iterative = Vec::new();
        let mut recursive = Vec::new();
        let a = dfs_with(&g, &"A", |_, n, _| iterative.push(*n)).unwrap();
        let b = dfs_recursive(&g, &"A", |_, n, _| recursive.push(*n)).unwrap();
        assert_eq!(a, b);
        assert_eq!(iterative, recursive);
    }

    #[test]
    fn hook_sees_growing_visited_set() {
        let g = sample();
        let mut sizes = Vec::new();
        bfs_with(&g, &"A", |_, _, seen| sizes.push(seen.len())).unwrap();
        assert_eq!(sizes, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn only_reachable_nodes() {
        let g = sample();
        let visited = bfs(&g, &"C").unwrap();
        assert_eq!(visited, HashSet::from(["C", "F"]));
        assert_eq!(dfs(&g, &"C").unwrap(), visited);
    }

    #[test]
    fn cycles_terminate() {
        let g = DiGraph::from_adjacency([(1, vec![2]), (2, vec![3]), (3, vec![1, 2])]);
        let mut calls = 0;
        let visited = bfs_with(&g, &1, |_, _, _| calls += 1).unwrap();
        assert_eq!(visited.len(), 3);
        assert_eq!(calls, 3);
        assert_eq!(dfs(&g, &3).unwrap().len(), 3);
    }

    #[test]
    fn unknown_start_is_an_error() {
        let g = sample();
        assert_eq!(
            bfs(&g, &"Z").unwrap_err(),
            PathError::NodeNotFound {
                node: "\"Z\"".into()
            }
        );
        assert!(dfs(&g, &"Z").is_err());
        assert!(dfs_recursive(&g, &"Z", |_, _, _| {}).is_err());
    }

    #[test]
    fn repeated_runs_are_identical() {
        let g = sample();
        let mut first = Vec::new();
        let mut second = Vec::new();
        bfs_with(&g, &"A", |_, n, _| first.push(*n)).unwrap();
        bfs_with(&g, &"A", |_, n, _| second.push(*n)).unwrap();
        assert_eq!(first, second);
    }
}
