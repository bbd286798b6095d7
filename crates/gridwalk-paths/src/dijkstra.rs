//! Dijkstra single-source shortest paths.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::error::{PathError, Result};
use crate::frontier::Frontier;
use crate::path::{Path, PathNode, ShortestPaths};
use crate::traits::WeightedGraph;
use crate::weight::Weight;

type Search<N, W> = (HashMap<N, W>, HashMap<N, N>);

/// Shortest distances from `start` to every reachable node.
///
/// Edge weights must be non-negative; the first negative weight met during
/// relaxation fails the call with [`PathError::InvalidEdgeWeight`]. A
/// distance that no longer fits the weight type fails with
/// [`PathError::WeightOverflow`].
pub fn dijkstra<G: WeightedGraph>(
    graph: &G,
    start: &G::Node,
) -> Result<ShortestPaths<G::Node, G::Weight>> {
    if !graph.contains(start) {
        return Err(PathError::node_not_found(start));
    }
    let (dist, came_from) = search(graph, start, None)?;
    log::debug!("dijkstra from {start:?}: {} nodes reached", dist.len());
    Ok(ShortestPaths::new(start.clone(), dist, came_from))
}

/// Shortest weighted path from `start` to `goal`, or `Ok(None)` if
/// unreachable. The search stops as soon as `goal` is finalized.
pub fn dijkstra_path<G: WeightedGraph>(
    graph: &G,
    start: &G::Node,
    goal: &G::Node,
) -> Result<Option<Path<G::Node, G::Weight>>> {
    if !graph.contains(start) {
        return Err(PathError::node_not_found(start));
    }
    if !graph.contains(goal) {
        return Err(PathError::node_not_found(goal));
    }
    let (dist, came_from) = search(graph, start, Some(goal))?;
    let sp = ShortestPaths::new(start.clone(), dist, came_from);
    let path = sp.path_to(goal);
    log::debug!(
        "dijkstra path {start:?} -> {goal:?}: {:?}",
        path.as_ref().map(Path::cost)
    );
    Ok(path)
}

/// Multi-source Dijkstra distance map.
///
/// Every source starts at cost zero. Nodes whose cost would exceed
/// `max_cost` are not expanded. Returns the reached nodes in the order they
/// were finalized, so costs are non-decreasing.
pub fn dijkstra_map<G: WeightedGraph>(
    graph: &G,
    sources: &[G::Node],
    max_cost: G::Weight,
) -> Result<Vec<PathNode<G::Node, G::Weight>>> {
    let mut dist: HashMap<G::Node, G::Weight> = HashMap::new();
    let mut finalized = HashSet::new();
    let mut open = Frontier::new();
    let mut results = Vec::new();

    for src in sources {
        if graph.contains(src) && !dist.contains_key(src) {
            dist.insert(src.clone(), G::Weight::ZERO);
            open.push(src.clone(), G::Weight::ZERO);
        }
    }

    let mut ebuf = Vec::new();
    while let Some((node, cost)) = open.pop() {
        if !finalized.insert(node.clone()) {
            continue;
        }
        results.push(PathNode {
            node: node.clone(),
            cost,
        });

        ebuf.clear();
        graph.edges(&node, &mut ebuf);
        for (n, w) in ebuf.drain(..) {
            if w.is_negative() {
                return Err(PathError::invalid_weight(&node, &n, &w));
            }
            if finalized.contains(&n) {
                continue;
            }
            // An overflowing sum is past any `max_cost` too.
            let Some(tentative) = cost.checked_add(w) else {
                continue;
            };
            if tentative.order(&max_cost) == Ordering::Greater {
                continue;
            }
            if improves(dist.get(&n), tentative) {
                dist.insert(n.clone(), tentative);
                open.push(n, tentative);
            }
        }
    }

    log::trace!(
        "dijkstra map from {} sources: {} nodes",
        sources.len(),
        results.len()
    );
    Ok(results)
}

/// Strict relaxation: only a smaller tentative distance replaces the
/// current one, so the first-found predecessor wins ties.
#[inline]
pub(crate) fn improves<W: Weight>(current: Option<&W>, tentative: W) -> bool {
    current.is_none_or(|old| tentative.order(old) == Ordering::Less)
}

fn search<G: WeightedGraph>(
    graph: &G,
    start: &G::Node,
    goal: Option<&G::Node>,
) -> Result<Search<G::Node, G::Weight>> {
    let mut dist: HashMap<G::Node, G::Weight> = HashMap::new();
    let mut came_from: HashMap<G::Node, G::Node> = HashMap::new();
    let mut finalized = HashSet::new();
    let mut open = Frontier::new();

    dist.insert(start.clone(), G::Weight::ZERO);
    open.push(start.clone(), G::Weight::ZERO);

    let mut ebuf = Vec::new();
    while let Some((node, cost)) = open.pop() {
        if !finalized.insert(node.clone()) {
            continue;
        }
        if goal == Some(&node) {
            break;
        }
        log::trace!("dijkstra: settle {node:?} at {cost:?}");

        ebuf.clear();
        graph.edges(&node, &mut ebuf);
        for (n, w) in ebuf.drain(..) {
            if w.is_negative() {
                return Err(PathError::invalid_weight(&node, &n, &w));
            }
            if finalized.contains(&n) {
                continue;
            }
            let tentative = cost
                .checked_add(w)
                .ok_or_else(|| PathError::overflow(&node, &n))?;
            if improves(dist.get(&n), tentative) {
                dist.insert(n.clone(), tentative);
                came_from.insert(n.clone(), node.clone());
                open.push(n, tentative);
            }
        }
    }

    Ok((dist, came_from))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DiGraph;
    use crate::weight::Distance;

    fn roads() -> DiGraph<char, u32> {
        DiGraph::from_edges([
            ('A', 'B', 4),
            ('A', 'C', 2),
            ('C', 'B', 1),
            ('B', 'D', 5),
            ('C', 'D', 8),
            ('C', 'E', 10),
            ('D', 'E', 2),
            ('D', 'F', 6),
            ('E', 'F', 2),
        ])
    }

    #[test]
    fn distances_from_source() {
        let sp = dijkstra(&roads(), &'A').unwrap();
        let expected = [('A', 0), ('B', 3), ('C', 2), ('D', 8), ('E', 10), ('F', 12)];
        for (n, d) in expected {
            assert_eq!(sp.distance(&n), Some(d), "distance to {n}");
        }
        assert_eq!(sp.len(), 6);
    }

    #[test]
    fn path_follows_cheapest_route() {
        let p = dijkstra_path(&roads(), &'A', &'F').unwrap().unwrap();
        assert_eq!(p.nodes(), &['A', 'C', 'B', 'D', 'E', 'F']);
        assert_eq!(p.cost(), 12);

        let sp = dijkstra(&roads(), &'A').unwrap();
        assert_eq!(sp.path_to(&'F'), Some(p));
    }

    #[test]
    fn unreached_nodes_are_absent() {
        let sp = dijkstra(&roads(), &'D').unwrap();
        assert!(!sp.reached(&'A'));
        assert_eq!(sp.distance_to(&'A'), Distance::Infinite);
        assert_eq!(dijkstra_path(&roads(), &'D', &'A').unwrap(), None);
    }

    #[test]
    fn equal_cost_ties_keep_first_predecessor() {
        let g: DiGraph<char, u32> =
            DiGraph::from_edges([('a', 'b', 1), ('a', 'c', 1), ('b', 'd', 1), ('c', 'd', 1)]);
        let p = dijkstra_path(&g, &'a', &'d').unwrap().unwrap();
        assert_eq!(p.nodes(), &['a', 'b', 'd']);
    }

    #[test]
    fn negative_weight_fails_fast() {
        let g: DiGraph<&str, i32> = DiGraph::from_edges([("a", "b", 2), ("b", "c", -1)]);
        assert_eq!(
            dijkstra(&g, &"a").unwrap_err(),
            PathError::InvalidEdgeWeight {
                from: "\"b\"".into(),
                to: "\"c\"".into(),
                weight: "-1".into(),
            }
        );
        assert!(dijkstra_map(&g, &["a"], 10).is_err());
    }

    #[test]
    fn unknown_endpoints() {
        let g = roads();
        assert!(matches!(
            dijkstra(&g, &'Z'),
            Err(PathError::NodeNotFound { .. })
        ));
        assert!(dijkstra_path(&g, &'A', &'Z').is_err());
    }

    #[test]
    fn float_weights() {
        let g: DiGraph<u8, f64> = DiGraph::from_edges([(0, 1, 0.5), (1, 2, 0.25), (0, 2, 1.0)]);
        let p = dijkstra_path(&g, &0, &2).unwrap().unwrap();
        assert_eq!(p.nodes(), &[0, 1, 2]);
        assert!((p.cost() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn bounded_map_in_finalize_order() {
        let reached = dijkstra_map(&roads(), &['A'], 3).unwrap();
        let got: Vec<_> = reached.iter().map(|n| (n.node, n.cost)).collect();
        assert_eq!(got, vec![('A', 0), ('C', 2), ('B', 3)]);
    }

    #[test]
    fn multi_source_map() {
        let reached = dijkstra_map(&roads(), &['D', 'C', 'Q'], u32::MAX).unwrap();
        let cost = |c| reached.iter().find(|n| n.node == c).map(|n| n.cost);
        assert_eq!(cost('D'), Some(0));
        assert_eq!(cost('C'), Some(0));
        assert_eq!(cost('E'), Some(2));
        assert_eq!(cost('F'), Some(4));
        assert_eq!(cost('A'), None);
        assert!(reached.windows(2).all(|w| w[0].cost <= w[1].cost));
    }

    #[test]
    fn distance_past_weight_range() {
        let g: DiGraph<char, u8> = DiGraph::from_edges([('a', 'b', 200), ('b', 'c', 100)]);
        assert_eq!(
            dijkstra(&g, &'a').unwrap_err(),
            PathError::WeightOverflow {
                from: "'b'".into(),
                to: "'c'".into(),
            }
        );
        assert!(dijkstra_path(&g, &'a', &'c').is_err());
        // the bounded map just leaves `c` out
        let reached = dijkstra_map(&g, &['a'], u8::MAX).unwrap();
        let got: Vec<_> = reached.iter().map(|n| (n.node, n.cost)).collect();
        assert_eq!(got, vec![('a', 0), ('b', 200)]);
    }
}
