//! Bellman-Ford shortest paths with negative weights.

use std::collections::HashMap;

use crate::dijkstra::improves;
use crate::error::{PathError, Result};
use crate::path::ShortestPaths;
use crate::traits::{NodeSet, WeightedGraph};
use crate::weight::Weight;

/// Shortest distances from `start`, allowing negative edge weights.
///
/// Relaxes every edge of every reached node up to `V - 1` times, stopping
/// early once a round changes nothing. If a further round still improves a
/// distance, a negative cycle is reachable from `start` and the call fails
/// with [`PathError::NegativeCycle`] instead of returning a distance map.
///
/// A running distance that leaves the weight type's range fails with
/// [`PathError::WeightOverflow`]. In the cycle-check round an underflow still
/// counts as an improvement, so such a cycle is reported as
/// [`PathError::NegativeCycle`].
///
/// Nodes the source never reaches are absent from the result and report
/// [`Distance::Infinite`](crate::Distance::Infinite) through
/// [`ShortestPaths::distance_to`].
pub fn bellman_ford<G>(graph: &G, start: &G::Node) -> Result<ShortestPaths<G::Node, G::Weight>>
where
    G: WeightedGraph + NodeSet,
{
    if !graph.contains(start) {
        return Err(PathError::node_not_found(start));
    }

    let nodes = graph.nodes();
    let mut dist: HashMap<G::Node, G::Weight> = HashMap::new();
    let mut came_from: HashMap<G::Node, G::Node> = HashMap::new();
    dist.insert(start.clone(), G::Weight::ZERO);

    let mut ebuf = Vec::new();
    let rounds = nodes.len().saturating_sub(1);
    let mut converged = false;
    for round in 0..rounds {
        let changed = relax_all(graph, &nodes, &mut dist, &mut came_from, &mut ebuf, false)?;
        log::trace!("bellman-ford round {}: changed {changed}", round + 1);
        if !changed {
            converged = true;
            break;
        }
    }

    if !converged && relax_all(graph, &nodes, &mut dist, &mut came_from, &mut ebuf, true)? {
        log::debug!("bellman-ford from {start:?}: negative cycle");
        return Err(PathError::negative_cycle(start));
    }

    log::debug!("bellman-ford from {start:?}: {} nodes reached", dist.len());
    Ok(ShortestPaths::new(start.clone(), dist, came_from))
}

/// One relaxation round over every out-edge of every reached node, in
/// `nodes` order. Returns whether any distance improved.
///
/// With `check` set, a sum below the weight type's range reports an
/// improvement instead of failing. A sum above it is skipped when the
/// target already has a distance.
fn relax_all<G: WeightedGraph>(
    graph: &G,
    nodes: &[G::Node],
    dist: &mut HashMap<G::Node, G::Weight>,
    came_from: &mut HashMap<G::Node, G::Node>,
    ebuf: &mut Vec<(G::Node, G::Weight)>,
    check: bool,
) -> Result<bool> {
    let mut changed = false;
    for u in nodes {
        let Some(&du) = dist.get(u) else {
            continue;
        };
        ebuf.clear();
        graph.edges(u, ebuf);
        for (v, w) in ebuf.drain(..) {
            let Some(tentative) = du.checked_add(w) else {
                let under = w.is_negative();
                if check && under {
                    return Ok(true);
                }
                // Past the top of the range never beats a known distance.
                if !under && dist.contains_key(&v) {
                    continue;
                }
                return Err(PathError::overflow(u, &v));
            };
            if improves(dist.get(&v), tentative) {
                dist.insert(v.clone(), tentative);
                came_from.insert(v, u.clone());
                changed = true;
            }
        }
    }
    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dijkstra::dijkstra;
    use crate::graph::DiGraph;
    use crate::weight::Distance;

    #[test]
    fn handles_negative_edges() {
        let g: DiGraph<char, i32> = DiGraph::from_edges([
            ('s', 'a', 4),
            ('s', 'b', 5),
            ('a', 'c', 3),
            ('b', 'a', -3),
            ('c', 't', 2),
            ('b', 't', 9),
        ]);
        let sp = bellman_ford(&g, &'s').unwrap();
        assert_eq!(sp.distance(&'a'), Some(2));
        assert_eq!(sp.distance(&'c'), Some(5));
        assert_eq!(sp.distance(&'t'), Some(7));
        assert_eq!(
            sp.path_to(&'t').unwrap().nodes(),
            &['s', 'b', 'a', 'c', 't']
        );
    }

    #[test]
    fn two_node_negative_cycle() {
        let g: DiGraph<&str, i32> = DiGraph::from_edges([("A", "B", 1), ("B", "A", -3)]);
        assert_eq!(
            bellman_ford(&g, &"A").unwrap_err(),
            PathError::NegativeCycle {
                start: "\"A\"".into()
            }
        );
    }

    #[test]
    fn unreachable_negative_cycle_is_ignored() {
        let g: DiGraph<&str, i32> =
            DiGraph::from_edges([("s", "t", 2), ("x", "y", -1), ("y", "x", -1)]);
        let sp = bellman_ford(&g, &"s").unwrap();
        assert_eq!(sp.distance_to(&"t"), Distance::Finite(2));
        assert_eq!(sp.distance_to(&"x"), Distance::Infinite);
    }

    #[test]
    fn agrees_with_dijkstra_on_non_negative_weights() {
        let g: DiGraph<u8, u32> = DiGraph::from_edges([
            (0, 1, 7),
            (0, 2, 9),
            (0, 5, 14),
            (1, 2, 10),
            (1, 3, 15),
            (2, 3, 11),
            (2, 5, 2),
            (3, 4, 6),
            (5, 4, 9),
        ]);
        let bf = bellman_ford(&g, &0).unwrap();
        let dj = dijkstra(&g, &0).unwrap();
        assert_eq!(bf.distances(), dj.distances());
        assert_eq!(bf.distance(&4), Some(20));
    }

    #[test]
    fn single_node_and_unknown_start() {
        let mut g: DiGraph<char, i32> = DiGraph::new();
        g.add_node('x');
        assert_eq!(bellman_ford(&g, &'x').unwrap().distance(&'x'), Some(0));
        assert!(matches!(
            bellman_ford(&g, &'y'),
            Err(PathError::NodeNotFound { .. })
        ));
    }

    #[test]
    fn negative_cycle_past_weight_range() {
        let g: DiGraph<char, i32> =
            DiGraph::from_edges([('a', 'b', -1_000_000_000), ('b', 'a', -1_000_000_000)]);
        assert!(matches!(
            bellman_ford(&g, &'a'),
            Err(PathError::NegativeCycle { .. })
        ));
    }

    #[test]
    fn acyclic_distance_past_weight_range() {
        let g: DiGraph<u8, i8> = DiGraph::from_edges([(0, 1, -100), (1, 2, -100)]);
        assert_eq!(
            bellman_ford(&g, &0).unwrap_err(),
            PathError::WeightOverflow {
                from: "1".into(),
                to: "2".into(),
            }
        );

        // a cheap direct edge shadows the overflowing detour
        let g: DiGraph<u8, u8> = DiGraph::from_edges([(0, 1, 200), (1, 2, 100), (0, 2, 5)]);
        assert_eq!(bellman_ford(&g, &0).unwrap().distance(&2), Some(5));
    }
}
