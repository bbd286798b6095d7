use std::collections::{HashMap, HashSet};

use crate::dijkstra::improves;
use crate::error::{PathError, Result};
use crate::frontier::Frontier;
use crate::path::{Path, reconstruct};
use crate::traits::{AstarGraph, WeightedGraph};
use crate::weight::Weight;

/// Compute the shortest path from `start` to `goal` using A* with the
/// graph's own [`estimate`](AstarGraph::estimate).
///
/// Returns the full path (including both endpoints) or `Ok(None)` if `goal`
/// is unreachable.
pub fn astar_path<G: AstarGraph>(
    graph: &G,
    start: &G::Node,
    goal: &G::Node,
) -> Result<Option<Path<G::Node, G::Weight>>> {
    astar_path_with(graph, start, goal, |a, b| graph.estimate(a, b))
}

/// A* with a caller-supplied heuristic `heuristic(node, goal)`.
///
/// The heuristic only enters the frontier priority, never the accumulated
/// cost. It must not overestimate the remaining cost, otherwise the returned
/// path may not be the cheapest. Frontier ties are broken by insertion order.
pub fn astar_path_with<G, H>(
    graph: &G,
    start: &G::Node,
    goal: &G::Node,
    heuristic: H,
) -> Result<Option<Path<G::Node, G::Weight>>>
where
    G: WeightedGraph,
    H: Fn(&G::Node, &G::Node) -> G::Weight,
{
    if !graph.contains(start) {
        return Err(PathError::node_not_found(start));
    }
    if !graph.contains(goal) {
        return Err(PathError::node_not_found(goal));
    }
    if start == goal {
        return Ok(Some(Path::new(vec![start.clone()], G::Weight::ZERO)));
    }

    let mut g_score: HashMap<G::Node, G::Weight> = HashMap::new();
    let mut came_from: HashMap<G::Node, G::Node> = HashMap::new();
    let mut closed = HashSet::new();
    let mut open = Frontier::new();

    g_score.insert(start.clone(), G::Weight::ZERO);
    open.push(start.clone(), heuristic(start, goal));

    let mut ebuf = Vec::new();
    let mut expanded = 0usize;
    while let Some((node, _)) = open.pop() {
        if &node == goal {
            let cost = g_score[goal];
            log::debug!("astar {start:?} -> {goal:?}: cost {cost:?}, {expanded} expanded");
            return Ok(Some(Path::new(reconstruct(&came_from, goal), cost)));
        }
        // Skip stale entries.
        if !closed.insert(node.clone()) {
            continue;
        }
        expanded += 1;
        log::trace!("astar: expand {node:?}");

        let current_g = g_score[&node];
        ebuf.clear();
        graph.edges(&node, &mut ebuf);
        for (n, w) in ebuf.drain(..) {
            if w.is_negative() {
                return Err(PathError::invalid_weight(&node, &n, &w));
            }
            let tentative = current_g
                .checked_add(w)
                .ok_or_else(|| PathError::overflow(&node, &n))?;
            if !improves(g_score.get(&n), tentative) {
                continue;
            }
            // A better route reopens a closed node, which keeps the search
            // optimal for admissible but inconsistent heuristics.
            closed.remove(&n);
            let f = tentative
                .checked_add(heuristic(&n, goal))
                .ok_or_else(|| PathError::overflow(&node, &n))?;
            g_score.insert(n.clone(), tentative);
            came_from.insert(n.clone(), node.clone());
            open.push(n, f);
        }
    }

    log::debug!("astar {start:?} -> {goal:?}: unreachable after {expanded} expanded");
    Ok(None)
}
