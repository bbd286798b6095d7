//! Unweighted shortest paths and hop-count distance maps.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::error::{PathError, Result};
use crate::path::{Path, PathNode, reconstruct};
use crate::traits::Graph;

/// Minimum-hop path from `start` to `goal`.
///
/// Ties between equally short paths go to the first one discovered, which is
/// deterministic for a deterministic neighbour order. Returns `Ok(None)` when
/// `goal` is unreachable.
pub fn bfs_path<G: Graph>(
    graph: &G,
    start: &G::Node,
    goal: &G::Node,
) -> Result<Option<Path<G::Node, usize>>> {
    if !graph.contains(start) {
        return Err(PathError::node_not_found(start));
    }
    if !graph.contains(goal) {
        return Err(PathError::node_not_found(goal));
    }
    if start == goal {
        return Ok(Some(Path::new(vec![start.clone()], 0)));
    }

    let mut came_from: HashMap<G::Node, G::Node> = HashMap::new();
    let mut discovered = HashSet::new();
    let mut queue = VecDeque::new();
    discovered.insert(start.clone());
    queue.push_back(start.clone());

    let mut nbuf = Vec::new();
    while let Some(node) = queue.pop_front() {
        log::trace!("bfs path: expand {node:?}");
        nbuf.clear();
        graph.neighbors(&node, &mut nbuf);
        for n in nbuf.drain(..) {
            if !discovered.insert(n.clone()) {
                continue;
            }
            came_from.insert(n.clone(), node.clone());
            if &n == goal {
                let nodes = reconstruct(&came_from, goal);
                let hops = nodes.len() - 1;
                log::debug!("bfs path {start:?} -> {goal:?}: {hops} hops");
                return Ok(Some(Path::new(nodes, hops)));
            }
            queue.push_back(n);
        }
    }

    log::debug!("bfs path {start:?} -> {goal:?}: unreachable");
    Ok(None)
}

/// Hop count from `start` to every reachable node.
pub fn bfs_distances<G: Graph>(graph: &G, start: &G::Node) -> Result<HashMap<G::Node, usize>> {
    if !graph.contains(start) {
        return Err(PathError::node_not_found(start));
    }
    Ok(bfs_map(graph, std::slice::from_ref(start), usize::MAX)
        .into_iter()
        .map(|PathNode { node, cost }| (node, cost))
        .collect())
}

/// Multi-source breadth-first expansion.
///
/// Each step has cost 1. Expansion stops when the distance exceeds
/// `max_dist`. Sources that are not in the graph are skipped. Returns all
/// reached nodes in discovery order.
pub fn bfs_map<G: Graph>(
    graph: &G,
    sources: &[G::Node],
    max_dist: usize,
) -> Vec<PathNode<G::Node, usize>> {
    let mut dist: HashMap<G::Node, usize> = HashMap::new();
    let mut queue = VecDeque::new();
    let mut results = Vec::new();

    for src in sources {
        if !graph.contains(src) || dist.contains_key(src) {
            continue;
        }
        dist.insert(src.clone(), 0);
        queue.push_back(src.clone());
        results.push(PathNode {
            node: src.clone(),
            cost: 0,
        });
    }

    let mut nbuf = Vec::new();
    while let Some(node) = queue.pop_front() {
        let nd = dist[&node] + 1;
        if nd > max_dist {
            continue;
        }
        nbuf.clear();
        graph.neighbors(&node, &mut nbuf);
        for n in nbuf.drain(..) {
            if dist.contains_key(&n) {
                continue;
            }
            dist.insert(n.clone(), nd);
            queue.push_back(n.clone());
            results.push(PathNode { node: n, cost: nd });
        }
    }

    log::trace!("bfs map from {} sources: {} nodes", sources.len(), results.len());
    results
}
