use std::collections::HashMap;

use crate::traits::NodeId;
use crate::weight::{Distance, Weight};

/// A node with an associated cost, returned from BFS / Dijkstra map queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode<N, C> {
    pub node: N,
    pub cost: C,
}

/// An ordered sequence of nodes from a start to a goal, each consecutive
/// pair joined by an edge, together with its accumulated cost.
///
/// A path holding only the start node means start and goal coincide.
/// Deserializing an empty node list fails.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPath<N, C>"))]
pub struct Path<N, C> {
    nodes: Vec<N>,
    cost: C,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPath<N, C> {
    nodes: Vec<N>,
    cost: C,
}

#[cfg(feature = "serde")]
impl<N, C> TryFrom<RawPath<N, C>> for Path<N, C> {
    type Error = &'static str;

    fn try_from(raw: RawPath<N, C>) -> Result<Self, Self::Error> {
        if raw.nodes.is_empty() {
            return Err("a path holds at least its start node");
        }
        Ok(Self {
            nodes: raw.nodes,
            cost: raw.cost,
        })
    }
}

impl<N, C: Copy> Path<N, C> {
    pub(crate) fn new(nodes: Vec<N>, cost: C) -> Self {
        debug_assert!(!nodes.is_empty());
        Self { nodes, cost }
    }

    /// The nodes, start first.
    #[inline]
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Total cost: hop count for unweighted searches, summed weight otherwise.
    #[inline]
    pub fn cost(&self) -> C {
        self.cost
    }

    /// Number of nodes, including both endpoints.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a path holds at least its start node.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edges traversed.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn start(&self) -> &N {
        &self.nodes[0]
    }

    pub fn goal(&self) -> &N {
        &self.nodes[self.nodes.len() - 1]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, N> {
        self.nodes.iter()
    }

    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }
}

impl<'a, N, C> IntoIterator for &'a Path<N, C> {
    type Item = &'a N;
    type IntoIter = std::slice::Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// Walk `came_from` back from `goal` and return the nodes start-first.
///
/// The walk is bounded by the number of recorded predecessors, so a
/// malformed (cyclic) predecessor map cannot loop forever.
pub(crate) fn reconstruct<N: NodeId>(came_from: &HashMap<N, N>, goal: &N) -> Vec<N> {
    let mut nodes = vec![goal.clone()];
    let mut cur = goal;
    while let Some(prev) = came_from.get(cur) {
        if nodes.len() > came_from.len() {
            break;
        }
        nodes.push(prev.clone());
        cur = prev;
    }
    nodes.reverse();
    nodes
}

/// Single-source shortest-path result: a distance map plus the finalizing
/// predecessor of every reached node.
///
/// Unreached nodes are absent from the map; [`distance_to`](Self::distance_to)
/// reports them as [`Distance::Infinite`].
#[derive(Debug, Clone)]
pub struct ShortestPaths<N, W> {
    start: N,
    dist: HashMap<N, W>,
    came_from: HashMap<N, N>,
}

impl<N: NodeId, W: Weight> ShortestPaths<N, W> {
    pub(crate) fn new(start: N, dist: HashMap<N, W>, came_from: HashMap<N, N>) -> Self {
        Self {
            start,
            dist,
            came_from,
        }
    }

    /// The source node.
    pub fn start(&self) -> &N {
        &self.start
    }

    /// Minimum accumulated weight to `node`, or `None` if it was not reached.
    pub fn distance(&self, node: &N) -> Option<W> {
        self.dist.get(node).copied()
    }

    /// Like [`distance`](Self::distance) but with an explicit infinite value.
    pub fn distance_to(&self, node: &N) -> Distance<W> {
        self.distance(node).into()
    }

    /// Whether `node` was reached from the source.
    pub fn reached(&self, node: &N) -> bool {
        self.dist.contains_key(node)
    }

    /// Number of reached nodes (including the source).
    pub fn len(&self) -> usize {
        self.dist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }

    /// The distance map.
    pub fn distances(&self) -> &HashMap<N, W> {
        &self.dist
    }

    pub fn into_distances(self) -> HashMap<N, W> {
        self.dist
    }

    /// Shortest path from the source to `goal`, or `None` if unreached.
    pub fn path_to(&self, goal: &N) -> Option<Path<N, W>> {
        let cost = self.distance(goal)?;
        Some(Path::new(reconstruct(&self.came_from, goal), cost))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconstruct_follows_predecessors() {
        let came_from: HashMap<_, _> = [('b', 'a'), ('c', 'b'), ('d', 'c')].into_iter().collect();
        assert_eq!(reconstruct(&came_from, &'d'), vec!['a', 'b', 'c', 'd']);
        assert_eq!(reconstruct(&came_from, &'a'), vec!['a']);
    }

    #[test]
    fn reconstruct_stops_on_cyclic_map() {
        let came_from: HashMap<_, _> = [('a', 'b'), ('b', 'a')].into_iter().collect();
        assert!(reconstruct(&came_from, &'a').len() <= 3);
    }

    #[test]
    fn path_accessors() {
        let p = Path::new(vec![1, 2, 3], 7u32);
        assert_eq!(p.len(), 3);
        assert_eq!(p.edge_count(), 2);
        assert_eq!((*p.start(), *p.goal()), (1, 3));
        assert_eq!(p.cost(), 7);
        assert_eq!(p.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);

        let single = Path::new(vec!['s'], 0u32);
        assert_eq!(single.edge_count(), 0);
        assert_eq!(single.start(), single.goal());
    }

    #[test]
    fn shortest_paths_queries() {
        let dist: HashMap<_, _> = [('a', 0), ('b', 2)].into_iter().collect();
        let came_from: HashMap<_, _> = [('b', 'a')].into_iter().collect();
        let sp = ShortestPaths::new('a', dist, came_from);
        assert_eq!(sp.distance(&'b'), Some(2));
        assert_eq!(sp.distance_to(&'z'), Distance::Infinite);
        assert_eq!(sp.path_to(&'b').unwrap().nodes(), &['a', 'b']);
        assert!(sp.path_to(&'z').is_none());
    }
}
