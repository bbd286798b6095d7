//! Adjacency-list graph representation.

use std::collections::HashMap;

use crate::traits::{Graph, NodeId, NodeSet, WeightedGraph};
use crate::weight::Weight;

/// A directed, weighted edge.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge<N, W> {
    pub from: N,
    pub to: N,
    pub weight: W,
}

impl<N, W> Edge<N, W> {
    pub fn new(from: N, to: N, weight: W) -> Self {
        Self { from, to, weight }
    }
}

impl<N, W> From<(N, N, W)> for Edge<N, W> {
    fn from((from, to, weight): (N, N, W)) -> Self {
        Self { from, to, weight }
    }
}

/// A directed graph stored as insertion-ordered adjacency lists.
///
/// Nodes are kept in first-insertion order and each node's out-edges in
/// edge-insertion order, so every algorithm run on a `DiGraph` is
/// deterministic. Adding an edge inserts any missing endpoint, so every
/// referenced neighbour is resolvable.
///
/// Unweighted graphs use the default weight type and give every edge a
/// weight of one.
#[derive(Debug, Clone)]
pub struct DiGraph<N, W = u32> {
    nodes: Vec<N>,
    index: HashMap<N, usize>,
    adj: Vec<Vec<(usize, W)>>,
}

impl<N: NodeId, W: Weight> Default for DiGraph<N, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeId> DiGraph<N> {
    /// Build an unweighted graph from `node -> neighbours` rows.
    ///
    /// Row keys become nodes in row order before any edge is added;
    /// neighbours that are not keys are appended afterwards.
    pub fn from_adjacency<I, J>(rows: I) -> Self
    where
        I: IntoIterator<Item = (N, J)>,
        J: IntoIterator<Item = N>,
    {
        let rows: Vec<(N, Vec<N>)> = rows
            .into_iter()
            .map(|(n, ns)| (n, ns.into_iter().collect()))
            .collect();
        let mut g = Self::new();
        for (n, _) in &rows {
            g.add_node(n.clone());
        }
        for (n, ns) in rows {
            for m in ns {
                g.add_edge(n.clone(), m);
            }
        }
        g
    }
}

impl<N: NodeId, W: Weight> DiGraph<N, W> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            adj: Vec::new(),
        }
    }

    /// Build a weighted graph from `node -> [(neighbour, weight)]` rows.
    pub fn from_weighted_adjacency<I, J>(rows: I) -> Self
    where
        I: IntoIterator<Item = (N, J)>,
        J: IntoIterator<Item = (N, W)>,
    {
        let rows: Vec<(N, Vec<(N, W)>)> = rows
            .into_iter()
            .map(|(n, ns)| (n, ns.into_iter().collect()))
            .collect();
        let mut g = Self::new();
        for (n, _) in &rows {
            g.add_node(n.clone());
        }
        for (n, ns) in rows {
            for (m, w) in ns {
                g.add_weighted_edge(n.clone(), m, w);
            }
        }
        g
    }

    /// Build a graph from a list of directed edges.
    pub fn from_edges<E: Into<Edge<N, W>>>(edges: impl IntoIterator<Item = E>) -> Self {
        let mut g = Self::new();
        for e in edges {
            let e = e.into();
            g.add_weighted_edge(e.from, e.to, e.weight);
        }
        g
    }

    /// Insert `node` if absent and return its internal index.
    pub fn add_node(&mut self, node: N) -> usize {
        if let Some(&i) = self.index.get(&node) {
            return i;
        }
        let i = self.nodes.len();
        self.index.insert(node.clone(), i);
        self.nodes.push(node);
        self.adj.push(Vec::new());
        i
    }

    /// Add an edge of weight one.
    pub fn add_edge(&mut self, from: N, to: N) {
        self.add_weighted_edge(from, to, W::ONE);
    }

    pub fn add_weighted_edge(&mut self, from: N, to: N, weight: W) {
        let fi = self.add_node(from);
        let ti = self.add_node(to);
        self.adj[fi].push((ti, weight));
    }

    /// Add the edge in both directions.
    pub fn add_undirected_edge(&mut self, a: N, b: N, weight: W) {
        self.add_weighted_edge(a.clone(), b.clone(), weight);
        self.add_weighted_edge(b, a, weight);
    }

    /// Remove every edge `from -> to`. Returns whether anything was removed.
    pub fn remove_edge(&mut self, from: &N, to: &N) -> bool {
        let (Some(&fi), Some(&ti)) = (self.index.get(from), self.index.get(to)) else {
            return false;
        };
        let before = self.adj[fi].len();
        self.adj[fi].retain(|&(t, _)| t != ti);
        self.adj[fi].len() != before
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum()
    }

    /// Nodes in first-insertion order.
    pub fn node_iter(&self) -> std::slice::Iter<'_, N> {
        self.nodes.iter()
    }

    /// Every edge, grouped by source node in node order.
    pub fn all_edges(&self) -> impl Iterator<Item = Edge<N, W>> + '_ {
        self.adj.iter().enumerate().flat_map(move |(fi, out)| {
            out.iter()
                .map(move |&(ti, w)| Edge::new(self.nodes[fi].clone(), self.nodes[ti].clone(), w))
        })
    }

    /// Out-neighbours of `node` with their weights; empty for unknown nodes.
    pub fn successors(&self, node: &N) -> impl Iterator<Item = (&N, W)> + '_ {
        self.index
            .get(node)
            .map(|&i| self.adj[i].as_slice())
            .unwrap_or_default()
            .iter()
            .map(|&(ti, w)| (&self.nodes[ti], w))
    }

    /// Weight of the first `from -> to` edge, if any.
    pub fn weight(&self, from: &N, to: &N) -> Option<W> {
        let ti = *self.index.get(to)?;
        let fi = *self.index.get(from)?;
        self.adj[fi].iter().find(|&&(t, _)| t == ti).map(|&(_, w)| w)
    }
}

impl<N: NodeId, W: Weight> Graph for DiGraph<N, W> {
    type Node = N;

    fn neighbors(&self, node: &N, buf: &mut Vec<N>) {
        if let Some(&i) = self.index.get(node) {
            buf.extend(self.adj[i].iter().map(|&(ti, _)| self.nodes[ti].clone()));
        }
    }

    fn contains(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }
}

impl<N: NodeId, W: Weight> WeightedGraph for DiGraph<N, W> {
    type Weight = W;

    fn edges(&self, node: &N, buf: &mut Vec<(N, W)>) {
        if let Some(&i) = self.index.get(node) {
            buf.extend(self.adj[i].iter().map(|&(ti, w)| (self.nodes[ti].clone(), w)));
        }
    }
}

impl<N: NodeId, W: Weight> NodeSet for DiGraph<N, W> {
    fn nodes(&self) -> Vec<N> {
        self.nodes.clone()
    }
}
