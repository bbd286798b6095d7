//! Kruskal's minimum spanning tree.

use std::collections::HashMap;

use crate::error::{PathError, Result};
use crate::graph::Edge;
use crate::traits::{NodeSet, WeightedGraph};
use crate::union_find::UnionFind;
use crate::weight::Weight;

/// Edges accepted into a spanning tree and their summed weight.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpanningTree<N, W> {
    pub edges: Vec<Edge<N, W>>,
    pub total: W,
}

impl<N, W> SpanningTree<N, W> {
    /// Number of accepted edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Minimum spanning tree over nodes `0..node_count`.
///
/// Edges are treated as undirected and sorted by weight with a stable sort,
/// so equal weights keep their input order. Edges joining two distinct sets
/// are accepted until `node_count - 1` are chosen; a disconnected input
/// yields a minimum spanning forest. An endpoint outside `0..node_count`
/// fails with [`PathError::NodeNotFound`].
pub fn kruskal<W: Weight>(
    node_count: usize,
    edges: &[Edge<usize, W>],
) -> Result<SpanningTree<usize, W>> {
    if let Some(e) = edges.iter().find(|e| e.from >= node_count || e.to >= node_count) {
        let bad = if e.from >= node_count { e.from } else { e.to };
        return Err(PathError::node_not_found(&bad));
    }

    let mut sorted: Vec<&Edge<usize, W>> = edges.iter().collect();
    sorted.sort_by(|a, b| a.weight.order(&b.weight));

    let target = node_count.saturating_sub(1);
    let mut uf = UnionFind::new(node_count);
    let mut tree = SpanningTree {
        edges: Vec::with_capacity(target),
        total: W::ZERO,
    };
    for e in sorted {
        if tree.edges.len() == target {
            break;
        }
        if uf.union(e.from, e.to) {
            tree.total = tree.total + e.weight;
            tree.edges.push(*e);
        }
    }

    log::debug!(
        "kruskal: {} of {} edges accepted, {} components",
        tree.edges.len(),
        edges.len(),
        uf.set_count()
    );
    Ok(tree)
}

/// Minimum spanning tree (or forest) of a weighted graph.
///
/// Every out-edge is taken as an undirected edge, so a graph built with
/// [`DiGraph::add_undirected_edge`](crate::DiGraph::add_undirected_edge)
/// yields each edge once; the reverse copy is rejected as a cycle.
pub fn minimum_spanning_tree<G>(graph: &G) -> Result<SpanningTree<G::Node, G::Weight>>
where
    G: WeightedGraph + NodeSet,
{
    let nodes = graph.nodes();
    let index: HashMap<&G::Node, usize> = nodes.iter().enumerate().map(|(i, n)| (n, i)).collect();

    let mut indexed = Vec::new();
    let mut ebuf = Vec::new();
    for (fi, u) in nodes.iter().enumerate() {
        ebuf.clear();
        graph.edges(u, &mut ebuf);
        for (v, w) in ebuf.drain(..) {
            let ti = *index
                .get(&v)
                .ok_or_else(|| PathError::node_not_found(&v))?;
            indexed.push(Edge::new(fi, ti, w));
        }
    }

    let tree = kruskal(nodes.len(), &indexed)?;
    Ok(SpanningTree {
        edges: tree
            .edges
            .into_iter()
            .map(|e| Edge::new(nodes[e.from].clone(), nodes[e.to].clone(), e.weight))
            .collect(),
        total: tree.total,
    })
}
