use std::fmt::Debug;
use std::hash::Hash;

use crate::weight::Weight;

/// Anything usable as a node identifier: comparable, hashable and printable
/// for error messages.
pub trait NodeId: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> NodeId for T {}

/// Minimal graph interface: neighbour enumeration.
///
/// Every algorithm in this crate is written against this capability rather
/// than against a concrete representation, so adjacency lists and implicit
/// grids are searched by the same code.
pub trait Graph {
    type Node: NodeId;

    /// Append the out-neighbours of `node` into `buf`, in a deterministic
    /// order. The caller clears `buf` before calling.
    fn neighbors(&self, node: &Self::Node, buf: &mut Vec<Self::Node>);

    /// Whether `node` is resolvable in this graph.
    fn contains(&self, node: &Self::Node) -> bool;
}

/// Graph with weighted edges.
pub trait WeightedGraph: Graph {
    type Weight: Weight;

    /// Append `(neighbour, weight)` for every out-edge of `node` into `buf`.
    /// The caller clears `buf` before calling.
    fn edges(&self, node: &Self::Node, buf: &mut Vec<(Self::Node, Self::Weight)>);
}

/// Weighted graph with a heuristic for A*.
pub trait AstarGraph: WeightedGraph {
    /// Estimate of the remaining cost from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: &Self::Node, to: &Self::Node) -> Self::Weight;
}

/// Graph whose node set can be enumerated.
pub trait NodeSet: Graph {
    /// Every node, in a deterministic order.
    fn nodes(&self) -> Vec<Self::Node>;
}

impl<G: Graph + ?Sized> Graph for &G {
    type Node = G::Node;

    fn neighbors(&self, node: &Self::Node, buf: &mut Vec<Self::Node>) {
        (**self).neighbors(node, buf)
    }

    fn contains(&self, node: &Self::Node) -> bool {
        (**self).contains(node)
    }
}

impl<G: WeightedGraph + ?Sized> WeightedGraph for &G {
    type Weight = G::Weight;

    fn edges(&self, node: &Self::Node, buf: &mut Vec<(Self::Node, Self::Weight)>) {
        (**self).edges(node, buf)
    }
}

impl<G: NodeSet + ?Sized> NodeSet for &G {
    fn nodes(&self) -> Vec<Self::Node> {
        (**self).nodes()
    }
}
