//! Connected-component labelling.

use std::collections::HashMap;

use crate::traits::{NodeId, NodeSet};

/// A partition of a graph's nodes into components.
///
/// Components are numbered in discovery order; within a component, nodes
/// are listed in the order they were reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Components<N: NodeId> {
    groups: Vec<Vec<N>>,
    labels: HashMap<N, usize>,
}

impl<N: NodeId> Components<N> {
    /// Label of the component holding `node`, if the node was labelled.
    pub fn component_of(&self, node: &N) -> Option<usize> {
        self.labels.get(node).copied()
    }

    /// Whether `a` and `b` belong to the same component.
    pub fn connected(&self, a: &N, b: &N) -> bool {
        match (self.component_of(a), self.component_of(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn groups(&self) -> &[Vec<N>] {
        &self.groups
    }

    pub fn into_groups(self) -> Vec<Vec<N>> {
        self.groups
    }

    /// The largest component (the first one on ties).
    pub fn largest(&self) -> Option<&[N]> {
        self.groups
            .iter()
            .enumerate()
            .max_by(|(i, a), (j, b)| a.len().cmp(&b.len()).then(j.cmp(i)))
            .map(|(_, g)| g.as_slice())
    }
}

/// Label every node with a connected-component ID.
///
/// Two nodes share a component when one is reachable from the other by
/// following out-edges from whichever was labelled first. On symmetric
/// graphs (undirected edges, grids) these are the true connected
/// components. Every node appears in exactly one group.
pub fn connected_components<G: NodeSet>(graph: &G) -> Components<G::Node> {
    let mut labels: HashMap<G::Node, usize> = HashMap::new();
    let mut groups: Vec<Vec<G::Node>> = Vec::new();
    let mut stack = Vec::new();
    let mut nbuf = Vec::new();

    for start in graph.nodes() {
        if labels.contains_key(&start) {
            continue;
        }

        // Iterative DFS from `start`.
        let label = groups.len();
        let mut group = vec![start.clone()];
        labels.insert(start.clone(), label);
        stack.push(start);

        while let Some(node) = stack.pop() {
            nbuf.clear();
            graph.neighbors(&node, &mut nbuf);
            for n in nbuf.drain(..) {
                if !labels.contains_key(&n) {
                    labels.insert(n.clone(), label);
                    group.push(n.clone());
                    stack.push(n);
                }
            }
        }

        groups.push(group);
    }

    log::debug!(
        "connected components: {} groups over {} nodes",
        groups.len(),
        labels.len()
    );
    Components { groups, labels }
}
