//! All-pairs shortest distances.
//!
//! O(V³) time and O(V²) space: meant for small dense graphs, such as the
//! pairwise distances between a bounded set of points of interest.

use std::collections::HashMap;

use crate::error::{PathError, Result};
use crate::traits::{NodeId, NodeSet, WeightedGraph};
use crate::weight::{Distance, Weight};

/// A dense `V x V` matrix of shortest distances.
#[derive(Debug, Clone)]
pub struct DistanceMatrix<N, W> {
    nodes: Vec<N>,
    index: HashMap<N, usize>,
    dist: Vec<Distance<W>>,
}

impl<N: NodeId, W: Weight> DistanceMatrix<N, W> {
    /// Build an unclosed matrix from a pairwise weight function.
    ///
    /// `weight(a, b)` gives the direct edge weight, or `None` for no edge.
    /// The diagonal is zero unless `weight(a, a)` is smaller. Duplicate
    /// nodes are dropped.
    pub fn from_fn<F>(nodes: impl IntoIterator<Item = N>, mut weight: F) -> Self
    where
        F: FnMut(&N, &N) -> Option<W>,
    {
        let mut index = HashMap::new();
        let mut uniq = Vec::new();
        for n in nodes {
            if !index.contains_key(&n) {
                index.insert(n.clone(), uniq.len());
                uniq.push(n);
            }
        }

        let len = uniq.len();
        let mut dist = vec![Distance::Infinite; len * len];
        for (i, a) in uniq.iter().enumerate() {
            for (j, b) in uniq.iter().enumerate() {
                let direct = Distance::from(weight(a, b));
                dist[i * len + j] = if i == j {
                    min(Distance::Finite(W::ZERO), direct)
                } else {
                    direct
                };
            }
        }

        Self {
            nodes: uniq,
            index,
            dist,
        }
    }

    /// Run the Floyd-Warshall triple loop over the matrix.
    ///
    /// Fails with [`PathError::NegativeCycle`] as soon as a node has a
    /// negative distance to itself. A sum that leaves the weight type's
    /// range fails with [`PathError::WeightOverflow`], unless it is a route
    /// from a node back to itself, which makes it a negative cycle.
    pub fn close(&mut self) -> Result<()> {
        let len = self.nodes.len();
        for k in 0..len {
            for i in 0..len {
                let ik = self.dist[i * len + k];
                if !ik.is_finite() {
                    continue;
                }
                for j in 0..len {
                    let kj = self.dist[k * len + j];
                    let Some(through) = ik.checked_plus(kj) else {
                        if i == j && underflows(ik, kj) {
                            return Err(PathError::negative_cycle(&self.nodes[i]));
                        }
                        // Past the top of the range never beats a finite entry.
                        if !underflows(ik, kj) && self.dist[i * len + j].is_finite() {
                            continue;
                        }
                        return Err(PathError::overflow(&self.nodes[i], &self.nodes[j]));
                    };
                    if through < self.dist[i * len + j] {
                        self.dist[i * len + j] = through;
                        if i == j && matches!(through, Distance::Finite(d) if d.is_negative()) {
                            return Err(PathError::negative_cycle(&self.nodes[i]));
                        }
                    }
                }
            }
        }

        for (i, n) in self.nodes.iter().enumerate() {
            match self.dist[i * len + i] {
                Distance::Finite(d) if d.is_negative() => {
                    return Err(PathError::negative_cycle(n));
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Distance from `a` to `b`; infinite when unreachable or when either
    /// node is not in the matrix.
    pub fn get(&self, a: &N, b: &N) -> Distance<W> {
        match (self.index.get(a), self.index.get(b)) {
            (Some(&i), Some(&j)) => self.dist[i * self.nodes.len() + j],
            _ => Distance::Infinite,
        }
    }

    /// The nodes, in matrix order.
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every unordered pair `(a, b)` with `a` before `b` in matrix order,
    /// together with the distance from `a` to `b`.
    pub fn pairs(&self) -> impl Iterator<Item = (&N, &N, Distance<W>)> + '_ {
        let len = self.nodes.len();
        (0..len).flat_map(move |i| {
            (i + 1..len).map(move |j| (&self.nodes[i], &self.nodes[j], self.dist[i * len + j]))
        })
    }
}

/// Whether an overflowing sum of `a` and `b` fell below the range.
fn underflows<W: Weight>(a: Distance<W>, b: Distance<W>) -> bool {
    matches!((a, b), (Distance::Finite(x), Distance::Finite(_)) if x.is_negative())
}

fn min<W: Weight>(a: Distance<W>, b: Distance<W>) -> Distance<W> {
    if b < a { b } else { a }
}

/// All-pairs shortest distances over every node of `graph`.
///
/// Negative edge weights are allowed; parallel edges keep the lightest.
/// A negative cycle anywhere in the graph fails the call.
pub fn floyd_warshall<G>(graph: &G) -> Result<DistanceMatrix<G::Node, G::Weight>>
where
    G: WeightedGraph + NodeSet,
{
    let nodes = graph.nodes();
    let mut direct: HashMap<(G::Node, G::Node), G::Weight> = HashMap::new();
    let mut ebuf = Vec::new();
    for u in &nodes {
        ebuf.clear();
        graph.edges(u, &mut ebuf);
        for (v, w) in ebuf.drain(..) {
            direct
                .entry((u.clone(), v))
                .and_modify(|cur| {
                    if w < *cur {
                        *cur = w;
                    }
                })
                .or_insert(w);
        }
    }

    let mut matrix = DistanceMatrix::from_fn(nodes, |a, b| {
        direct.get(&(a.clone(), b.clone())).copied()
    });
    matrix.close()?;
    log::debug!("floyd-warshall closed {} nodes", matrix.len());
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dijkstra::dijkstra;
    use crate::graph::DiGraph;

    fn sample() -> DiGraph<char, i32> {
        DiGraph::from_edges([
            ('a', 'b', 3),
            ('a', 'c', 8),
            ('b', 'c', 2),
            ('c', 'a', 1),
            ('c', 'd', 4),
        ])
    }

    #[test]
    fn closes_transitively() {
        let m = floyd_warshall(&sample()).unwrap();
        assert_eq!(m.get(&'a', &'c'), Distance::Finite(5));
        assert_eq!(m.get(&'b', &'a'), Distance::Finite(3));
        assert_eq!(m.get(&'a', &'d'), Distance::Finite(9));
        assert_eq!(m.get(&'d', &'a'), Distance::Infinite);
        assert_eq!(m.get(&'d', &'d'), Distance::Finite(0));
        assert_eq!(m.get(&'a', &'z'), Distance::Infinite);
    }

    #[test]
    fn matches_dijkstra_rows() {
        let g = sample();
        let m = floyd_warshall(&g).unwrap();
        for s in m.nodes() {
            let sp = dijkstra(&g, s).unwrap();
            for t in m.nodes() {
                assert_eq!(m.get(s, t), sp.distance_to(t), "{s} -> {t}");
            }
        }
    }

    #[test]
    fn pairs_are_unordered_and_in_matrix_order() {
        let m = floyd_warshall(&sample()).unwrap();
        let pairs: Vec<_> = m.pairs().map(|(a, b, _)| (*a, *b)).collect();
        assert_eq!(
            pairs,
            vec![('a', 'b'), ('a', 'c'), ('a', 'd'), ('b', 'c'), ('b', 'd'), ('c', 'd')]
        );
    }

    #[test]
    fn negative_edges_and_cycles() {
        let g: DiGraph<u8, i32> = DiGraph::from_edges([(0, 1, 4), (1, 2, -2), (0, 2, 3)]);
        let m = floyd_warshall(&g).unwrap();
        assert_eq!(m.get(&0, &2), Distance::Finite(2));

        let cyclic: DiGraph<u8, i32> = DiGraph::from_edges([(0, 1, 1), (1, 0, -3)]);
        assert!(matches!(
            floyd_warshall(&cyclic),
            Err(PathError::NegativeCycle { .. })
        ));

        let self_loop: DiGraph<u8, i32> = DiGraph::from_edges([(0, 0, -1)]);
        assert!(floyd_warshall(&self_loop).is_err());
    }

    #[test]
    fn from_fn_builds_dense_matrix() {
        let pts = [0i64, 3, 7, 3];
        let mut m = DistanceMatrix::from_fn(pts, |a, b| Some((a - b).abs()));
        assert_eq!(m.len(), 3);
        m.close().unwrap();
        assert_eq!(m.get(&0, &7), Distance::Finite(7));
        assert_eq!(m.pairs().count(), 3);
    }

    #[test]
    fn empty_graph() {
        let g: DiGraph<char, u32> = DiGraph::new();
        let m = floyd_warshall(&g).unwrap();
        assert!(m.is_empty());
        assert_eq!(m.pairs().count(), 0);
    }

    #[test]
    fn negative_cycle_past_weight_range() {
        let g: DiGraph<char, i32> =
            DiGraph::from_edges([('a', 'b', -1_000_000_000), ('b', 'a', -1_000_000_000)]);
        assert!(matches!(
            floyd_warshall(&g),
            Err(PathError::NegativeCycle { .. })
        ));
    }

    #[test]
    fn sums_past_weight_range() {
        // a cheap direct edge shadows the overflowing detour
        let g: DiGraph<u8, u8> = DiGraph::from_edges([(0, 1, 200), (1, 2, 100), (0, 2, 5)]);
        let m = floyd_warshall(&g).unwrap();
        assert_eq!(m.get(&0, &2), Distance::Finite(5));

        let g: DiGraph<u8, u8> = DiGraph::from_edges([(0, 1, 200), (1, 2, 100)]);
        assert!(matches!(
            floyd_warshall(&g),
            Err(PathError::WeightOverflow { .. })
        ));

        let g: DiGraph<u8, i8> = DiGraph::from_edges([(0, 1, -100), (1, 2, -100)]);
        assert!(matches!(
            floyd_warshall(&g),
            Err(PathError::WeightOverflow { .. })
        ));
    }
}
