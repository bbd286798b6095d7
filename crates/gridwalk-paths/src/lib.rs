//! Graph traversal, shortest-path and structural algorithms.
//!
//! Every algorithm is written against a small set of capability traits
//! rather than a concrete representation, so the insertion-ordered
//! [`DiGraph`] and implicit grids (see the `gridwalk-grid` crate) are
//! searched by the same code:
//!
//! - **Traversal**: [`bfs`], [`dfs`] and their hooked variants
//! - **Unweighted shortest paths**: [`bfs_path`], [`bfs_distances`], [`bfs_map`]
//! - **Weighted shortest paths**: [`dijkstra`], [`astar_path`], [`bellman_ford`],
//!   [`floyd_warshall`]
//! - **Structure**: [`topological_sort`], [`has_cycle`], [`connected_components`],
//!   [`minimum_spanning_tree`] over a [`UnionFind`]
//!
//! Each call allocates its own frontier, visited set and result, and
//! never mutates the graph, so concurrent calls over a shared graph are safe.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Graph`] | BFS, DFS |
//! | [`NodeSet`] : [`Graph`] | topological sort, cycles, components |
//! | [`WeightedGraph`] : [`Graph`] | Dijkstra, A* with a custom heuristic |
//! | [`AstarGraph`] : [`WeightedGraph`] | A* |
//! | [`WeightedGraph`] + [`NodeSet`] | Bellman-Ford, Floyd-Warshall, spanning trees |
//!
//! # Failures
//!
//! Unknown start or goal nodes, negative weights where they are not
//! allowed, negative cycles and cyclic input to a topological sort are
//! reported as [`PathError`]. An unreachable goal is not an error: the
//! search returns `Ok(None)`.

mod astar;
mod bellman_ford;
mod bfs;
mod cc;
mod cycle;
mod dijkstra;
mod distance;
pub mod error;
mod floyd_warshall;
mod frontier;
mod graph;
mod kruskal;
mod path;
mod topo;
mod traits;
mod traverse;
mod union_find;
mod weight;

pub use astar::{astar_path, astar_path_with};
pub use bellman_ford::bellman_ford;
pub use bfs::{bfs_distances, bfs_map, bfs_path};
pub use cc::{Components, connected_components};
pub use cycle::has_cycle;
pub use dijkstra::{dijkstra, dijkstra_map, dijkstra_path};
pub use distance::{chebyshev, euclidean, manhattan};
pub use error::{PathError, Result};
pub use floyd_warshall::{DistanceMatrix, floyd_warshall};
pub use graph::{DiGraph, Edge};
pub use kruskal::{SpanningTree, kruskal, minimum_spanning_tree};
pub use path::{Path, PathNode, ShortestPaths};
pub use topo::topological_sort;
pub use traits::{AstarGraph, Graph, NodeId, NodeSet, WeightedGraph};
pub use traverse::{bfs, bfs_with, dfs, dfs_recursive, dfs_with};
pub use union_find::UnionFind;
pub use weight::{Distance, Weight};
