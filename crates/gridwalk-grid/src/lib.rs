//! Character grids as graphs.
//!
//! Adapters that let every algorithm in `gridwalk-paths` run unchanged on a
//! [`CharGrid`](gridwalk_core::CharGrid):
//!
//! - [`GridGraph`]: passable cells joined to their orthogonal (optionally
//!   diagonal) neighbours, configured by [`GridOptions`]
//! - [`PipeMaze`]: cells joined only where a [`PipeRules`] table says their
//!   shapes connect
//! - [`pairwise_distances`]: a closed distance matrix between points of
//!   interest under a [`Metric`]
//!
//! ```
//! use gridwalk_core::{CharGrid, Point};
//! use gridwalk_grid::GridGraph;
//!
//! let grid = CharGrid::parse("S..\n.#.\n...").unwrap();
//! let graph = GridGraph::new(&grid);
//! let start = graph.start().unwrap();
//! assert_eq!(graph.steps_between(start, Point::cell(2, 2)).unwrap(), 4);
//! ```

mod adapter;
mod pipes;
mod poi;

pub use adapter::{GridGraph, GridOptions};
pub use pipes::{PipeMaze, PipeMove, PipeRules};
pub use poi::{Metric, pairwise_distances};
