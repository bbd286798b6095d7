//! **gridwalk-core**: the foundational types shared by the *gridwalk* crates.
//!
//! This crate provides geometry primitives ([`Point`], [`Direction`],
//! [`Range`]) and the read-only character grid ([`CharGrid`]) that puzzle
//! inputs are parsed into before being searched as graphs.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::{Direction, Point, Range, RangeIter};
pub use grid::CharGrid;
