use thiserror::Error;

use crate::geom::Point;

/// Errors that can occur when parsing a [`CharGrid`](crate::CharGrid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The text held no cells once trimmed.
    #[error("grid is empty")]
    Empty,
    /// Lines have different widths.
    #[error("grid line {row} has width {found}, expected {expected}")]
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside the permitted set was found.
    #[error("grid contains invalid rune \u{201c}{ch}\u{201d} at {pos}")]
    InvalidRune { ch: char, pos: Point },
}
