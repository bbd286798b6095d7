//! Error type for graph algorithms.
//!
//! Node identifiers are rendered with `Debug` so the error stays
//! independent of the graph's node type. An unreachable goal is not an
//! error for the search functions: they return `Ok(None)`.

use std::fmt::Debug;

use thiserror::Error;

/// Failures a single algorithm call can report to its caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("node not found: {node}")]
    NodeNotFound { node: String },

    #[error("no path from {start} to {goal}")]
    NoPathFound { start: String, goal: String },

    #[error("negative-weight cycle reachable from {start}")]
    NegativeCycle { start: String },

    #[error("invalid edge weight {weight} on {from} -> {to}")]
    InvalidEdgeWeight {
        from: String,
        to: String,
        weight: String,
    },

    #[error("distance overflows the weight type on {from} -> {to}")]
    WeightOverflow { from: String, to: String },

    #[error("graph is cyclic (cycle through {node})")]
    CycleDetected { node: String },
}

impl PathError {
    pub fn node_not_found(node: &impl Debug) -> Self {
        PathError::NodeNotFound {
            node: format!("{node:?}"),
        }
    }

    pub fn no_path(start: &impl Debug, goal: &impl Debug) -> Self {
        PathError::NoPathFound {
            start: format!("{start:?}"),
            goal: format!("{goal:?}"),
        }
    }

    pub fn negative_cycle(start: &impl Debug) -> Self {
        PathError::NegativeCycle {
            start: format!("{start:?}"),
        }
    }

    pub fn invalid_weight(from: &impl Debug, to: &impl Debug, weight: &impl Debug) -> Self {
        PathError::InvalidEdgeWeight {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
            weight: format!("{weight:?}"),
        }
    }

    pub fn overflow(from: &impl Debug, to: &impl Debug) -> Self {
        PathError::WeightOverflow {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }

    pub fn cycle(node: &impl Debug) -> Self {
        PathError::CycleDetected {
            node: format!("{node:?}"),
        }
    }
}

/// Result type alias for graph algorithms.
pub type Result<T> = std::result::Result<T, PathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_render_nodes_with_debug() {
        assert_eq!(
            PathError::node_not_found(&"Z").to_string(),
            "node not found: \"Z\""
        );
        assert_eq!(
            PathError::invalid_weight(&1, &2, &-4).to_string(),
            "invalid edge weight -4 on 1 -> 2"
        );
        assert_eq!(
            PathError::no_path(&(0, 0), &(2, 2)).to_string(),
            "no path from (0, 0) to (2, 2)"
        );
        assert_eq!(
            PathError::overflow(&'a', &'b').to_string(),
            "distance overflows the weight type on 'a' -> 'b'"
        );
    }
}
