//! Error types for graf
//!
//! The only fatal condition is referencing a vertex that is not in the
//! graph. "No path between two vertices" is an expected outcome of path
//! queries and is reported as a result value (`PathResult` with
//! `found == false`), never as an error.

use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex not found: {label}")]
    VertexNotFound { label: String },
}

impl GraphError {
    /// Build a `VertexNotFound` from any displayable vertex label
    pub fn vertex_not_found(label: impl std::fmt::Display) -> Self {
        GraphError::VertexNotFound {
            label: label.to_string(),
        }
    }
}

/// Result type alias for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;
