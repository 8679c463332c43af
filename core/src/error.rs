use thiserror::Error;

use crate::graph::VertexId;

/// Errors raised by graph construction and traversal entry points.
///
/// All validation runs before any state is touched, so a returned error
/// never leaves a half-applied edge behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex id outside `[0, vertex_count)`.
    #[error("vertex {vertex} out of range (graph has {vertex_count} vertices)")]
    OutOfRange {
        vertex: VertexId,
        vertex_count: usize,
    },

    /// A malformed construction argument, such as a zero vertex count.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, GraphError>;
