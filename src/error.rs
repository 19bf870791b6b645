//! Error types for building and querying a frozen graph.

use thiserror::Error;

use crate::Edge;

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Every way a builder, a graph or one of its iterators can reject a call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A parameter violated its contract (negative capacity, duplicate edge at freeze).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The builder already holds as many edges as it was created for.
    #[error("current capacity = {capacity} exceeded")]
    CapacityExceeded {
        /// Capacity declared when the builder was created.
        capacity: usize,
    },

    /// The builder was already frozen by `build()`.
    #[error("invalid state: {0}")]
    InvalidState(&'static str),

    /// An absent edge was handed to the builder.
    #[error("adding null edge")]
    NullInput,

    /// An exhausted iterator was advanced through `try_next`.
    #[error("no more edges in sequence")]
    EndOfSequence,

    /// The operation is not offered by this type.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),
}

/// Fieldless discriminant of [`GraphError`], convenient for matching in callers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`GraphError::InvalidArgument`].
    InvalidArgument,
    /// See [`GraphError::CapacityExceeded`].
    CapacityExceeded,
    /// See [`GraphError::InvalidState`].
    InvalidState,
    /// See [`GraphError::NullInput`].
    NullInput,
    /// See [`GraphError::EndOfSequence`].
    EndOfSequence,
    /// See [`GraphError::UnsupportedOperation`].
    UnsupportedOperation,
}

impl GraphError {
    pub(crate) fn negative_capacity(capacity: isize) -> Self {
        Self::InvalidArgument(format!(
            "capacity should be >= 0, given capacity = {capacity}"
        ))
    }

    pub(crate) fn duplicate_edge(first: Edge, second: Edge) -> Self {
        Self::InvalidArgument(format!(
            "edges with same vertices are not allowed: {first} has same vertices as {second}"
        ))
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::CapacityExceeded { .. } => ErrorKind::CapacityExceeded,
            Self::InvalidState(_) => ErrorKind::InvalidState,
            Self::NullInput => ErrorKind::NullInput,
            Self::EndOfSequence => ErrorKind::EndOfSequence,
            Self::UnsupportedOperation(_) => ErrorKind::UnsupportedOperation,
        }
    }
}
