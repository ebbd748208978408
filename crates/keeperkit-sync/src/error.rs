//! Batch join error types.

use thiserror::Error;

/// Errors surfaced by a blocking join.
///
/// `E` is the error type of the joined computations.
#[derive(Debug, Error)]
pub enum SyncError<E> {
    /// A computation resolved to an error.
    #[error("Computation {index} failed: {source}")]
    Failed {
        index: usize,
        #[source]
        source: E,
    },

    /// A spawned computation panicked.
    #[error("Computation {index} panicked: {message}")]
    Panicked { index: usize, message: String },

    /// A spawned computation was cancelled before completing.
    #[error("Computation {index} was cancelled")]
    Cancelled { index: usize },

    /// The runtime driving the join could not be built.
    #[error("Failed to build runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

impl<E> SyncError<E> {
    /// Position of the offending computation in the submitted batch.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Failed { index, .. } | Self::Panicked { index, .. } | Self::Cancelled { index } => {
                Some(*index)
            }
            Self::Runtime(_) => None,
        }
    }

    /// Consume the error, returning the computation's own error if there is one.
    pub fn into_source(self) -> Option<E> {
        match self {
            Self::Failed { source, .. } => Some(source),
            _ => None,
        }
    }
}
