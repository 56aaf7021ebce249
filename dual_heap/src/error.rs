use thiserror::Error;

/// Errors returned by [`DualHeap`] operations.
///
/// Every failing operation checks its preconditions first,
/// so the container is left exactly as it was.
///
/// [`DualHeap`]: struct.DualHeap.html
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum DualHeapError {
    /// Rejected argument: zero capacity or an absent element.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Insert into a container whose capacity is zero and therefore cannot grow.
    #[error("DualHeap has zero capacity")]
    InvalidState,

    /// Peek or extract on an empty container.
    #[error("DualHeap is empty")]
    NotFound,
}
