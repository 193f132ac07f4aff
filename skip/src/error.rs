//! Error types for skip sequences

use thiserror::Error;

/// Errors raised by [`SkipSequence`](crate::SkipSequence)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("Sequence exhausted: no elements left")]
    Exhausted,
}
