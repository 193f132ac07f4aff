//! drillbox skip
//!
//! An iterator wrapper that lets callers suppress specific upcoming values.
//! See [`SkipSequence`].

pub mod error;
pub mod sequence;

pub use error::SequenceError;
pub use sequence::SkipSequence;
