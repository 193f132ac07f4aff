//! Domain entities
//!
//! Pure value types for the feed. No storage concerns live here.

pub mod post;

pub use post::{ContentId, EntityId, Post, SequenceNumber};
