//! Domain ports (traits)
//!
//! Port traits define the storage the feed service needs.
//! Adapters provide concrete implementations of these traits.

pub mod repositories;

pub use repositories::{FollowRepository, PostRepository};

#[cfg(test)]
pub use repositories::{MockFollowRepository, MockPostRepository};
