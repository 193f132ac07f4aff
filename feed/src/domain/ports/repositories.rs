//! Repository port traits
//!
//! These traits define the interface for post and follow storage.
//! Implementations are provided by adapters (e.g., in-memory).
//!
//! Storage is in-process and cannot fail, so methods return plain values.

use crate::domain::entities::{EntityId, Post};

/// Storage for each entity's append-only post list
#[cfg_attr(test, mockall::automock)]
pub trait PostRepository {
    /// Append a post to the entity's list, creating the list if absent
    fn append(&mut self, author: EntityId, post: Post);

    /// The entity's most recent posts, at most `limit`, oldest first
    fn recent(&self, author: EntityId, limit: usize) -> Vec<Post>;

    /// Total number of posts the entity has made
    fn count(&self, author: EntityId) -> usize;
}

/// Storage for the follow graph
#[cfg_attr(test, mockall::automock)]
pub trait FollowRepository {
    /// Add an edge. Returns false if it already existed.
    fn insert(&mut self, follower: EntityId, followee: EntityId) -> bool;

    /// Remove an edge. Returns false if there was nothing to remove.
    fn remove(&mut self, follower: EntityId, followee: EntityId) -> bool;

    /// Entities the follower currently follows, in ascending id order
    fn followees(&self, follower: EntityId) -> Vec<EntityId>;
}
