//! In-memory adapters
//!
//! Implementations of repository traits backed by standard collections.
//! Nothing survives the process.

pub mod follow_repo;
pub mod post_repo;

pub use follow_repo::InMemoryFollowRepository;
pub use post_repo::InMemoryPostRepository;
