//! Test fixtures
//!
//! Factory functions for services and ids with sensible defaults.

use crate::adapters::{InMemoryFollowRepository, InMemoryPostRepository};
use crate::app::FeedService;
use crate::domain::entities::{ContentId, EntityId};

pub type TestFeedService = FeedService<InMemoryPostRepository, InMemoryFollowRepository>;

/// Create an empty in-memory feed service
pub fn service() -> TestFeedService {
    FeedService::in_memory()
}

/// Create a service with `(author, content)` posts published in order
pub fn seeded_service(posts: &[(i64, i64)]) -> TestFeedService {
    let mut service = service();
    for &(author, content) in posts {
        service.post(EntityId(author), ContentId(content));
    }
    service
}

pub fn content_ids(raw: &[i64]) -> Vec<ContentId> {
    raw.iter().copied().map(ContentId).collect()
}

pub fn ids(raw: &[i64]) -> Vec<EntityId> {
    raw.iter().copied().map(EntityId).collect()
}
