//! In-memory adapter for PostRepository

use std::collections::HashMap;

use crate::domain::entities::{EntityId, Post};
use crate::domain::ports::PostRepository;

/// In-memory implementation of PostRepository
///
/// Each entity owns a `Vec` in posting order, so the most recent posts are
/// always a tail slice.
#[derive(Debug, Default)]
pub struct InMemoryPostRepository {
    posts: HashMap<EntityId, Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PostRepository for InMemoryPostRepository {
    fn append(&mut self, author: EntityId, post: Post) {
        self.posts.entry(author).or_default().push(post);
    }

    fn recent(&self, author: EntityId, limit: usize) -> Vec<Post> {
        match self.posts.get(&author) {
            Some(list) => list[list.len().saturating_sub(limit)..].to_vec(),
            None => Vec::new(),
        }
    }

    fn count(&self, author: EntityId) -> usize {
        self.posts.get(&author).map_or(0, Vec::len)
    }
}
