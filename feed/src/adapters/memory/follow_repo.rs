//! In-memory adapter for FollowRepository

use std::collections::{BTreeSet, HashMap};

use crate::domain::entities::EntityId;
use crate::domain::ports::FollowRepository;

/// In-memory implementation of FollowRepository
#[derive(Debug, Default)]
pub struct InMemoryFollowRepository {
    edges: HashMap<EntityId, BTreeSet<EntityId>>,
}

impl InMemoryFollowRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FollowRepository for InMemoryFollowRepository {
    fn insert(&mut self, follower: EntityId, followee: EntityId) -> bool {
        self.edges.entry(follower).or_default().insert(followee)
    }

    fn remove(&mut self, follower: EntityId, followee: EntityId) -> bool {
        let Some(set) = self.edges.get_mut(&follower) else {
            return false;
        };
        let removed = set.remove(&followee);
        if set.is_empty() {
            self.edges.remove(&follower);
        }
        removed
    }

    fn followees(&self, follower: EntityId) -> Vec<EntityId> {
        self.edges
            .get(&follower)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }
}
