//! Feed service
//!
//! Owns the post lists and follow graph for a set of entities and assembles
//! each entity's feed: the most recent posts across the entity itself and
//! everyone it follows.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::adapters::{InMemoryFollowRepository, InMemoryPostRepository};
use crate::app::feed_config::{FEED_SIZE, RECENT_POSTS_PER_ENTITY};
use crate::domain::entities::{ContentId, EntityId, Post, SequenceNumber};
use crate::domain::ports::{FollowRepository, PostRepository};

/// Service for posting, following, and reading feeds
pub struct FeedService<PR, FR>
where
    PR: PostRepository,
    FR: FollowRepository,
{
    posts: PR,
    follows: FR,
    /// Sequence number the next post will receive
    next_sequence: SequenceNumber,
}

impl FeedService<InMemoryPostRepository, InMemoryFollowRepository> {
    /// A service backed by fresh in-memory storage
    pub fn in_memory() -> Self {
        Self::new(InMemoryPostRepository::new(), InMemoryFollowRepository::new())
    }
}

impl Default for FeedService<InMemoryPostRepository, InMemoryFollowRepository> {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl<PR, FR> FeedService<PR, FR>
where
    PR: PostRepository,
    FR: FollowRepository,
{
    pub fn new(posts: PR, follows: FR) -> Self {
        Self {
            posts,
            follows,
            next_sequence: SequenceNumber::default(),
        }
    }

    /// Publish a post for `author`. Duplicate content ids are kept as distinct posts.
    pub fn post(&mut self, author: EntityId, content_id: ContentId) -> Post {
        let post = Post::new(content_id, self.next_sequence);
        self.next_sequence = self.next_sequence.next();
        self.posts.append(author, post);

        tracing::debug!(%author, %content_id, sequence = %post.sequence, "Post published");
        post
    }

    /// Make `follower` follow `followee`. Following twice is a no-op.
    pub fn follow(&mut self, follower: EntityId, followee: EntityId) {
        if self.follows.insert(follower, followee) {
            tracing::debug!(%follower, %followee, "Follow added");
        }
    }

    /// Remove a follow edge. Missing edges are ignored so this is safe to call speculatively.
    pub fn unfollow(&mut self, follower: EntityId, followee: EntityId) {
        if self.follows.remove(follower, followee) {
            tracing::debug!(%follower, %followee, "Follow removed");
        } else {
            tracing::debug!(%follower, %followee, "Unfollow ignored, no such edge");
        }
    }

    /// Content ids of the newest posts visible to `entity`, newest first, at most `FEED_SIZE`
    pub fn get_feed(&self, entity: EntityId) -> Vec<ContentId> {
        let followees = self.follows.followees(entity);
        let candidates =
            std::iter::once(entity).chain(followees.into_iter().filter(|id| *id != entity));

        // Min-heap of the best posts seen so far; the root is the oldest survivor.
        let mut heap: BinaryHeap<Reverse<Post>> = BinaryHeap::with_capacity(FEED_SIZE + 1);
        let mut scanned = 0usize;

        for candidate in candidates {
            for post in self.posts.recent(candidate, RECENT_POSTS_PER_ENTITY) {
                scanned += 1;
                heap.push(Reverse(post));
                if heap.len() > FEED_SIZE {
                    heap.pop();
                }
            }
        }

        tracing::trace!(%entity, scanned, kept = heap.len(), "Feed assembled");

        // Ascending order of `Reverse<Post>` is descending sequence order.
        heap.into_sorted_vec()
            .into_iter()
            .map(|Reverse(post)| post.content_id)
            .collect()
    }

    /// Entities `entity` follows, in ascending id order
    pub fn followees(&self, entity: EntityId) -> Vec<EntityId> {
        self.follows.followees(entity)
    }

    /// Number of posts `entity` has published
    pub fn post_count(&self, entity: EntityId) -> usize {
        self.posts.count(entity)
    }

    /// Sequence number the next post will be assigned
    pub fn next_sequence(&self) -> SequenceNumber {
        self.next_sequence
    }
}
