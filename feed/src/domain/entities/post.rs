//! Post domain entity
//!
//! A post is an immutable record of one piece of content published by an
//! entity. Posts are ordered by a sequence number handed out by the feed
//! service, never by wall-clock time.

use serde::Serialize;

/// Identifier of an actor that can post and follow
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EntityId(pub i64);

impl From<i64> for EntityId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a piece of posted content. Not required to be unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ContentId(pub i64);

impl From<i64> for ContentId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position of a post in the service-wide total order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SequenceNumber(pub u64);

impl SequenceNumber {
    /// The number handed out after this one
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for SequenceNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A published post
///
/// Field order matters: the derived ordering compares `sequence` first, and
/// sequence numbers are unique within a service, so posts order by recency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Post {
    pub sequence: SequenceNumber,
    pub content_id: ContentId,
}

impl Post {
    pub fn new(content_id: ContentId, sequence: SequenceNumber) -> Self {
        Self {
            content_id,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_next_increments() {
        assert_eq!(SequenceNumber(0).next(), SequenceNumber(1));
        assert_eq!(SequenceNumber(41).next(), SequenceNumber(42));
    }

    #[test]
    fn posts_order_by_sequence_only() {
        let older = Post::new(ContentId(99), SequenceNumber(1));
        let newer = Post::new(ContentId(1), SequenceNumber(2));
        assert!(older < newer);
    }

    #[test]
    fn ids_serialize_transparently() {
        let post = Post::new(ContentId(7), SequenceNumber(3));
        let json = serde_json::to_string(&post).unwrap();
        assert_eq!(json, r#"{"sequence":3,"content_id":7}"#);
        assert_eq!(serde_json::to_string(&EntityId(5)).unwrap(), "5");
    }
}
