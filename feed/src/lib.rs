//! drillbox feed
//!
//! A small social-feed engine: entities post content, follow each other, and
//! read a merged feed of the most recent posts they can see.
//! Uses ports & adapters so the service does not care how posts are stored.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;

#[cfg(test)]
mod test_utils;

pub use app::{FeedService, FEED_SIZE};
pub use domain::entities::{ContentId, EntityId, Post, SequenceNumber};
