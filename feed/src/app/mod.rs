//! Application layer
//!
//! Contains the feed service and the command driver around it.

pub mod action_parser;
pub mod feed_config;
pub mod feed_service;
pub mod session;

pub use action_parser::{help_text, parse_action, FeedAction};
pub use feed_config::{FEED_SIZE, RECENT_POSTS_PER_ENTITY};
pub use feed_service::FeedService;
pub use session::{RunSummary, Session};
