//! Feed configuration constants
//!
//! Fixed limits for feed assembly.

/// Maximum number of posts returned by a single feed request
pub const FEED_SIZE: usize = 10;

/// Posts examined per candidate entity when assembling a feed.
/// Older posts can never outrank the candidate's own last `FEED_SIZE`.
pub const RECENT_POSTS_PER_ENTITY: usize = FEED_SIZE;
