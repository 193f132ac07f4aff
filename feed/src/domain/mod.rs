//! Domain layer
//!
//! Contains pure business types with no storage dependencies.
//! - `entities`: Domain models (posts and the ids around them)
//! - `ports`: Trait definitions for post and follow storage

pub mod entities;
pub mod ports;
