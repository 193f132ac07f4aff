//! Test utilities
//!
//! Fixtures for building services and expected values in unit tests.
//! Mocks of the repository ports come from `mockall::automock` on the traits
//! themselves (see `domain::ports`).

pub mod fixtures;

pub use fixtures::*;
