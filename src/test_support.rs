//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::state::Session;

/// Seed used by [`test_session`].
pub const TEST_SEED: u64 = 0x5EED;

/// Creates a test Session with a fixed shuffle seed.
pub fn test_session() -> Session {
    Session::seeded(TEST_SEED)
}
