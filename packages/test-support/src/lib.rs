//! Test support utilities for generating unique test data
//!
//! This crate provides utilities to help generate unique test data using ULIDs
//! to ensure test isolation and avoid conflicts between test runs.

use ulid::Ulid;

/// Generate a unique string with the given prefix
///
/// # Arguments
/// * `prefix` - The prefix to use for the unique string
///
/// # Returns
/// A unique string in the format `{prefix}-{ulid}`
///
/// # Examples
/// ```
/// use test_support::unique_str;
///
/// let id1 = unique_str("draw");
/// let id2 = unique_str("draw");
/// assert_ne!(id1, id2);
/// assert!(id1.starts_with("draw-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique player name
///
/// # Returns
/// A unique player name in the format `player-{ulid}`
///
/// # Examples
/// ```
/// use test_support::unique_player;
///
/// let p1 = unique_player();
/// let p2 = unique_player();
/// assert_ne!(p1, p2);
/// assert!(p1.starts_with("player-"));
/// ```
pub fn unique_player() -> String {
    unique_str("player")
}
