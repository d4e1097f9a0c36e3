//! Key-value persistence seam.
//!
//! The engine keeps exactly two persisted documents: the game collection
//! and the most recent draw. Each write replaces a document wholesale;
//! there is no incremental patching.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::errors::domain::DomainError;

/// Persisted key for the game collection.
pub const GAMES_KEY: &str = "megasena_games";
/// Persisted key for the most recent draw.
pub const LAST_DRAW_KEY: &str = "megasena_last_draw";

/// Minimal string key-value store.
///
/// Values are opaque JSON documents. A missing key is `Ok(None)`, not an
/// error; removing a missing key is a no-op.
pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError>;
    fn put(&self, key: &str, value: &str) -> Result<(), DomainError>;
    fn remove(&self, key: &str) -> Result<(), DomainError>;
}
