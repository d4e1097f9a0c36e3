//! Engine configuration.

use std::env;
use std::path::PathBuf;

/// Environment variable overriding where `JsonFileStore` keeps its
/// documents.
pub const DATA_DIR_ENV: &str = "MEGASENA_DATA_DIR";

/// Resolve the data directory: `MEGASENA_DATA_DIR` when set, otherwise
/// `.megasena` under the current working directory.
pub fn data_dir() -> PathBuf {
    env::var_os(DATA_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(".megasena"))
}
