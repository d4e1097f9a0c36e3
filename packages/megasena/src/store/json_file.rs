//! File-backed store: one JSON document per key under a data directory.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::store::KvStore;

/// Maps each key to `<dir>/<key>.json`, rewritten wholesale on every write.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| {
            DomainError::infra(InfraErrorKind::Io, format!("create {}: {e}", dir.display()))
        })?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KvStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomainError::infra(
                InfraErrorKind::Io,
                format!("read {key}: {e}"),
            )),
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<(), DomainError> {
        let path = self.path_for(key);
        // Write-then-rename so a reader never observes a half-written
        // document.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(|e| {
            DomainError::infra(InfraErrorKind::Io, format!("write {key}: {e}"))
        })?;
        fs::rename(&tmp, &path).map_err(|e| {
            DomainError::infra(InfraErrorKind::Io, format!("rename {key}: {e}"))
        })?;
        debug!(key, bytes = value.len(), "store document written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), DomainError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DomainError::infra(
                InfraErrorKind::Io,
                format!("remove {key}: {e}"),
            )),
        }
    }
}
