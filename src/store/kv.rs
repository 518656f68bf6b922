use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use thiserror::Error;

/// Faults from the key-value store layer
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to persist {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        source: tempfile::PersistError,
    },
}

/// File-backed key-value store: one `<key>.json` file per key under the
/// data directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    fn slot(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    /// Read the raw value for a key; absent slot yields `None`
    pub fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.slot(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    /// Write the raw value for a key atomically via temp file + rename
    pub fn set(&self, key: &str, raw: &str) -> Result<(), StoreError> {
        let path = self.slot(key);

        // Create temp file in the same directory so the rename stays on
        // one filesystem
        let mut temp_file = NamedTempFile::new_in(&self.root)?;
        temp_file.write_all(raw.as_bytes())?;
        temp_file.as_file().sync_all()?;
        temp_file
            .persist(&path)
            .map_err(|source| StoreError::Persist { path, source })?;

        Ok(())
    }
}
