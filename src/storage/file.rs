//! File-backed storage
//!
//! Maps each key to `{data_dir}/{key}.json`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Result, TourError};

use super::KeyValueStorage;

/// Storage rooted at a directory on disk
#[derive(Debug, Clone)]
pub struct FileStorage {
    /// Directory holding one file per key
    data_dir: PathBuf,
}

impl FileStorage {
    const EXTENSION: &'static str = "json";

    /// Open storage in `path`, creating the directory if needed
    pub fn open(path: &Path) -> Result<Self> {
        fs::create_dir_all(path)?;
        tracing::debug!(dir = %path.display(), "opened file storage");

        Ok(Self {
            data_dir: path.to_path_buf(),
        })
    }

    /// Get the data directory path
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// File that holds `key`
    ///
    /// "tours" → "{data_dir}/tours.json"
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(TourError::Config(format!("invalid storage key {key:?}")));
        }
        Ok(self.data_dir.join(format!("{key}.{}", Self::EXTENSION)))
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        fs::write(&path, value)?;
        Ok(())
    }
}
