//! Configuration for TourDesk
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Result, TourError};

/// Main configuration for a TourDesk instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for file-backed storage
    /// Internal structure:
    ///   {data_dir}/
    ///     └── {storage_key}.json   (the whole tour collection)
    pub data_dir: PathBuf,

    /// Key under which the collection is stored
    pub storage_key: String,

    // -------------------------------------------------------------------------
    // Table Configuration
    // -------------------------------------------------------------------------
    /// Rows shown per table page
    pub rows_per_page: usize,

    // -------------------------------------------------------------------------
    // Notifier Configuration
    // -------------------------------------------------------------------------
    /// How long a status message stays visible (milliseconds)
    pub toast_duration_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./tourdesk_data"),
            storage_key: "tours".to_string(),
            rows_per_page: 5,
            toast_duration_ms: 2500,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check values that would make the table or storage unusable
    pub fn validate(&self) -> Result<()> {
        if self.rows_per_page == 0 {
            return Err(TourError::Config(
                "rows_per_page must be at least 1".to_string(),
            ));
        }
        if self.storage_key.trim().is_empty() {
            return Err(TourError::Config("storage_key must not be empty".to_string()));
        }
        Ok(())
    }

    /// Toast visibility as a Duration
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root for file storage)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the storage key for the collection
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.config.storage_key = key.into();
        self
    }

    /// Set the number of rows per page
    pub fn rows_per_page(mut self, rows: usize) -> Self {
        self.config.rows_per_page = rows;
        self
    }

    /// Set the toast duration (in milliseconds)
    pub fn toast_duration_ms(mut self, ms: u64) -> Self {
        self.config.toast_duration_ms = ms;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
