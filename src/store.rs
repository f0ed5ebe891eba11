//! Store Module
//!
//! Owns the in-memory tour collection and mirrors it to storage.
//!
//! ## Responsibilities
//! - Load the whole collection once at startup
//! - Apply positional mutations (add / replace / remove)
//! - Persist the whole collection after every mutation
//!
//! Nothing else holds a copy of the collection: readers borrow it through
//! `records()`, writers go through the mutation methods.

use crate::error::{Result, TourError};
use crate::record::TourRecord;
use crate::storage::KeyValueStorage;

/// The tour collection and its backing storage
pub struct TourStore<S: KeyValueStorage> {
    /// Backend the collection is mirrored to
    storage: S,

    /// Key the collection lives under
    key: String,

    /// Records in insertion order
    tours: Vec<TourRecord>,
}

impl<S: KeyValueStorage> TourStore<S> {
    /// Open a store, loading whatever is stored under `key`
    pub fn open(storage: S, key: impl Into<String>) -> Result<Self> {
        let mut store = Self {
            storage,
            key: key.into(),
            tours: Vec::new(),
        };
        store.load()?;
        Ok(store)
    }

    /// Replace the in-memory collection with the stored one
    ///
    /// A missing entry yields an empty collection.
    pub fn load(&mut self) -> Result<()> {
        self.tours = match self.storage.get_item(&self.key)? {
            Some(blob) => serde_json::from_str(&blob)?,
            None => Vec::new(),
        };
        tracing::debug!(key = %self.key, count = self.tours.len(), "loaded tours");
        Ok(())
    }

    /// Overwrite the stored entry with the whole collection
    pub fn persist(&self) -> Result<()> {
        let blob = serde_json::to_string(&self.tours)?;
        self.storage.set_item(&self.key, &blob)?;
        tracing::debug!(key = %self.key, count = self.tours.len(), "persisted tours");
        Ok(())
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Append a record
    pub fn add(&mut self, record: TourRecord) -> Result<()> {
        tracing::info!(tour_id = %record.tour_id, "adding tour");
        self.tours.push(record);
        self.persist()
    }

    /// Replace the record at `index` wholesale
    pub fn replace_at(&mut self, index: usize, record: TourRecord) -> Result<()> {
        let len = self.tours.len();
        let slot = self
            .tours
            .get_mut(index)
            .ok_or(TourError::IndexOutOfRange { index, len })?;

        tracing::info!(index, tour_id = %record.tour_id, "replacing tour");
        *slot = record;
        self.persist()
    }

    /// Remove and return the record at `index`
    ///
    /// Relative order of the remaining records is kept.
    pub fn remove_at(&mut self, index: usize) -> Result<TourRecord> {
        let len = self.tours.len();
        if index >= len {
            return Err(TourError::IndexOutOfRange { index, len });
        }

        let removed = self.tours.remove(index);
        tracing::info!(index, tour_id = %removed.tour_id, "removed tour");
        self.persist()?;
        Ok(removed)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// All records in insertion order
    pub fn records(&self) -> &[TourRecord] {
        &self.tours
    }

    pub fn get(&self, index: usize) -> Option<&TourRecord> {
        self.tours.get(index)
    }

    pub fn len(&self) -> usize {
        self.tours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }

    /// Position of the first record carrying `tour_id`
    pub fn position_of(&self, tour_id: &str) -> Option<usize> {
        self.tours.iter().position(|t| t.tour_id == tour_id)
    }

    pub fn contains_id(&self, tour_id: &str) -> bool {
        self.position_of(tour_id).is_some()
    }

    /// Storage key for the collection
    pub fn key(&self) -> &str {
        &self.key
    }
}
