//! Tour record
//!
//! The single entity managed by TourDesk. Field names serialize in
//! camelCase so the stored blob keeps the `tourId`/`startDate` layout.

use serde::{Deserialize, Serialize};

/// Prefix shared by every tour identifier
pub const TOUR_ID_PREFIX: &str = "T";

/// One tour entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourRecord {
    pub tour_id: String,
    pub name: String,
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub price: String,
    pub tour_guide: String,
}

impl TourRecord {
    /// All seven fields in display order
    pub fn fields(&self) -> [&str; 7] {
        [
            &self.tour_id,
            &self.name,
            &self.destination,
            &self.start_date,
            &self.end_date,
            &self.price,
            &self.tour_guide,
        ]
    }

    /// Case-insensitive substring match against any field
    ///
    /// `needle` must already be lower-cased.
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self
                .fields()
                .iter()
                .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Column headers matching `TourRecord::fields`
pub const COLUMN_HEADERS: [&str; 7] = [
    "Tour ID",
    "Name",
    "Destination",
    "Start Date",
    "End Date",
    "Price",
    "Guide",
];
