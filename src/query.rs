//! Query Module
//!
//! Search and pagination over the tour collection.
//!
//! Filtering keeps each match paired with its position in the unfiltered
//! collection, so row actions on a filtered page still address the right
//! record.

use crate::record::TourRecord;

/// A record that passed the filter, with its position in the full collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    pub position: usize,
    pub record: &'a TourRecord,
}

/// Records matching `query` in any field, case-insensitively
///
/// An empty query matches everything. Original order is kept.
pub fn filter<'a>(tours: &'a [TourRecord], query: &str) -> Vec<Match<'a>> {
    let needle = query.to_lowercase();
    tours
        .iter()
        .enumerate()
        .filter(|(_, record)| record.matches(&needle))
        .map(|(position, record)| Match { position, record })
        .collect()
}

/// The 1-based `page` of `items`, `page_size` at a time
///
/// Pages past the end are empty; page 0 is treated as page 1.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.max(1).saturating_sub(1).saturating_mul(page_size);
    let start = start.min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Number of pages needed for `match_count` items
pub fn page_count(match_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    match_count.div_ceil(page_size)
}
