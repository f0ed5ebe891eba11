//! Tour identifier generation
//!
//! Identifiers are `"T"` followed by a decimal number, zero-padded to three
//! digits. The next identifier is one past the largest number in use, so
//! gaps left by deletes are never refilled.

use crate::error::{Result, TourError};
use crate::record::{TourRecord, TOUR_ID_PREFIX};

/// Parse the numeric part of a tour identifier
///
/// "T042" → 42
pub fn parse_tour_number(tour_id: &str) -> Result<u64> {
    tour_id
        .strip_prefix(TOUR_ID_PREFIX)
        .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|digits| digits.parse().ok())
        .ok_or_else(|| TourError::MalformedTourId(tour_id.to_string()))
}

/// Format a number as a tour identifier
///
/// 7 → "T007", 1234 → "T1234"
pub fn format_tour_id(number: u64) -> String {
    format!("{TOUR_ID_PREFIX}{number:03}")
}

/// Identifier for the next tour to be added
///
/// Fails if any existing identifier has a non-numeric suffix, or if the
/// largest one leaves no room for a successor.
pub fn next_id(tours: &[TourRecord]) -> Result<String> {
    let mut highest: u64 = 0;
    for tour in tours {
        highest = highest.max(parse_tour_number(&tour.tour_id)?);
    }
    highest
        .checked_add(1)
        .map(format_tour_id)
        .ok_or_else(|| TourError::MalformedTourId(format_tour_id(highest)))
}
