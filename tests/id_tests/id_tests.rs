//! Tests for tour identifier generation

#[path = "../common/mod.rs"]
mod common;

use common::{tour, tours};
use tourdesk::id::{format_tour_id, next_id, parse_tour_number};
use tourdesk::TourError;

#[test]
fn test_next_id_empty_collection() {
    assert_eq!(next_id(&[]).unwrap(), "T001");
}

#[test]
fn test_next_id_after_sequence() {
    assert_eq!(next_id(&tours(5)).unwrap(), "T006");
}

#[test]
fn test_next_id_uses_maximum_not_count() {
    let records = vec![tour("T010", "Rome"), tour("T002", "Oslo")];

    assert_eq!(next_id(&records).unwrap(), "T011");
}

#[test]
fn test_next_id_does_not_refill_gaps() {
    let records = vec![tour("T001", "Rome"), tour("T004", "Oslo")];

    assert_eq!(next_id(&records).unwrap(), "T005");
}

#[test]
fn test_next_id_exceeds_every_existing_suffix() {
    let records = vec![
        tour("T007", "Rome"),
        tour("T120", "Oslo"),
        tour("T033", "Lima"),
        tour("T099", "Kyoto"),
    ];

    let next = parse_tour_number(&next_id(&records).unwrap()).unwrap();

    for record in &records {
        assert!(next > parse_tour_number(&record.tour_id).unwrap());
    }
}

#[test]
fn test_next_id_past_three_digits() {
    let records = vec![tour("T999", "Rome")];

    assert_eq!(next_id(&records).unwrap(), "T1000");
}

#[test]
fn test_next_id_malformed_suffix() {
    let records = vec![tour("T001", "Rome"), tour("Tabc", "Oslo")];

    match next_id(&records) {
        Err(TourError::MalformedTourId(id)) => assert_eq!(id, "Tabc"),
        other => panic!("expected MalformedTourId, got {other:?}"),
    }
}

#[test]
fn test_next_id_at_numeric_limit() {
    let records = vec![tour(&format!("T{}", u64::MAX), "Rome")];

    assert!(matches!(next_id(&records), Err(TourError::MalformedTourId(_))));
}

#[test]
fn test_parse_tour_number_rejects_bad_shapes() {
    for id in ["", "T", "001", "X001", "T-01", "T 01", "T01a"] {
        assert!(parse_tour_number(id).is_err(), "{id:?} should not parse");
    }
}

#[test]
fn test_format_tour_id_padding() {
    assert_eq!(format_tour_id(1), "T001");
    assert_eq!(format_tour_id(42), "T042");
    assert_eq!(format_tour_id(314), "T314");
}
