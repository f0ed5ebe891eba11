//! Tests for the add/edit form
//!
//! These tests verify:
//! - Add mode generates an id and rejects duplicates
//! - Edit mode pre-fills, locks the id and replaces in place
//! - Submit closes and clears; cancel never persists

#[path = "../common/mod.rs"]
mod common;

use common::tours;
use tourdesk::form::{FormController, FormMode, Submission};
use tourdesk::storage::MemoryStorage;
use tourdesk::{TourError, TourStore};

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_store(n: usize) -> TourStore<MemoryStorage> {
    let mut store = TourStore::open(MemoryStorage::new(), "tours").unwrap();
    for record in tours(n) {
        store.add(record).unwrap();
    }
    store
}

fn fill(form: &mut FormController, destination: &str) {
    form.set_name(format!("{destination} Tour"));
    form.set_destination(destination);
    form.set_start_date("2026-09-01");
    form.set_end_date("2026-09-10");
    form.set_price("850");
    form.set_tour_guide("Ahmed");
}

// =============================================================================
// Add Mode Tests
// =============================================================================

#[test]
fn test_new_form_is_closed() {
    let form = FormController::new();

    assert!(!form.is_open());
    assert_eq!(form.mode(), None);
    assert_eq!(form.title(), None);
}

#[test]
fn test_open_add_generates_id() {
    let store = setup_store(5);
    let mut form = FormController::new();

    form.open_add(store.records()).unwrap();

    assert_eq!(form.mode(), Some(FormMode::Add));
    assert_eq!(form.title(), Some("Add New Tour"));
    assert_eq!(form.fields().tour_id, "T006");
    assert!(form.fields().name.is_empty());
    assert!(!form.tour_id_read_only());
}

#[test]
fn test_add_submit_appends_and_closes() {
    let mut store = setup_store(2);
    let mut form = FormController::new();

    form.open_add(store.records()).unwrap();
    fill(&mut form, "Cusco");
    let submission = form.submit(&mut store).unwrap();

    match submission {
        Submission::Added(record) => {
            assert_eq!(record.tour_id, "T003");
            assert_eq!(record.destination, "Cusco");
        }
        other => panic!("expected Added, got {other:?}"),
    }
    assert_eq!(store.len(), 3);
    assert!(!form.is_open());
    assert!(form.fields().tour_id.is_empty());
    assert!(form.fields().destination.is_empty());
}

#[test]
fn test_add_accepts_custom_id() {
    let mut store = setup_store(1);
    let mut form = FormController::new();

    form.open_add(store.records()).unwrap();
    form.set_tour_id("T050").unwrap();
    fill(&mut form, "Cusco");
    form.submit(&mut store).unwrap();

    assert!(store.contains_id("T050"));
}

#[test]
fn test_add_duplicate_id_rejected() {
    let mut store = setup_store(3);
    let before = store.records().to_vec();
    let mut form = FormController::new();

    form.open_add(store.records()).unwrap();
    form.set_tour_id("T002").unwrap();
    fill(&mut form, "Cusco");
    let result = form.submit(&mut store);

    match result {
        Err(err @ TourError::DuplicateTourId(_)) => {
            assert_eq!(err.to_string(), "Tour ID must be unique!");
        }
        other => panic!("expected DuplicateTourId, got {other:?}"),
    }
    assert_eq!(store.records(), before.as_slice());
    assert!(form.is_open());
    assert_eq!(form.fields().destination, "Cusco");
}

// =============================================================================
// Edit Mode Tests
// =============================================================================

#[test]
fn test_open_edit_prefills_and_locks() {
    let store = setup_store(3);
    let mut form = FormController::new();

    form.open_edit(store.records(), 1).unwrap();

    assert_eq!(form.mode(), Some(FormMode::Edit(1)));
    assert_eq!(form.title(), Some("Edit Tour"));
    assert_eq!(form.fields(), &store.records()[1]);
    assert!(form.tour_id_read_only());
}

#[test]
fn test_edit_refuses_id_change() {
    let store = setup_store(2);
    let mut form = FormController::new();

    form.open_edit(store.records(), 0).unwrap();
    let result = form.set_tour_id("T099");

    assert!(matches!(result, Err(TourError::TourIdLocked(_))));
    assert_eq!(form.fields().tour_id, "T001");
}

#[test]
fn test_edit_submit_replaces_in_place() {
    let mut store = setup_store(3);
    let mut form = FormController::new();

    form.open_edit(store.records(), 1).unwrap();
    form.set_price("4000");
    let submission = form.submit(&mut store).unwrap();

    assert!(matches!(submission, Submission::Updated { position: 1, .. }));
    assert_eq!(store.len(), 3);
    assert_eq!(store.records()[1].tour_id, "T002");
    assert_eq!(store.records()[1].price, "4000");
    assert!(!form.is_open());
}

#[test]
fn test_open_edit_out_of_range() {
    let store = setup_store(2);
    let mut form = FormController::new();

    let result = form.open_edit(store.records(), 5);

    assert!(matches!(result, Err(TourError::IndexOutOfRange { index: 5, len: 2 })));
    assert!(!form.is_open());
}

// =============================================================================
// Cancel / Closed Tests
// =============================================================================

#[test]
fn test_cancel_does_not_persist() {
    let mut store = setup_store(2);
    let mut form = FormController::new();

    form.open_add(store.records()).unwrap();
    fill(&mut form, "Cusco");
    form.cancel();

    assert!(!form.is_open());
    assert!(matches!(form.submit(&mut store), Err(TourError::FormClosed)));
    assert_eq!(store.len(), 2);
}

#[test]
fn test_reopening_add_clears_previous_input() {
    let store = setup_store(1);
    let mut form = FormController::new();

    form.open_edit(store.records(), 0).unwrap();
    form.cancel();
    form.open_add(store.records()).unwrap();

    assert_eq!(form.fields().tour_id, "T002");
    assert!(form.fields().name.is_empty());
}
