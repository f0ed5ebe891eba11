//! Tests for the status notifier

use std::time::{Duration, Instant};

use tourdesk::notifier::{Notifier, DELETE_COLOR, SUCCESS_COLOR};

const DELAY: Duration = Duration::from_millis(2500);

#[test]
fn test_nothing_visible_initially() {
    let notifier = Notifier::new(DELAY);

    assert!(notifier.visible().is_none());
    assert!(notifier.last().is_none());
}

#[test]
fn test_message_visible_until_deadline() {
    let mut notifier = Notifier::new(DELAY);
    let t0 = Instant::now();

    notifier.show_at("saved", SUCCESS_COLOR, t0);

    let toast = notifier.visible_at(t0 + Duration::from_millis(2499)).unwrap();
    assert_eq!(toast.message, "saved");
    assert_eq!(toast.color, SUCCESS_COLOR);
    assert!(notifier.visible_at(t0 + DELAY).is_none());
    assert!(notifier.last().is_some());
}

#[test]
fn test_new_message_replaces_old() {
    let mut notifier = Notifier::new(DELAY);
    let t0 = Instant::now();

    notifier.show_at("first", SUCCESS_COLOR, t0);
    notifier.show_at("second", DELETE_COLOR, t0 + Duration::from_millis(2000));

    // The first message's deadline has passed; the second is still up.
    let toast = notifier.visible_at(t0 + Duration::from_millis(3000)).unwrap();
    assert_eq!(toast.message, "second");
    assert_eq!(toast.color, DELETE_COLOR);
    assert!(notifier.visible_at(t0 + Duration::from_millis(4500)).is_none());
}

#[test]
fn test_success_uses_default_color() {
    let mut notifier = Notifier::new(DELAY);

    let toast = notifier.success("ok");

    assert_eq!(toast.color, "#4CAF50");
    assert_eq!(toast.hide_at - toast.shown_at, DELAY);
}
