//! Notifier
//!
//! A single status message that hides itself after a fixed delay.
//!
//! Visibility is decided against a supplied `Instant` instead of a timer,
//! so a newer message simply carries a newer deadline and an older one can
//! never hide it early.

use std::time::{Duration, Instant};

/// Background colour for success messages
pub const SUCCESS_COLOR: &str = "#4CAF50";

/// Background colour for delete messages
pub const DELETE_COLOR: &str = "#FF7043";

pub const TOUR_ADDED: &str = "✅ Tour added!";
pub const TOUR_UPDATED: &str = "✏️ Tour updated!";
pub const TOUR_DELETED: &str = "🗑️ Tour deleted!";

/// A message currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub color: String,
    pub shown_at: Instant,
    pub hide_at: Instant,
}

/// Shows one toast at a time
#[derive(Debug)]
pub struct Notifier {
    duration: Duration,
    current: Option<Toast>,
}

impl Notifier {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            current: None,
        }
    }

    /// Show `message` now in the success colour
    pub fn success(&mut self, message: &str) -> &Toast {
        self.show(message, SUCCESS_COLOR)
    }

    /// Show `message` now, replacing whatever is visible
    pub fn show(&mut self, message: &str, color: &str) -> &Toast {
        self.show_at(message, color, Instant::now())
    }

    /// Show `message` as of `now`
    pub fn show_at(&mut self, message: &str, color: &str, now: Instant) -> &Toast {
        tracing::info!(%message, %color, "notify");
        self.current.insert(Toast {
            message: message.to_string(),
            color: color.to_string(),
            shown_at: now,
            hide_at: now + self.duration,
        })
    }

    /// The toast visible at `now`, if it has not expired
    pub fn visible_at(&self, now: Instant) -> Option<&Toast> {
        self.current.as_ref().filter(|toast| now < toast.hide_at)
    }

    pub fn visible(&self) -> Option<&Toast> {
        self.visible_at(Instant::now())
    }

    /// Most recent toast, expired or not
    pub fn last(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}
