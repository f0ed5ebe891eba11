//! # TourDesk
//!
//! A small tour catalogue manager with:
//! - Whole-collection JSON persistence in a key-value storage
//! - Case-insensitive search across every field
//! - Fixed-size pagination
//! - A shared add/edit form with identifier uniqueness checks
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          App                                 │
//! │        (search, current page, form, notifier, confirm)       │
//! └──────┬──────────────────────┬─────────────────────┬─────────┘
//!        │                      │                     │
//!        ▼                      ▼                     ▼
//!  ┌───────────┐        ┌──────────────┐       ┌────────────┐
//!  │   Form    │───────▶│  TourStore   │◀──────│   Table    │
//!  │ Add/Edit  │ mutate │ (owns Vec)   │ read  │  (query)   │
//!  └───────────┘        └──────┬───────┘       └────────────┘
//!                              │ whole collection, every mutation
//!                              ▼
//!                      ┌───────────────┐
//!                      │ KeyValueStorage│
//!                      │ (file / memory)│
//!                      └───────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod storage;
pub mod store;
pub mod id;
pub mod query;
pub mod table;
pub mod form;
pub mod notifier;
pub mod app;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{TourError, Result};
pub use config::Config;
pub use record::TourRecord;
pub use store::TourStore;
pub use app::App;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of TourDesk
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
