//! Form Controller
//!
//! A single modal form shared between adding and editing tours.
//!
//! ```text
//!            open_add()                 open_edit(pos)
//!   Closed ─────────────▶ Add    Closed ───────────────▶ Edit(pos)
//!     ▲                    │       ▲                        │
//!     └── submit ok/cancel ┘       └──── submit / cancel ───┘
//! ```
//!
//! A rejected add submission (duplicate id) leaves the form open with the
//! user's input intact.

use crate::error::{Result, TourError};
use crate::id;
use crate::record::TourRecord;
use crate::storage::KeyValueStorage;
use crate::store::TourStore;

/// Which flow the open form belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Creating a new tour; the id field is editable
    Add,

    /// Editing the tour at this position; the id field is locked
    Edit(usize),
}

impl FormMode {
    pub fn title(&self) -> &'static str {
        match self {
            FormMode::Add => "Add New Tour",
            FormMode::Edit(_) => "Edit Tour",
        }
    }
}

/// What a successful submission did to the collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Added(TourRecord),
    Updated { position: usize, record: TourRecord },
}

/// The modal form and its field values
#[derive(Debug, Default)]
pub struct FormController {
    /// `None` while the modal is hidden
    mode: Option<FormMode>,

    /// Current field values
    fields: TourRecord,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a cleared form with a freshly generated id
    pub fn open_add(&mut self, tours: &[TourRecord]) -> Result<()> {
        let tour_id = id::next_id(tours)?;
        self.fields = TourRecord {
            tour_id,
            ..TourRecord::default()
        };
        self.mode = Some(FormMode::Add);
        Ok(())
    }

    /// Open the form pre-filled from the tour at `position`
    pub fn open_edit(&mut self, tours: &[TourRecord], position: usize) -> Result<()> {
        let record = tours.get(position).ok_or(TourError::IndexOutOfRange {
            index: position,
            len: tours.len(),
        })?;
        self.fields = record.clone();
        self.mode = Some(FormMode::Edit(position));
        Ok(())
    }

    /// Hide the form without saving anything
    pub fn cancel(&mut self) {
        self.mode = None;
    }

    /// Save the form into `store`
    ///
    /// Add mode rejects an id already in the collection and keeps the form
    /// open. Edit mode replaces the record at its position without the
    /// uniqueness check. On success the form closes and its fields clear.
    pub fn submit<S: KeyValueStorage>(&mut self, store: &mut TourStore<S>) -> Result<Submission> {
        let mode = self.mode.ok_or(TourError::FormClosed)?;
        let record = self.fields.clone();

        let submission = match mode {
            FormMode::Add => {
                if store.contains_id(&record.tour_id) {
                    tracing::warn!(tour_id = %record.tour_id, "rejected duplicate tour id");
                    return Err(TourError::DuplicateTourId(record.tour_id));
                }
                store.add(record.clone())?;
                Submission::Added(record)
            }
            FormMode::Edit(position) => {
                store.replace_at(position, record.clone())?;
                Submission::Updated { position, record }
            }
        };

        self.mode = None;
        self.fields = TourRecord::default();
        Ok(submission)
    }

    // =========================================================================
    // Field access
    // =========================================================================

    /// Set the id field; refused while editing
    pub fn set_tour_id(&mut self, tour_id: impl Into<String>) -> Result<()> {
        if let Some(FormMode::Edit(_)) = self.mode {
            return Err(TourError::TourIdLocked(self.fields.tour_id.clone()));
        }
        self.fields.tour_id = tour_id.into();
        Ok(())
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.fields.name = value.into();
    }

    pub fn set_destination(&mut self, value: impl Into<String>) {
        self.fields.destination = value.into();
    }

    pub fn set_start_date(&mut self, value: impl Into<String>) {
        self.fields.start_date = value.into();
    }

    pub fn set_end_date(&mut self, value: impl Into<String>) {
        self.fields.end_date = value.into();
    }

    pub fn set_price(&mut self, value: impl Into<String>) {
        self.fields.price = value.into();
    }

    pub fn set_tour_guide(&mut self, value: impl Into<String>) {
        self.fields.tour_guide = value.into();
    }

    pub fn fields(&self) -> &TourRecord {
        &self.fields
    }

    pub fn mode(&self) -> Option<FormMode> {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode.is_some()
    }

    /// Whether the id field currently accepts input
    pub fn tour_id_read_only(&self) -> bool {
        matches!(self.mode, Some(FormMode::Edit(_)))
    }

    pub fn title(&self) -> Option<&'static str> {
        self.mode.as_ref().map(FormMode::title)
    }
}
