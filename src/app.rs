//! App Module
//!
//! The session controller that coordinates all components.
//!
//! ## Responsibilities
//! - Own the store, search query, current page, form and notifier
//! - Route user actions to store mutations
//! - Re-render the table after every change
//! - Ask for confirmation before deleting

use std::path::Path;

use crate::config::Config;
use crate::error::{Result, TourError};
use crate::form::{FormController, Submission};
use crate::notifier::{self, Notifier};
use crate::query;
use crate::record::TourRecord;
use crate::storage::{FileStorage, KeyValueStorage};
use crate::store::TourStore;
use crate::table::{RowAction, TableView};

/// Prompt shown before a delete
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this tour?";

/// Yes/no confirmation from the user
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// One interactive session over a tour collection
pub struct App<S: KeyValueStorage> {
    /// App configuration
    config: Config,

    /// Exclusive owner of the collection
    store: TourStore<S>,

    /// Current search text (as typed)
    search: String,

    /// 1-based page being shown
    current_page: usize,

    /// The add/edit modal
    form: FormController,

    /// Status messages
    notifier: Notifier,

    /// Result of the last render
    view: TableView,
}

impl App<FileStorage> {
    /// Open an app over file storage in `config.data_dir`
    pub fn open(config: Config) -> Result<Self> {
        let storage = FileStorage::open(&config.data_dir)?;
        Self::with_storage(config, storage)
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified data directory
    pub fn open_path(path: &Path) -> Result<Self> {
        Self::open(Config::builder().data_dir(path).build())
    }
}

impl<S: KeyValueStorage> App<S> {
    /// Open an app over any storage backend
    pub fn with_storage(config: Config, storage: S) -> Result<Self> {
        config.validate()?;

        let store = TourStore::open(storage, config.storage_key.clone())?;
        let notifier = Notifier::new(config.toast_duration());
        let view = TableView::render(store.records(), "", 1, config.rows_per_page);

        Ok(Self {
            config,
            store,
            search: String::new(),
            current_page: 1,
            form: FormController::new(),
            notifier,
            view,
        })
    }

    /// Rebuild the table view from scratch
    pub fn render(&mut self) -> &TableView {
        self.view = TableView::render(
            self.store.records(),
            &self.search,
            self.current_page,
            self.config.rows_per_page,
        );
        &self.view
    }

    // =========================================================================
    // Search & Pagination
    // =========================================================================

    /// Change the search text; always returns to page 1
    pub fn search(&mut self, query: impl Into<String>) -> &TableView {
        self.search = query.into();
        self.current_page = 1;
        self.render()
    }

    /// Jump to `page`, clamped to the pages that exist
    pub fn go_to_page(&mut self, page: usize) -> &TableView {
        self.current_page = page.clamp(1, self.total_pages().max(1));
        self.render()
    }

    pub fn prev_page(&mut self) -> &TableView {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
        self.render()
    }

    pub fn next_page(&mut self) -> &TableView {
        if self.current_page < self.total_pages() {
            self.current_page += 1;
        }
        self.render()
    }

    /// Pages available for the current search
    pub fn total_pages(&self) -> usize {
        let matches = query::filter(self.store.records(), &self.search).len();
        query::page_count(matches, self.config.rows_per_page)
    }

    // =========================================================================
    // Form
    // =========================================================================

    /// Open the form in add mode with the next free id
    pub fn open_add(&mut self) -> Result<&mut FormController> {
        self.form.open_add(self.store.records())?;
        Ok(&mut self.form)
    }

    /// Open the form in edit mode for `tour_id`
    pub fn open_edit(&mut self, tour_id: &str) -> Result<&mut FormController> {
        let position = self.position_of(tour_id)?;
        self.open_edit_at(position, tour_id)
    }

    /// Open the form in edit mode for the row at `position`
    ///
    /// Fails with `TourNotFound` if that row no longer holds `tour_id`.
    pub fn open_edit_at(&mut self, position: usize, tour_id: &str) -> Result<&mut FormController> {
        let position = self.checked_position(position, tour_id)?;
        self.form.open_edit(self.store.records(), position)?;
        Ok(&mut self.form)
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormController {
        &mut self.form
    }

    /// Submit the open form, then re-render and notify
    pub fn submit(&mut self) -> Result<Submission> {
        let submission = self.form.submit(&mut self.store)?;

        self.settle_page();
        self.render();
        match &submission {
            Submission::Added(_) => self.notifier.success(notifier::TOUR_ADDED),
            Submission::Updated { .. } => self.notifier.success(notifier::TOUR_UPDATED),
        };

        Ok(submission)
    }

    /// Dismiss the form without saving
    pub fn cancel(&mut self) {
        self.form.cancel();
    }

    // =========================================================================
    // Delete
    // =========================================================================

    /// Delete `tour_id` if the user confirms
    ///
    /// Returns the removed record, or `None` when the user declined.
    pub fn delete(&mut self, tour_id: &str, confirm: &mut impl Confirm) -> Result<Option<TourRecord>> {
        let position = self.position_of(tour_id)?;
        self.delete_at(position, tour_id, confirm)
    }

    /// Delete the row at `position` if the user confirms
    ///
    /// Fails with `TourNotFound` if that row no longer holds `tour_id`.
    pub fn delete_at(
        &mut self,
        position: usize,
        tour_id: &str,
        confirm: &mut impl Confirm,
    ) -> Result<Option<TourRecord>> {
        let position = self.checked_position(position, tour_id)?;

        if !confirm.confirm(DELETE_PROMPT) {
            tracing::debug!(%tour_id, "delete cancelled");
            return Ok(None);
        }

        let removed = self.store.remove_at(position)?;

        self.settle_page();
        self.render();
        self.notifier.show(notifier::TOUR_DELETED, notifier::DELETE_COLOR);

        Ok(Some(removed))
    }

    /// Run an edit or delete action from a table row
    ///
    /// Edit opens the form; delete asks `confirm` first.
    pub fn apply_row_action(&mut self, action: &RowAction, confirm: &mut impl Confirm) -> Result<()> {
        match action {
            RowAction::Edit { tour_id, position } => {
                self.open_edit_at(*position, tour_id)?;
            }
            RowAction::Delete { tour_id, position } => {
                self.delete_at(*position, tour_id, confirm)?;
            }
        }
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn store(&self) -> &TourStore<S> {
        &self.store
    }

    pub fn view(&self) -> &TableView {
        &self.view
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn search_query(&self) -> &str {
        &self.search
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn position_of(&self, tour_id: &str) -> Result<usize> {
        self.store
            .position_of(tour_id)
            .ok_or_else(|| TourError::TourNotFound(tour_id.to_string()))
    }

    /// `position` if the record there still carries `tour_id`
    fn checked_position(&self, position: usize, tour_id: &str) -> Result<usize> {
        match self.store.get(position) {
            Some(record) if record.tour_id == tour_id => Ok(position),
            _ => Err(TourError::TourNotFound(tour_id.to_string())),
        }
    }

    /// Pull the current page back if a delete emptied it
    fn settle_page(&mut self) {
        let total = self.total_pages();
        if self.current_page > total {
            self.current_page = total.max(1);
        }
    }
}
