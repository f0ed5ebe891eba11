//! Table Renderer
//!
//! Projects one page of matches into display rows plus a pagination bar.
//! Every call builds a fresh `TableView`; nothing is patched in place.

use std::fmt;

use crate::query::{self, Match};
use crate::record::{TourRecord, COLUMN_HEADERS};

/// Action a row exposes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    Edit { tour_id: String, position: usize },
    Delete { tour_id: String, position: usize },
}

/// One rendered table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Position of the record in the unfiltered collection
    pub position: usize,
    pub record: TourRecord,
}

impl TableRow {
    pub fn edit_action(&self) -> RowAction {
        RowAction::Edit {
            tour_id: self.record.tour_id.clone(),
            position: self.position,
        }
    }

    pub fn delete_action(&self) -> RowAction {
        RowAction::Delete {
            tour_id: self.record.tour_id.clone(),
            position: self.position,
        }
    }
}

/// A control in the pagination bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    Prev { disabled: bool },
    Page { number: usize, active: bool },
    Next { disabled: bool },
}

/// Prev, one control per page, Next
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationBar {
    pub current_page: usize,
    pub total_pages: usize,
    pub controls: Vec<PageControl>,
}

impl PaginationBar {
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        let mut controls = Vec::with_capacity(total_pages + 2);
        controls.push(PageControl::Prev {
            disabled: current_page <= 1,
        });
        controls.extend((1..=total_pages).map(|number| PageControl::Page {
            number,
            active: number == current_page,
        }));
        controls.push(PageControl::Next {
            disabled: current_page >= total_pages,
        });

        Self {
            current_page,
            total_pages,
            controls,
        }
    }

    pub fn prev_disabled(&self) -> bool {
        matches!(self.controls.first(), Some(PageControl::Prev { disabled: true }))
    }

    pub fn next_disabled(&self) -> bool {
        matches!(self.controls.last(), Some(PageControl::Next { disabled: true }))
    }
}

/// Everything needed to draw the table once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub rows: Vec<TableRow>,
    pub pagination: PaginationBar,
    /// Records that passed the filter, across all pages
    pub match_count: usize,
}

impl TableView {
    /// Render `page` of the records matching `search`
    pub fn render(tours: &[TourRecord], search: &str, page: usize, rows_per_page: usize) -> Self {
        let matches = query::filter(tours, search);
        let total_pages = query::page_count(matches.len(), rows_per_page);

        let rows = query::paginate(&matches, page, rows_per_page)
            .iter()
            .map(|&Match { position, record }| TableRow {
                position,
                record: record.clone(),
            })
            .collect();

        Self {
            rows,
            pagination: PaginationBar::new(page, total_pages),
            match_count: matches.len(),
        }
    }

    /// Row whose record carries `tour_id`
    pub fn row_for(&self, tour_id: &str) -> Option<&TableRow> {
        self.rows.iter().find(|row| row.record.tour_id == tour_id)
    }
}

impl fmt::Display for PageControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageControl::Prev { disabled: true } => write!(f, "(Prev)"),
            PageControl::Prev { disabled: false } => write!(f, "[Prev]"),
            PageControl::Page { number, active: true } => write!(f, "<{number}>"),
            PageControl::Page { number, active: false } => write!(f, "[{number}]"),
            PageControl::Next { disabled: true } => write!(f, "(Next)"),
            PageControl::Next { disabled: false } => write!(f, "[Next]"),
        }
    }
}

impl fmt::Display for PaginationBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.controls.iter().map(ToString::to_string).collect();
        write!(f, "{}", parts.join(" "))
    }
}

impl fmt::Display for TableView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut widths = COLUMN_HEADERS.map(|h| h.chars().count());
        for row in &self.rows {
            for (width, field) in widths.iter_mut().zip(row.record.fields()) {
                *width = (*width).max(field.chars().count());
            }
        }

        let line = |cells: [&str; 7]| -> String {
            cells
                .iter()
                .zip(widths)
                .map(|(cell, width)| format!("{cell:<width$}"))
                .collect::<Vec<_>>()
                .join(" | ")
        };

        writeln!(f, "{}", line(COLUMN_HEADERS))?;
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        writeln!(f, "{}", rule.join("-+-"))?;

        if self.rows.is_empty() {
            writeln!(f, "(no tours)")?;
        }
        for row in &self.rows {
            writeln!(f, "{}", line(row.record.fields()))?;
        }

        write!(f, "{}", self.pagination)
    }
}
