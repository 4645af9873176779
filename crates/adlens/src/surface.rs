//! The table surface: interaction state plus render instructions.
//!
//! [`TableSurface`] owns the raw rows and the three pieces of interaction
//! state (filter text, sort spec, selection) and turns every state change
//! into a fresh [`TableView`] - the render instructions a frontend needs:
//! header cells with their sort affordances, formatted body rows keyed by
//! creative id, and status messages for everything that degraded along the
//! way.
//!
//! Rendering is a full synchronous recomputation of the engine pipeline;
//! nothing is cached between calls and the rows are never mutated.

use std::collections::BTreeMap;

use serde::Serialize;

use adlens_engine::{columns, parse_tags, AdRecord, Dir, Selection, SortSpec, ViewState};

use crate::detail::{DetailView, PreviewView};
use crate::message::Message;

/// One header cell: the column, its title, and the active sort affordance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderCell {
    /// Column key (stable identifier for sort toggling).
    pub key: &'static str,
    /// Header title.
    pub title: &'static str,
    /// Whether clicking this header toggles sorting.
    pub sortable: bool,
    /// Direction marker to show, when this column is the sorted one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Dir>,
}

/// One body row, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRow {
    /// Row identity; clicking the row feeds this back to
    /// [`TableSurface::row_clicked`].
    pub creative_id: String,
    /// Formatted cells, one per column, in column order. Cells whose
    /// formatter failed carry the raw value instead.
    pub cells: Vec<String>,
}

/// Render instructions for one table state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    /// Header cells in column order.
    pub header: Vec<HeaderCell>,
    /// Filtered, sorted, formatted body rows.
    pub rows: Vec<RenderedRow>,
    /// Status feedback: skipped source rows, raw-value fallbacks, bare tag
    /// segments, empty states.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<Message>,
    /// Unfiltered row count, for "showing X of Y".
    pub total_count: usize,
    /// The live filter text (the search box echo).
    pub filter: String,
}

/// The table surface: rows + view state + selection.
#[derive(Debug, Clone)]
pub struct TableSurface {
    rows: Vec<AdRecord>,
    view: ViewState,
    selection: Selection<String>,
    skipped: usize,
}

impl TableSurface {
    /// Creates a surface over the given rows with a fresh view state.
    pub fn new(rows: Vec<AdRecord>) -> Self {
        Self::with_skipped(rows, 0)
    }

    /// Like [`TableSurface::new`], also recording how many source rows were
    /// skipped during loading so the view can surface a warning.
    pub fn with_skipped(rows: Vec<AdRecord>, skipped: usize) -> Self {
        TableSurface {
            rows,
            view: ViewState::new(),
            selection: Selection::Closed,
            skipped,
        }
    }

    /// The raw rows, untouched by any interaction.
    pub fn rows(&self) -> &[AdRecord] {
        &self.rows
    }

    /// The current view state (filter + sort).
    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    /// The current selection state.
    pub fn selection(&self) -> &Selection<String> {
        &self.selection
    }

    // ------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------

    /// Replaces the global filter text.
    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.view.set_filter(text);
    }

    /// Advances the tri-state sort cycle for a column key.
    pub fn toggle_sort(&mut self, key: &str) {
        self.view.toggle_sort(key);
    }

    /// Sets the sort directly (the non-interactive path).
    pub fn set_sort(&mut self, spec: SortSpec) {
        self.view.sort = Some(spec);
    }

    /// A row was clicked: preview it.
    ///
    /// The id is taken at face value; clicking an id that no longer exists
    /// (or is duplicated) degrades to an empty preview, never a failure.
    pub fn row_clicked(&mut self, creative_id: &str) {
        self.selection = std::mem::take(&mut self.selection).row_clicked(creative_id.to_string());
    }

    /// The preview panel was dismissed.
    pub fn close_preview(&mut self) {
        self.selection = std::mem::take(&mut self.selection).close_preview();
    }

    /// The preview was expanded into the detail modal.
    pub fn expand(&mut self) {
        self.selection = std::mem::take(&mut self.selection).expand();
    }

    /// The detail modal was dismissed; the selection clears entirely.
    pub fn close_modal(&mut self) {
        self.selection = std::mem::take(&mut self.selection).close_modal();
    }

    // ------------------------------------------------------------------
    // Render output
    // ------------------------------------------------------------------

    /// The preview panel content, when a row is previewed.
    pub fn preview(&self) -> Option<PreviewView> {
        if self.selection.is_previewing() {
            self.selected_record().map(PreviewView::of)
        } else {
            None
        }
    }

    /// The detail modal content, when a row is expanded.
    pub fn detail(&self) -> Option<DetailView> {
        if self.selection.is_expanded() {
            self.selected_record().map(DetailView::of)
        } else {
            None
        }
    }

    /// Runs the pipeline and binds the output to the column model.
    pub fn render(&self) -> TableView {
        let view_rows = self.view.compute(&self.rows);

        let header: Vec<HeaderCell> = columns()
            .iter()
            .map(|col| HeaderCell {
                key: col.key,
                title: col.header,
                sortable: col.sortable,
                sort: self.view.sort.filter(|s| s.key == col.key).map(|s| s.dir),
            })
            .collect();

        let mut fallback_cells: BTreeMap<&'static str, usize> = BTreeMap::new();
        let mut bare_tag_rows = 0usize;

        let rows: Vec<RenderedRow> = view_rows
            .iter()
            .map(|record| {
                let cells = columns()
                    .iter()
                    .map(|col| match col.format(record) {
                        Ok(cell) => cell,
                        Err(err) => {
                            *fallback_cells.entry(err.column).or_insert(0) += 1;
                            err.raw
                        }
                    })
                    .collect();
                if parse_tags(&record.tags).bare_segments() > 0 {
                    bare_tag_rows += 1;
                }
                RenderedRow {
                    creative_id: record.creative_id.clone(),
                    cells,
                }
            })
            .collect();

        let mut messages = Vec::new();
        if self.skipped > 0 {
            messages.push(Message::warning(format!(
                "{} malformed source row(s) were skipped",
                self.skipped
            )));
        }
        for (column, count) in &fallback_cells {
            messages.push(Message::warning(format!(
                "column '{}' shows raw values for {} cell(s)",
                column, count
            )));
        }
        if bare_tag_rows > 0 {
            messages.push(Message::warning(format!(
                "{} row(s) have tag segments without a value",
                bare_tag_rows
            )));
        }
        if self.rows.is_empty() {
            messages.push(Message::info("no records loaded"));
        } else if rows.is_empty() {
            messages.push(Message::info("no rows match the filter"));
        }

        TableView {
            header,
            rows,
            messages,
            total_count: self.rows.len(),
            filter: self.view.filter.clone(),
        }
    }

    /// Resolves the selected creative id to its record; with duplicate ids
    /// the first match wins.
    fn selected_record(&self) -> Option<&AdRecord> {
        let id = self.selection.selected()?;
        self.rows.iter().find(|r| &r.creative_id == id)
    }
}
