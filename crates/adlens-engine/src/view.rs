//! The view pipeline: filter, then sort.
//!
//! [`compute_view`] is the whole derived-view computation: given the raw
//! rows, a global filter string and an optional sort spec, it returns the
//! ordered row references the surface should render. It is deterministic,
//! side-effect-free, and recomputed in full on every state change; the rows
//! themselves are never touched.
//!
//! [`ViewState`] holds the two pieces of interaction state (filter text and
//! sort spec) and implements the sort-toggle policy: a tri-state cycle per
//! column, ascending on first toggle, descending on the second, cleared on
//! the third. Toggling a different column restarts the cycle at ascending.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::columns::{column, columns};
use crate::error::EngineError;
use crate::record::AdRecord;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Applies this direction to an ordering: `Asc` leaves it unchanged,
    /// `Desc` reverses it.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// The display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A sort specification: which column, which direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    /// Key of the column to sort by (one of the static column keys).
    pub key: &'static str,
    /// The sort direction.
    pub dir: Dir,
}

impl SortSpec {
    /// Builds a validated sort spec from a caller-supplied key.
    ///
    /// Returns [`EngineError::UnknownColumn`] for keys that name no column
    /// and [`EngineError::NotSortable`] for columns excluded from sorting.
    pub fn new(key: &str, dir: Dir) -> Result<SortSpec, EngineError> {
        let col = column(key).ok_or_else(|| EngineError::UnknownColumn(key.to_string()))?;
        if !col.sortable {
            return Err(EngineError::NotSortable(col.key));
        }
        Ok(SortSpec { key: col.key, dir })
    }
}

/// Interaction state of one rendered table: global filter text plus the
/// optional sort spec.
///
/// Created empty when the table mounts, mutated by user events, discarded
/// when it unmounts. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Case-insensitive substring matched against every formatted cell.
    pub filter: String,
    /// Active sort, if any.
    pub sort: Option<SortSpec>,
}

impl ViewState {
    /// A fresh view state: empty filter, no sort.
    pub fn new() -> Self {
        ViewState::default()
    }

    /// Replaces the filter text.
    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter = text.into();
    }

    /// Advances the sort cycle for `key`.
    ///
    /// Unsorted (or sorted by another column) goes to ascending; ascending
    /// goes to descending; descending clears the sort. Unknown or
    /// unsortable keys are ignored.
    pub fn toggle_sort(&mut self, key: &str) {
        let Some(col) = column(key) else {
            return;
        };
        if !col.sortable {
            return;
        }
        self.sort = match self.sort.take() {
            Some(SortSpec { key, dir: Dir::Asc }) if key == col.key => Some(SortSpec {
                key: col.key,
                dir: Dir::Desc,
            }),
            Some(SortSpec {
                key,
                dir: Dir::Desc,
            }) if key == col.key => None,
            _ => Some(SortSpec {
                key: col.key,
                dir: Dir::Asc,
            }),
        };
    }

    /// Runs the pipeline with this state's filter and sort.
    pub fn compute<'a>(&self, rows: &'a [AdRecord]) -> Vec<&'a AdRecord> {
        compute_view(rows, &self.filter, self.sort.as_ref())
    }
}

/// Computes the render-ready row set: filter stage, then sort stage.
///
/// The filter is a case-insensitive substring match against the *displayed*
/// value of every column (so searching `"5.00%"` hits a CTR cell while the
/// raw `0.05` does not); a row is retained if any column matches, and an
/// empty filter retains all rows. The sort is stable and compares the
/// selected column's *raw* accessor values; pairs that cannot be compared
/// (NaN) count as equal, preserving their filtered order. Without a sort
/// spec the filtered order is the original row order.
pub fn compute_view<'a>(
    rows: &'a [AdRecord],
    filter: &str,
    sort: Option<&SortSpec>,
) -> Vec<&'a AdRecord> {
    let mut view: Vec<&'a AdRecord> = if filter.is_empty() {
        rows.iter().collect()
    } else {
        let needle = filter.to_lowercase();
        rows.iter().filter(|r| row_matches(r, &needle)).collect()
    };

    if let Some(spec) = sort {
        if let Some(col) = column(spec.key) {
            view.sort_by(|a, b| {
                col.value(a)
                    .compare(&col.value(b))
                    .map(|ordering| spec.dir.apply(ordering))
                    .unwrap_or(Ordering::Equal)
            });
        }
    }

    view
}

/// `needle` must already be lowercased.
fn row_matches(record: &AdRecord, needle: &str) -> bool {
    columns()
        .iter()
        .any(|col| col.display(record).to_lowercase().contains(needle))
}
