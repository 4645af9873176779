//! Adlens engine - tabular data engine for ad-creative performance reports.
//!
//! The engine owns the logic of a sortable, filterable performance table:
//!
//! - A typed row model ([`AdRecord`]) and the raw cell values extracted from
//!   it ([`CellValue`])
//! - A tag parser that turns the semi-structured `tags` field into ordered
//!   category groups ([`parse_tags`], [`summarize_tags`])
//! - A static column model with accessors and presentation formatters
//!   ([`columns`], [`Column`])
//! - The view pipeline: filter text + sort spec in, ordered row references
//!   out ([`compute_view`], [`ViewState`])
//! - The preview/drill-down state machine ([`Selection`])
//!
//! The engine performs no I/O and knows nothing about terminals or widgets.
//! Callers own the row collection; every pipeline output borrows from it.
//!
//! # Quick Start
//!
//! ```rust
//! use adlens_engine::{compute_view, AdRecord, Dir, SortSpec, ViewState};
//!
//! let rows = vec![AdRecord {
//!     creative_id: "cr-1".into(),
//!     creative_name: "Summer Sale".into(),
//!     tags: "platform:ios;channel:search".into(),
//!     country: "US".into(),
//!     ad_network: "meta".into(),
//!     os: "ios".into(),
//!     campaign: "summer-2025".into(),
//!     ipm: 4.2,
//!     ctr: 0.05,
//!     spend: 12.5,
//!     impressions: 1000,
//!     clicks: 50,
//! }];
//!
//! // The filter matches what the table shows, not the raw fields:
//! // the CTR cell renders as "5.00%".
//! let view = compute_view(&rows, "5.00%", None);
//! assert_eq!(view.len(), 1);
//!
//! // Sort state cycles per column: ascending, descending, cleared.
//! let mut state = ViewState::new();
//! state.toggle_sort("spend");
//! assert_eq!(state.sort, Some(SortSpec { key: "spend", dir: Dir::Asc }));
//! ```
//!
//! # Pipeline Semantics
//!
//! ```text
//! view = sort(filter(rows, filter_text), sort_spec)
//! ```
//!
//! - **Filter**: case-insensitive substring match against the *displayed*
//!   (formatted) value of every column; a row is retained if any column
//!   matches. An empty filter retains everything.
//! - **Sort**: stable sort on the selected column's *raw* accessor value;
//!   strings compare lexicographically, numbers numerically. No sort spec
//!   leaves the filtered order untouched.
//!
//! Both stages are deterministic, side-effect-free, and recomputed in full
//! on every call; nothing is cached across invocations.

mod columns;
mod error;
mod record;
mod selection;
mod tags;
mod value;
mod view;

// Re-export public API
pub use columns::{column, columns, Column};
pub use error::{EngineError, FormatError, Result};
pub use record::AdRecord;
pub use selection::{Selection, SelectionEvent};
pub use tags::{parse_tags, summarize_tags, TagGroup, TagGroups};
pub use value::CellValue;
pub use view::{compute_view, Dir, SortSpec, ViewState};
