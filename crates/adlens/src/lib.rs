//! # Adlens - terminal viewer for ad-creative performance reports
//!
//! Adlens binds the [`adlens_engine`] tabular data engine to the outside
//! world: a CSV row source, a table surface that turns pipeline output into
//! render instructions, preview/detail views for drilling into a row's
//! tags, and a plain-text renderer for terminals.
//!
//! The split of responsibilities:
//!
//! - [`source`]: parses a report CSV into [`AdRecord`]s, with an explicit
//!   coercion step for numeric fields and silent skipping (but counting)
//!   of structurally malformed rows.
//! - [`surface`]: owns the rows plus the interaction state (filter, sort,
//!   selection) and produces a [`TableView`] of header cells, formatted
//!   body rows, and status messages.
//! - [`detail`]: the preview panel and "Ad Details" modal content, with
//!   tags grouped by category.
//! - [`render`]: text rendering with unicode-aware column widths and
//!   optional terminal styling.
//!
//! # Example
//!
//! ```rust
//! use adlens::surface::TableSurface;
//! use adlens::AdRecord;
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
//! let mut surface = TableSurface::new(rows);
//! surface.set_filter("5.00%");
//! surface.toggle_sort("spend");
//!
//! let view = surface.render();
//! assert_eq!(view.rows.len(), 1);
//! assert_eq!(view.rows[0].creative_id, "cr-1");
//! ```

pub mod detail;
pub mod message;
pub mod render;
pub mod source;
pub mod surface;

// The engine is the public vocabulary of this crate; re-export it whole.
pub use adlens_engine::{
    column, columns, compute_view, parse_tags, summarize_tags, AdRecord, CellValue, Column, Dir,
    EngineError, FormatError, Selection, SelectionEvent, SortSpec, TagGroup, TagGroups, ViewState,
};

pub use detail::{DetailField, DetailView, PreviewView};
pub use message::{Message, MessageLevel};
pub use render::{render_detail, render_preview, render_table, OutputMode};
pub use source::{load_records, read_records, LoadedRecords, SourceError};
pub use surface::{HeaderCell, RenderedRow, TableSurface, TableView};
