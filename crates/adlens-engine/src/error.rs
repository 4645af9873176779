//! Error types for the engine.
//!
//! Nothing in the engine is fatal: formatter failures degrade to the raw
//! value for the affected cell, tag anomalies degrade to empty values, and
//! the view pipeline never fails as a whole because one row is malformed.

use thiserror::Error;

/// A presentation formatter refused a value.
///
/// Non-fatal and contained to one cell: `raw` carries the unformatted value
/// the surface should fall back to. With a typed record the reachable case
/// is a non-finite float (NaN or infinity) that survived row-source
/// coercion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("column '{column}' cannot format value '{raw}'")]
pub struct FormatError {
    /// Key of the column whose formatter failed.
    pub column: &'static str,
    /// The unformatted value, used as the display fallback.
    pub raw: String,
}

/// Errors surfaced by the engine's public API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A cell could not be formatted for display.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// A column key did not name any column.
    #[error("unknown column key '{0}'")]
    UnknownColumn(String),

    /// The named column exists but does not participate in sorting.
    #[error("column '{0}' is not sortable")]
    NotSortable(&'static str),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
