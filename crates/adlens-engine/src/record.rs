//! The ad-creative performance record.

use serde::{Deserialize, Serialize};

/// One row of an ad-creative performance report.
///
/// Records are supplied by an external row source (typically a CSV loader)
/// and treated as read-only by the engine: the pipeline borrows rows, the
/// selection machinery holds identifiers, and nothing here mutates a field.
///
/// `creative_id` is the row identity within one loaded dataset. Uniqueness
/// is a convention of the report, not enforced; duplicate ids degrade
/// selection-by-id (the first match wins) but never crash anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdRecord {
    pub creative_id: String,
    pub creative_name: String,
    /// Raw tag string, `"category:value;category:value;..."`. May be empty.
    /// Parsed on demand by [`parse_tags`](crate::parse_tags); never cached.
    pub tags: String,
    pub country: String,
    pub ad_network: String,
    pub os: String,
    pub campaign: String,
    /// Installs per mille impressions.
    pub ipm: f64,
    /// Click-through rate, stored as a fraction in `0..=1`.
    pub ctr: f64,
    /// Spend in report currency. Non-negative by convention (not enforced).
    pub spend: f64,
    pub impressions: u64,
    pub clicks: u64,
}
