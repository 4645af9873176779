//! The CSV row source.
//!
//! A report is a headered CSV whose first line names the record fields.
//! Numeric fields arrive as text and may be spelled as floats (PapaParse
//! style exports write `"1000.0"` for an integer count), so loading is an
//! explicit two-step: deserialize every field as a string, then coerce.
//!
//! Coercion policy: a numeric-looking value converts; anything else
//! (blank, garbage) coerces to zero, keeping an otherwise good record.
//! Rows that are structurally broken - wrong field count, missing columns,
//! invalid encoding - are skipped silently and counted on the result so
//! the surface can show a warning. A file with headers only (or nothing at
//! all) yields zero records, which is a valid dataset, not an error.

use std::fs::File;
use std::io;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use adlens_engine::AdRecord;

/// Errors opening or reading a report.
///
/// Per-record problems never surface here; they are skipped and counted on
/// [`LoadedRecords`].
#[derive(Debug, Error)]
pub enum SourceError {
    /// The report file could not be opened.
    #[error("cannot open report '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The reader failed before any record could be read (for example an
    /// unreadable header line).
    #[error("cannot read report: {0}")]
    Csv(#[from] csv::Error),
}

/// The outcome of loading a report: the records that parsed, and how many
/// rows were dropped.
#[derive(Debug, Clone, Default)]
pub struct LoadedRecords {
    pub records: Vec<AdRecord>,
    /// Structurally malformed rows skipped during the read.
    pub skipped: usize,
}

/// A report row as it appears on the wire: all text, coerced afterwards.
#[derive(Debug, Deserialize)]
struct RawRecord {
    creative_id: String,
    creative_name: String,
    tags: String,
    country: String,
    ad_network: String,
    os: String,
    campaign: String,
    ipm: String,
    ctr: String,
    spend: String,
    impressions: String,
    clicks: String,
}

impl RawRecord {
    fn coerce(self) -> AdRecord {
        AdRecord {
            creative_id: self.creative_id,
            creative_name: self.creative_name,
            tags: self.tags,
            country: self.country,
            ad_network: self.ad_network,
            os: self.os,
            campaign: self.campaign,
            ipm: coerce_f64(&self.ipm),
            ctr: coerce_f64(&self.ctr),
            spend: coerce_f64(&self.spend),
            impressions: coerce_u64(&self.impressions),
            clicks: coerce_u64(&self.clicks),
        }
    }
}

/// Text to float; non-numeric text coerces to 0.0.
///
/// Note that `"NaN"` *is* numeric-looking and passes through; the column
/// formatter refuses it later and the cell falls back to its raw form.
fn coerce_f64(field: &str) -> f64 {
    field.trim().parse().unwrap_or(0.0)
}

/// Text to count: integer spellings pass through, float spellings truncate
/// toward zero, anything negative or non-numeric coerces to 0.
fn coerce_u64(field: &str) -> u64 {
    let field = field.trim();
    if let Ok(n) = field.parse::<u64>() {
        return n;
    }
    match field.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v.trunc() as u64,
        _ => 0,
    }
}

/// Loads a report file.
pub fn load_records(path: impl AsRef<Path>) -> Result<LoadedRecords, SourceError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SourceError::Io {
        path: path.display().to_string(),
        source,
    })?;
    read_records(file)
}

/// Reads a report from any reader (the first line must be the header row).
pub fn read_records<R: io::Read>(reader: R) -> Result<LoadedRecords, SourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut loaded = LoadedRecords::default();
    for row in reader.deserialize::<RawRecord>() {
        match row {
            Ok(raw) => loaded.records.push(raw.coerce()),
            Err(_) => loaded.skipped += 1,
        }
    }
    Ok(loaded)
}
