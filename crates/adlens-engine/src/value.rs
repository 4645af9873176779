//! Raw cell values extracted from records.
//!
//! The [`CellValue`] enum is what a column's accessor returns: the value of
//! one field for one record, borrowed where possible. The sort stage of the
//! view pipeline compares these raw values; the filter stage never sees
//! them (it matches against formatted text instead).

use std::cmp::Ordering;

/// The raw value of one column for one record.
///
/// Text borrows from the record; numbers are copied out. A report has three
/// value shapes: categorical strings, floating-point ratios/amounts, and
/// integer counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue<'a> {
    /// String field (borrowed from the record).
    Text(&'a str),
    /// Floating-point field (ipm, ctr, spend).
    Float(f64),
    /// Integer count field (impressions, clicks).
    Int(u64),
}

impl<'a> CellValue<'a> {
    /// Extracts the text, if this is a text value.
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the value as an `f64`, if numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Int(n) => Some(*n as f64),
            CellValue::Text(_) => None,
        }
    }

    /// The unformatted textual form of this value.
    ///
    /// This is the fallback the table surface shows when a presentation
    /// formatter refuses a value (for example a NaN that survived row-source
    /// coercion renders as `"NaN"`).
    pub fn raw(&self) -> String {
        match self {
            CellValue::Text(s) => (*s).to_string(),
            CellValue::Float(v) => v.to_string(),
            CellValue::Int(n) => n.to_string(),
        }
    }

    /// Compares two cell values of compatible types.
    ///
    /// Strings compare lexicographically, numbers numerically (integer and
    /// float mix via f64). Returns `None` for text-vs-number pairs and for
    /// NaN comparisons; the sort stage treats `None` as equal, which keeps
    /// the sort stable in the presence of garbage values.
    pub fn compare(&self, other: &CellValue<'_>) -> Option<Ordering> {
        match (self, other) {
            (CellValue::Text(a), CellValue::Text(b)) => Some(a.cmp(b)),
            (CellValue::Int(a), CellValue::Int(b)) => Some(a.cmp(b)),
            (CellValue::Float(a), CellValue::Float(b)) => a.partial_cmp(b),
            (CellValue::Float(_) | CellValue::Int(_), CellValue::Float(_) | CellValue::Int(_)) => {
                // Mixed numeric types compare via f64.
                self.as_f64()?.partial_cmp(&other.as_f64()?)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extractors() {
        assert_eq!(CellValue::Text("us").as_text(), Some("us"));
        assert_eq!(CellValue::Float(1.5).as_text(), None);
        assert_eq!(CellValue::Float(1.5).as_f64(), Some(1.5));
        assert_eq!(CellValue::Int(10).as_f64(), Some(10.0));
        assert_eq!(CellValue::Text("us").as_f64(), None);
    }

    #[test]
    fn raw_forms() {
        assert_eq!(CellValue::Text("meta").raw(), "meta");
        assert_eq!(CellValue::Float(0.05).raw(), "0.05");
        assert_eq!(CellValue::Float(f64::NAN).raw(), "NaN");
        assert_eq!(CellValue::Int(1000).raw(), "1000");
    }

    #[test]
    fn compare_same_types() {
        assert_eq!(
            CellValue::Text("a").compare(&CellValue::Text("b")),
            Some(Ordering::Less)
        );
        assert_eq!(
            CellValue::Int(5).compare(&CellValue::Int(5)),
            Some(Ordering::Equal)
        );
        assert_eq!(
            CellValue::Float(2.0).compare(&CellValue::Float(1.0)),
            Some(Ordering::Greater)
        );
    }

    #[test]
    fn compare_mixed_numeric() {
        assert_eq!(
            CellValue::Int(5).compare(&CellValue::Float(5.5)),
            Some(Ordering::Less)
        );
        assert_eq!(
            CellValue::Float(5.0).compare(&CellValue::Int(5)),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn compare_incomparable() {
        assert_eq!(CellValue::Text("5").compare(&CellValue::Int(5)), None);
        assert_eq!(
            CellValue::Float(f64::NAN).compare(&CellValue::Float(1.0)),
            None
        );
    }
}
