//! The static column model.
//!
//! Every displayed column is declared here: its key, header, raw accessor
//! and presentation format. The set and order match the report layout; the
//! table surface renders them left to right as returned by [`columns`].
//!
//! Formatting is split in two: [`Column::format`] is strict and reports a
//! [`FormatError`] when a value cannot be presented (a non-finite float),
//! while [`Column::display`] is the lossy variant the filter stage and the
//! surface use, falling back to the raw value so one bad cell never aborts
//! a render.

use crate::error::FormatError;
use crate::record::AdRecord;
use crate::tags::summarize_tags;
use crate::value::CellValue;

/// Distinct categories shown in the tags column summary before truncation.
const TAG_SUMMARY_MAX: usize = 3;

/// Which record field a column reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    CreativeId,
    CreativeName,
    Tags,
    Country,
    AdNetwork,
    Os,
    Campaign,
    Ipm,
    Ctr,
    Spend,
    Impressions,
    Clicks,
}

/// How a column presents its raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Presentation {
    /// The raw string, unchanged.
    Identity,
    /// Truncated tag-category summary.
    TagSummary,
    /// Fixed two-decimal numeric string.
    Decimal2,
    /// Fraction scaled to a percentage: `0.05` renders `"5.00%"`.
    Percent,
    /// Two-decimal amount with a `$` prefix.
    Currency,
    /// Thousands-grouped integer: `1000` renders `"1,000"`.
    Grouped,
}

/// One displayed column: key, header, sortability, accessor, formatter.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    /// Stable key, used for sort specs and error reporting.
    pub key: &'static str,
    /// Header title shown by the table surface.
    pub header: &'static str,
    /// Whether the sort toggle acts on this column.
    pub sortable: bool,
    field: Field,
    presentation: Presentation,
}

const COLUMNS: [Column; 12] = [
    Column {
        key: "creative_id",
        header: "Creative ID",
        sortable: true,
        field: Field::CreativeId,
        presentation: Presentation::Identity,
    },
    Column {
        key: "creative_name",
        header: "Creative Name",
        sortable: true,
        field: Field::CreativeName,
        presentation: Presentation::Identity,
    },
    Column {
        key: "tags",
        header: "Tags",
        sortable: true,
        field: Field::Tags,
        presentation: Presentation::TagSummary,
    },
    Column {
        key: "country",
        header: "Country",
        sortable: true,
        field: Field::Country,
        presentation: Presentation::Identity,
    },
    Column {
        key: "ad_network",
        header: "Ad Network",
        sortable: true,
        field: Field::AdNetwork,
        presentation: Presentation::Identity,
    },
    Column {
        key: "os",
        header: "OS",
        sortable: true,
        field: Field::Os,
        presentation: Presentation::Identity,
    },
    Column {
        key: "campaign",
        header: "Campaign",
        sortable: true,
        field: Field::Campaign,
        presentation: Presentation::Identity,
    },
    Column {
        key: "ipm",
        header: "IPM",
        sortable: true,
        field: Field::Ipm,
        presentation: Presentation::Decimal2,
    },
    Column {
        key: "ctr",
        header: "CTR",
        sortable: true,
        field: Field::Ctr,
        presentation: Presentation::Percent,
    },
    Column {
        key: "spend",
        header: "Spend",
        sortable: true,
        field: Field::Spend,
        presentation: Presentation::Currency,
    },
    Column {
        key: "impressions",
        header: "Impressions",
        sortable: true,
        field: Field::Impressions,
        presentation: Presentation::Grouped,
    },
    Column {
        key: "clicks",
        header: "Clicks",
        sortable: true,
        field: Field::Clicks,
        presentation: Presentation::Grouped,
    },
];

/// The full column set in display order.
pub fn columns() -> &'static [Column] {
    &COLUMNS
}

/// Looks up a column by key.
pub fn column(key: &str) -> Option<&'static Column> {
    COLUMNS.iter().find(|c| c.key == key)
}

impl Column {
    /// The raw accessor: the value the sort stage compares.
    pub fn value<'r>(&self, record: &'r AdRecord) -> CellValue<'r> {
        match self.field {
            Field::CreativeId => CellValue::Text(&record.creative_id),
            Field::CreativeName => CellValue::Text(&record.creative_name),
            Field::Tags => CellValue::Text(&record.tags),
            Field::Country => CellValue::Text(&record.country),
            Field::AdNetwork => CellValue::Text(&record.ad_network),
            Field::Os => CellValue::Text(&record.os),
            Field::Campaign => CellValue::Text(&record.campaign),
            Field::Ipm => CellValue::Float(record.ipm),
            Field::Ctr => CellValue::Float(record.ctr),
            Field::Spend => CellValue::Float(record.spend),
            Field::Impressions => CellValue::Int(record.impressions),
            Field::Clicks => CellValue::Int(record.clicks),
        }
    }

    /// Formats the cell for display, refusing values the presentation
    /// cannot express.
    pub fn format(&self, record: &AdRecord) -> Result<String, FormatError> {
        let value = self.value(record);
        match (self.presentation, value) {
            (Presentation::Identity, CellValue::Text(s)) => Ok(s.to_string()),
            (Presentation::TagSummary, CellValue::Text(s)) => {
                Ok(summarize_tags(s, TAG_SUMMARY_MAX))
            }
            (Presentation::Decimal2, CellValue::Float(v)) if v.is_finite() => {
                Ok(format!("{:.2}", v))
            }
            (Presentation::Percent, CellValue::Float(v)) if v.is_finite() => {
                Ok(format!("{:.2}%", v * 100.0))
            }
            (Presentation::Currency, CellValue::Float(v)) if v.is_finite() => {
                Ok(format!("${:.2}", v))
            }
            (Presentation::Grouped, CellValue::Int(n)) => Ok(group_thousands(n)),
            _ => Err(FormatError {
                column: self.key,
                raw: value.raw(),
            }),
        }
    }

    /// Formats the cell for display, falling back to the raw value.
    ///
    /// This is what the filter stage matches against and what the surface
    /// renders when [`Column::format`] fails.
    pub fn display(&self, record: &AdRecord) -> String {
        self.format(record).unwrap_or_else(|err| err.raw)
    }

    /// `true` for columns whose cells are numbers (the renderer right-aligns
    /// these).
    pub fn is_numeric(&self) -> bool {
        matches!(
            self.presentation,
            Presentation::Decimal2
                | Presentation::Percent
                | Presentation::Currency
                | Presentation::Grouped
        )
    }
}

/// Groups an integer's digits in threes: `1234567` becomes `"1,234,567"`.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AdRecord {
        AdRecord {
            creative_id: "1".to_string(),
            creative_name: "Summer Sale".to_string(),
            tags: "platform:ios;platform:android;channel:search".to_string(),
            country: "US".to_string(),
            ad_network: "meta".to_string(),
            os: "ios".to_string(),
            campaign: "summer-2025".to_string(),
            ipm: 4.236,
            ctr: 0.05,
            spend: 12.5,
            impressions: 1000,
            clicks: 50,
        }
    }

    #[test]
    fn column_set_is_complete_and_ordered() {
        let keys: Vec<&str> = columns().iter().map(|c| c.key).collect();
        assert_eq!(
            keys,
            [
                "creative_id",
                "creative_name",
                "tags",
                "country",
                "ad_network",
                "os",
                "campaign",
                "ipm",
                "ctr",
                "spend",
                "impressions",
                "clicks",
            ]
        );
        assert!(columns().iter().all(|c| c.sortable));
    }

    #[test]
    fn column_lookup() {
        assert_eq!(column("spend").unwrap().header, "Spend");
        assert!(column("nope").is_none());
    }

    #[test]
    fn identity_columns_pass_through() {
        let r = sample();
        assert_eq!(column("creative_id").unwrap().display(&r), "1");
        assert_eq!(column("ad_network").unwrap().display(&r), "meta");
    }

    #[test]
    fn tag_summary_cell() {
        assert_eq!(column("tags").unwrap().display(&sample()), "platform, channel");
    }

    #[test]
    fn numeric_cell_formats() {
        let r = sample();
        assert_eq!(column("ipm").unwrap().display(&r), "4.24");
        assert_eq!(column("ctr").unwrap().display(&r), "5.00%");
        assert_eq!(column("spend").unwrap().display(&r), "$12.50");
        assert_eq!(column("impressions").unwrap().display(&r), "1,000");
        assert_eq!(column("clicks").unwrap().display(&r), "50");
    }

    #[test]
    fn non_finite_float_surfaces_format_error() {
        let mut r = sample();
        r.ctr = f64::NAN;
        let err = column("ctr").unwrap().format(&r).unwrap_err();
        assert_eq!(err.column, "ctr");
        assert_eq!(err.raw, "NaN");
        // The lossy variant falls back to the raw value for that cell only.
        assert_eq!(column("ctr").unwrap().display(&r), "NaN");
        assert_eq!(column("spend").unwrap().display(&r), "$12.50");
    }

    #[test]
    fn numeric_flag() {
        assert!(column("spend").unwrap().is_numeric());
        assert!(column("impressions").unwrap().is_numeric());
        assert!(!column("tags").unwrap().is_numeric());
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }
}
