//! Preview and detail content for a selected row.
//!
//! Both views route the row's raw tag string through the tag parser so the
//! render layer only ever sees grouped categories, never the delimited
//! string itself.

use serde::Serialize;

use adlens_engine::{columns, parse_tags, AdRecord, TagGroups};

/// Content of the preview panel: the row's identity plus its grouped tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewView {
    pub creative_id: String,
    pub creative_name: String,
    pub tags: TagGroups,
}

impl PreviewView {
    /// Builds the preview content for a record.
    pub fn of(record: &AdRecord) -> Self {
        PreviewView {
            creative_id: record.creative_id.clone(),
            creative_name: record.creative_name.clone(),
            tags: parse_tags(&record.tags),
        }
    }
}

/// One labelled field of the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

/// Content of the full "Ad Details" modal: every field of the record,
/// formatted, plus the grouped tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub title: &'static str,
    pub fields: Vec<DetailField>,
    pub tags: TagGroups,
}

impl DetailView {
    /// Builds the detail content for a record.
    ///
    /// Fields appear in column order with the column headers as labels and
    /// the column formatters (lossy variant) supplying the values; the tags
    /// column is omitted from the field list and shown grouped instead.
    pub fn of(record: &AdRecord) -> Self {
        let fields = columns()
            .iter()
            .filter(|col| col.key != "tags")
            .map(|col| DetailField {
                label: col.header,
                value: col.display(record),
            })
            .collect();
        DetailView {
            title: "Ad Details",
            fields,
            tags: parse_tags(&record.tags),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> AdRecord {
        AdRecord {
            creative_id: "cr-9".to_string(),
            creative_name: "Holiday Push".to_string(),
            tags: "platform:ios;platform:android;channel:search".to_string(),
            country: "DE".to_string(),
            ad_network: "unity".to_string(),
            os: "android".to_string(),
            campaign: "holiday".to_string(),
            ipm: 2.5,
            ctr: 0.012,
            spend: 99.9,
            impressions: 250_000,
            clicks: 3000,
        }
    }

    #[test]
    fn test_preview_groups_tags() {
        let preview = PreviewView::of(&record());
        assert_eq!(preview.creative_id, "cr-9");
        assert_eq!(
            preview.tags.get("platform").unwrap(),
            &["ios".to_string(), "android".to_string()]
        );
    }

    #[test]
    fn test_detail_formats_every_field() {
        let detail = DetailView::of(&record());
        assert_eq!(detail.title, "Ad Details");
        // Eleven fields: all twelve columns minus tags.
        assert_eq!(detail.fields.len(), 11);
        assert!(detail.fields.iter().all(|f| f.label != "Tags"));

        let get = |label: &str| {
            detail
                .fields
                .iter()
                .find(|f| f.label == label)
                .map(|f| f.value.as_str())
                .unwrap()
        };
        assert_eq!(get("CTR"), "1.20%");
        assert_eq!(get("Spend"), "$99.90");
        assert_eq!(get("Impressions"), "250,000");
        assert_eq!(get("Clicks"), "3,000");
    }

    #[test]
    fn test_detail_tags_grouped() {
        let detail = DetailView::of(&record());
        assert_eq!(detail.tags.len(), 2);
        assert_eq!(detail.tags.get("channel").unwrap(), &["search".to_string()]);
    }

    #[test]
    fn test_views_serialize() {
        let json = serde_json::to_string(&DetailView::of(&record())).unwrap();
        assert!(json.contains("\"title\":\"Ad Details\""));
        assert!(json.contains("\"category\":\"platform\""));
    }
}
