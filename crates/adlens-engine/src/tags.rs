//! Tag string parsing and summarization.
//!
//! The `tags` field of a record is a flat delimited string,
//! `"category:value;category:value;..."`. [`parse_tags`] turns it into
//! ordered category groups for the preview/detail views; [`summarize_tags`]
//! produces the truncated category list shown in the table cell.
//!
//! Parsing is lenient by design: an empty string yields an empty group set
//! (a valid state, not an error), and a segment without a `:` becomes a
//! category with an empty-string value rather than leaking a null into the
//! render layer. Such bare segments are counted on the result so the surface
//! can report them.

use serde::Serialize;

/// One tag category with its values, in appearance order.
///
/// Duplicate values are retained; `"platform:ios;platform:ios"` yields two
/// entries under `platform`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagGroup {
    pub category: String,
    pub values: Vec<String>,
}

/// Ordered mapping of tag category to values, derived from one record's raw
/// tag string.
///
/// Categories appear in first-seen order. The structure is ephemeral: it is
/// rebuilt from the raw string on every access and never cached across
/// records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagGroups {
    groups: Vec<TagGroup>,
    #[serde(skip)]
    bare_segments: usize,
}

impl TagGroups {
    /// Iterates the groups in first-seen category order.
    pub fn iter(&self) -> std::slice::Iter<'_, TagGroup> {
        self.groups.iter()
    }

    /// The values recorded under `category`, if any.
    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|g| g.category == category)
            .map(|g| g.values.as_slice())
    }

    /// Number of distinct categories.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// `true` when the raw string held no usable segments.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of segments that lacked a `:` separator and were stored with
    /// an empty value.
    pub fn bare_segments(&self) -> usize {
        self.bare_segments
    }
}

impl<'a> IntoIterator for &'a TagGroups {
    type Item = &'a TagGroup;
    type IntoIter = std::slice::Iter<'a, TagGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Parses a raw tag string into ordered category groups.
///
/// Splits on `;`, dropping empty segments; each segment splits on its first
/// `:` into a trimmed category and a trimmed value. Values under the same
/// category accumulate in appearance order, duplicates retained. A segment
/// without `:` is kept as a category with an empty-string value and counted
/// in [`TagGroups::bare_segments`].
///
/// # Example
///
/// ```rust
/// use adlens_engine::parse_tags;
///
/// let groups = parse_tags("platform:ios;platform:android;channel:search");
/// assert_eq!(groups.len(), 2);
/// assert_eq!(
///     groups.get("platform").unwrap(),
///     &["ios".to_string(), "android".to_string()]
/// );
/// ```
pub fn parse_tags(raw: &str) -> TagGroups {
    let mut groups: Vec<TagGroup> = Vec::new();
    let mut bare_segments = 0;

    for segment in raw.split(';') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        let (category, value) = match segment.split_once(':') {
            Some((category, value)) => (category.trim(), value.trim()),
            None => {
                bare_segments += 1;
                (segment, "")
            }
        };
        match groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.values.push(value.to_string()),
            None => groups.push(TagGroup {
                category: category.to_string(),
                values: vec![value.to_string()],
            }),
        }
    }

    TagGroups {
        groups,
        bare_segments,
    }
}

/// Summarizes a raw tag string as its distinct category names.
///
/// Names appear in first-seen order, joined by `", "` and truncated to
/// `max_categories`; a trailing `"..."` marks that more categories exist.
///
/// # Example
///
/// ```rust
/// use adlens_engine::summarize_tags;
///
/// let raw = "platform:ios;platform:android;channel:search";
/// assert_eq!(summarize_tags(raw, 3), "platform, channel");
/// assert_eq!(summarize_tags(raw, 1), "platform...");
/// ```
pub fn summarize_tags(raw: &str, max_categories: usize) -> String {
    let groups = parse_tags(raw);
    let shown: Vec<&str> = groups
        .iter()
        .take(max_categories)
        .map(|g| g.category.as_str())
        .collect();
    let mut summary = shown.join(", ");
    if groups.len() > max_categories {
        summary.push_str("...");
    }
    summary
}
