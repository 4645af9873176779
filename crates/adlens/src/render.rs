//! Plain-text rendering of the table, preview, and detail views.
//!
//! Column widths are resolved from the actual content using display widths
//! (CJK and other wide characters count as two columns), numeric columns
//! are right-aligned, and the sorted column's header carries a direction
//! marker. Styling is plain `console::Style` and is applied only when the
//! output mode says so; widths are computed before styling so ANSI escapes
//! never skew the layout.

use console::Style;
use unicode_width::UnicodeWidthStr;

use adlens_engine::{column, Dir};

use crate::detail::{DetailView, PreviewView};
use crate::surface::TableView;

/// Separator between columns.
const COLUMN_SEP: &str = "  ";

/// Whether rendered output carries terminal styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Style when the terminal supports colors.
    #[default]
    Auto,
    /// Always style.
    Term,
    /// Never style.
    Text,
}

impl OutputMode {
    fn styled(self) -> bool {
        match self {
            OutputMode::Auto => console::colors_enabled(),
            OutputMode::Term => true,
            OutputMode::Text => false,
        }
    }

    /// `Term` forces styling through even when the stream is not a
    /// terminal; `Auto` relies on console's own detection.
    fn style(self, style: Style) -> Style {
        if self == OutputMode::Term {
            style.force_styling(true)
        } else {
            style
        }
    }
}

/// Renders the table view: search echo, header with sort markers, body
/// rows, a "showing X of Y" footer when filtered, and status messages.
pub fn render_table(view: &TableView, mode: OutputMode) -> String {
    let styled = mode.styled();
    let mut out = String::new();

    if !view.filter.is_empty() {
        out.push_str(&format!("Search: {}\n\n", view.filter));
    }

    // Header labels carry the sort affordance of their column.
    let labels: Vec<String> = view
        .header
        .iter()
        .map(|h| match h.sort {
            Some(Dir::Asc) => format!("{} ↑", h.title),
            Some(Dir::Desc) => format!("{} ↓", h.title),
            None => h.title.to_string(),
        })
        .collect();

    // Resolve each column's width from its header label and cells.
    let widths: Vec<usize> = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            view.rows
                .iter()
                .map(|row| row.cells[i].width())
                .chain(std::iter::once(label.width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let right_align: Vec<bool> = view
        .header
        .iter()
        .map(|h| column(h.key).is_some_and(|c| c.is_numeric()))
        .collect();

    let header_line = format_row(&labels, &widths, &right_align);
    if styled {
        let style = mode.style(Style::new().bold());
        out.push_str(&style.apply_to(&header_line).to_string());
    } else {
        out.push_str(&header_line);
    }
    out.push('\n');

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&format_row(&rule, &widths, &right_align));
    out.push('\n');

    for row in &view.rows {
        out.push_str(&format_row(&row.cells, &widths, &right_align));
        out.push('\n');
    }

    if view.rows.len() != view.total_count {
        out.push_str(&format!(
            "\nShowing {} of {} row(s)\n",
            view.rows.len(),
            view.total_count
        ));
    }

    for message in &view.messages {
        let line = format!("{}: {}", message.level, message.text);
        if styled {
            let style = mode.style(message.level.style());
            out.push_str(&style.apply_to(&line).to_string());
        } else {
            out.push_str(&line);
        }
        out.push('\n');
    }

    out
}

/// Renders the preview panel for a selected row.
pub fn render_preview(preview: &PreviewView, mode: OutputMode) -> String {
    let mut out = String::new();
    push_title(&mut out, "Preview", mode);
    out.push_str(&format!("Creative ID: {}\n", preview.creative_id));
    out.push_str(&format!("Name: {}\n", preview.creative_name));
    out.push_str("Tags:\n");
    push_tag_groups(&mut out, &preview.tags);
    out.push_str("\nUse --full to view full details\n");
    out
}

/// Renders the full "Ad Details" view for an expanded row.
pub fn render_detail(detail: &DetailView, mode: OutputMode) -> String {
    let mut out = String::new();
    push_title(&mut out, detail.title, mode);

    let label_width = detail
        .fields
        .iter()
        .map(|f| f.label.width())
        .max()
        .unwrap_or(0);
    for field in &detail.fields {
        out.push_str(&format!(
            "{:<width$}  {}\n",
            format!("{}:", field.label),
            field.value,
            width = label_width + 1
        ));
    }
    out.push_str("Tags:\n");
    push_tag_groups(&mut out, &detail.tags);
    out
}

fn push_title(out: &mut String, title: &str, mode: OutputMode) {
    if mode.styled() {
        let style = mode.style(Style::new().bold());
        out.push_str(&style.apply_to(title).to_string());
    } else {
        out.push_str(title);
    }
    out.push('\n');
    out.push_str(&"-".repeat(title.width()));
    out.push('\n');
}

fn push_tag_groups(out: &mut String, tags: &adlens_engine::TagGroups) {
    for group in tags {
        out.push_str(&format!("  {}:\n", group.category));
        for value in &group.values {
            out.push_str(&format!("    - {}\n", value));
        }
    }
}

/// Pads each cell to its column width and joins with the separator.
fn format_row(cells: &[String], widths: &[usize], right_align: &[bool]) -> String {
    let formatted: Vec<String> = cells
        .iter()
        .zip(widths.iter().zip(right_align.iter()))
        .map(|(cell, (&width, &right))| pad(cell, width, right))
        .collect();
    formatted.join(COLUMN_SEP).trim_end().to_string()
}

fn pad(text: &str, width: usize, right_align: bool) -> String {
    let padding = width.saturating_sub(text.width());
    if right_align {
        format!("{}{}", " ".repeat(padding), text)
    } else {
        format!("{}{}", text, " ".repeat(padding))
    }
}
