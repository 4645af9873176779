//! End-to-end tests: a report file on disk, through the row source, the
//! table surface, and the text renderer.

use std::io::Write;

use adlens::{
    load_records, render_detail, render_preview, render_table, Dir, OutputMode, SortSpec,
    TableSurface,
};

const REPORT: &str = "\
creative_id,creative_name,tags,country,ad_network,os,campaign,ipm,ctr,spend,impressions,clicks
cr-1,Summer Banner,platform:ios;platform:android;channel:search,US,meta,ios,summer-2025,4.2,0.05,12.5,1000,50
cr-2,Holiday Video,platform:android;channel:social;format:video;length:short,DE,unity,android,holiday-2025,2.75,0.012,340.0,250000.5,3000
cr-3,Spring Banner,concept,FR,meta,ios,spring-2025,oops,NaN,15,900,45
";

fn write_report(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn load_surface(contents: &str) -> TableSurface {
    let file = write_report(contents);
    let loaded = load_records(file.path()).unwrap();
    TableSurface::with_skipped(loaded.records, loaded.skipped)
}

#[test]
fn loads_coerces_and_renders() {
    let surface = load_surface(REPORT);
    assert_eq!(surface.rows().len(), 3);

    // Float-spelled impressions truncated, non-numeric ipm coerced to zero.
    assert_eq!(surface.rows()[1].impressions, 250_000);
    assert_eq!(surface.rows()[2].ipm, 0.0);

    let text = render_table(&surface.render(), OutputMode::Text);
    assert!(text.contains("Summer Banner"));
    assert!(text.contains("5.00%"));
    assert!(text.contains("$340.00"));
    assert!(text.contains("250,000"));
    // The four-category tag cell truncates with a marker.
    assert!(text.contains("platform, channel, format..."));
}

#[test]
fn nan_ctr_falls_back_to_raw_with_warning() {
    let surface = load_surface(REPORT);
    let view = surface.render();

    let cr3 = view.rows.iter().find(|r| r.creative_id == "cr-3").unwrap();
    assert_eq!(cr3.cells[8], "NaN");
    assert!(view
        .messages
        .iter()
        .any(|m| m.text.contains("column 'ctr' shows raw values")));
    // The bare "concept" tag segment is reported too.
    assert!(view
        .messages
        .iter()
        .any(|m| m.text.contains("tag segments without a value")));
}

#[test]
fn filter_and_sort_drive_the_view() {
    let mut surface = load_surface(REPORT);
    surface.set_filter("banner");
    surface.set_sort(SortSpec::new("spend", Dir::Desc).unwrap());

    let view = surface.render();
    let ids: Vec<&str> = view.rows.iter().map(|r| r.creative_id.as_str()).collect();
    assert_eq!(ids, ["cr-3", "cr-1"]);
    assert_eq!(view.total_count, 3);

    let text = render_table(&view, OutputMode::Text);
    assert!(text.contains("Search: banner"));
    assert!(text.contains("Spend ↓"));
    assert!(text.contains("Showing 2 of 3 row(s)"));
}

#[test]
fn filter_matches_formatted_currency() {
    let mut surface = load_surface(REPORT);
    surface.set_filter("$340.00");
    assert_eq!(surface.render().rows.len(), 1);

    // The raw spelling in the file does not match the displayed cell.
    surface.set_filter("340.0,");
    assert!(surface.render().rows.is_empty());
}

#[test]
fn drill_down_preview_and_detail() {
    let mut surface = load_surface(REPORT);
    surface.row_clicked("cr-2");

    let preview = surface.preview().unwrap();
    let preview_text = render_preview(&preview, OutputMode::Text);
    assert!(preview_text.contains("Creative ID: cr-2"));
    assert!(preview_text.contains("  format:"));
    assert!(preview_text.contains("    - video"));

    surface.expand();
    let detail = surface.detail().unwrap();
    let detail_text = render_detail(&detail, OutputMode::Text);
    assert!(detail_text.contains("Ad Details"));
    assert!(detail_text.contains("$340.00"));
    assert!(detail_text.contains("250,000"));
    assert!(detail_text.contains("    - short"));

    surface.close_modal();
    assert!(surface.selection().is_closed());
}

#[test]
fn malformed_rows_skip_and_warn() {
    let report = "\
creative_id,creative_name,tags,country,ad_network,os,campaign,ipm,ctr,spend,impressions,clicks
cr-1,Ok Row,,US,meta,ios,c,1,0.1,1.0,10,1
short,row
cr-2,Also Ok,,US,meta,ios,c,1,0.1,1.0,10,1
";
    let surface = load_surface(report);
    assert_eq!(surface.rows().len(), 2);

    let text = render_table(&surface.render(), OutputMode::Text);
    assert!(text.contains("1 malformed source row(s) were skipped"));
}

#[test]
fn headers_only_report_renders_empty_table() {
    let report =
        "creative_id,creative_name,tags,country,ad_network,os,campaign,ipm,ctr,spend,impressions,clicks\n";
    let surface = load_surface(report);
    let text = render_table(&surface.render(), OutputMode::Text);
    assert!(text.contains("Creative ID"));
    assert!(text.contains("no records loaded"));
}
