//! The adlens CLI: load a performance report and print the rendered table,
//! optionally drilling into one creative.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

use adlens::{
    load_records, render_detail, render_preview, render_table, Dir, OutputMode, SortSpec,
    TableSurface,
};

#[derive(Debug, Parser)]
#[command(name = "adlens", version, about = "Browse an ad-creative performance report")]
struct Cli {
    /// Path to the report CSV
    report: PathBuf,

    /// Keep only rows whose displayed cells contain TEXT (case-insensitive)
    #[arg(long, value_name = "TEXT")]
    filter: Option<String>,

    /// Sort by a column, e.g. "spend" or "spend:desc"
    #[arg(long, value_name = "KEY[:DIR]")]
    sort: Option<String>,

    /// Preview the row with this creative id
    #[arg(long, value_name = "CREATIVE_ID")]
    show: Option<String>,

    /// Expand the previewed row into the full detail view
    #[arg(long, requires = "show")]
    full: bool,

    /// Disable styled output
    #[arg(long)]
    plain: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mode = if cli.plain {
        OutputMode::Text
    } else {
        OutputMode::Auto
    };

    let loaded = load_records(&cli.report)?;
    let mut surface = TableSurface::with_skipped(loaded.records, loaded.skipped);

    if let Some(filter) = cli.filter {
        surface.set_filter(filter);
    }
    if let Some(sort) = &cli.sort {
        surface.set_sort(parse_sort(sort)?);
    }
    if let Some(id) = &cli.show {
        surface.row_clicked(id);
        if cli.full {
            surface.expand();
        }
    }

    print!("{}", render_table(&surface.render(), mode));

    if let Some(preview) = surface.preview() {
        println!();
        print!("{}", render_preview(&preview, mode));
    } else if let Some(detail) = surface.detail() {
        println!();
        print!("{}", render_detail(&detail, mode));
    } else if let Some(id) = &cli.show {
        eprintln!("warning: no row with creative id '{}'", id);
    }

    Ok(())
}

/// Parses `KEY` or `KEY:asc` / `KEY:desc` into a validated sort spec.
fn parse_sort(spec: &str) -> Result<SortSpec> {
    let (key, dir) = match spec.split_once(':') {
        Some((key, "asc")) => (key, Dir::Asc),
        Some((key, "desc")) => (key, Dir::Desc),
        Some((_, other)) => bail!("invalid sort direction '{}'; use 'asc' or 'desc'", other),
        None => (spec, Dir::Asc),
    };
    Ok(SortSpec::new(key, dir)?)
}
