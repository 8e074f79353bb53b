use crate::conf::ResolvedInput;
use crate::report::aggregation::{MetricsAggregator, MetricsSnapshot};
use crate::report::output::write_snapshot;
use crate::report::render::{render_report, write_report};
use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

/// Runs the whole pipeline, printing the report to stdout.
///
/// The JSON artifact is written to `json_path` when one is given.
pub fn run_report(input: &ResolvedInput, json_path: Option<&Path>) -> Result<MetricsSnapshot> {
    let stdout = io::stdout();
    run_report_to(input, json_path, &mut stdout.lock())
}

pub fn run_report_to<W: Write>(
    input: &ResolvedInput,
    json_path: Option<&Path>,
    out: &mut W,
) -> Result<MetricsSnapshot> {
    let mut lines = input.lines();
    let mut agg = MetricsAggregator::new();

    agg.consume(lines.by_ref());

    let stats = agg.stats();
    info!(
        files = lines.files_read(),
        lines = stats.lines,
        matched = stats.matched,
        skipped = stats.skipped,
        invalid_durations = stats.invalid_durations,
        "log aggregation complete"
    );

    let snapshot = agg.finish();

    write_report(out, &render_report(&snapshot)).context("failed to print report")?;

    if let Some(path) = json_path {
        write_snapshot(path, &snapshot)?;
        info!(path = %path.display(), "metrics snapshot written");
    }

    Ok(snapshot)
}
