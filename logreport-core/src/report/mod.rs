//! Access Log Report Pipeline
//!
//! Reads access-log lines, keeps a handful of counters, and turns them into
//! a short report once the input is exhausted.
//!
//! Each line is matched against the combined log format (with a trailing
//! duration in milliseconds). Lines that don't fit are logged and skipped.
//! Matched requests bump a per-method counter and a per-address counter, and
//! compete for one of the three "longest request" slots.
//!
//! Nothing except the address counters grows with the input, so a run over
//! many large files only ever holds one line at a time.
//!
//! The overall data processing architecture is:
//!
//! LogLines
//! parse_line
//! ParsedRequest
//! MetricsAggregator
//! MetricsSnapshot
//! render_report / write_snapshot
//!

pub mod constants;
mod aggregation;
mod duration;
mod error;
mod ordered_map;
mod output;
mod parse;
mod render;
mod run;
mod types;

#[cfg(test)]
mod tests;

pub use aggregation::{AggregationStats, MetricsAggregator, MetricsSnapshot};
pub use duration::{DurationMs, InvalidDuration};
pub use error::ReportError;
pub use output::{read_snapshot, snapshot_to_json, write_snapshot};
pub use parse::parse_line;
pub use render::{render_report, write_report};
pub use run::{run_report, run_report_to};
pub use types::{HttpMethod, ParsedRequest, UnknownMethod};
