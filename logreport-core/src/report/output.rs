use crate::report::aggregation::MetricsSnapshot;
use crate::report::constants::REPORT_JSON_INDENT;
use crate::report::error::ReportError;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::Path;

/// Serializes the snapshot as indented JSON, keeping metric order.
pub fn snapshot_to_json(snapshot: &MetricsSnapshot) -> Result<String, ReportError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(REPORT_JSON_INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);

    snapshot
        .serialize(&mut ser)
        .map_err(|source| ReportError::Serialize { source })?;

    // serde_json only ever emits valid UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Writes the snapshot to `path`, replacing any existing file.
pub fn write_snapshot(path: &Path, snapshot: &MetricsSnapshot) -> Result<(), ReportError> {
    let json = snapshot_to_json(snapshot)?;
    fs::write(path, json).map_err(|e| ReportError::write(path, e))
}

pub fn read_snapshot(path: &Path) -> Result<MetricsSnapshot, ReportError> {
    let raw = fs::read_to_string(path).map_err(|e| ReportError::read(path, e))?;

    serde_json::from_str(&raw).map_err(|source| ReportError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
