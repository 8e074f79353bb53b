use logreport_core::conf::{InputSelection, resolve_input};
use logreport_core::report::{MetricsSnapshot, run_report_to};
use std::path::PathBuf;
use tempfile::TempDir;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

/// Result of driving the full pipeline against a fixture selection.
pub struct ReportRun {
    pub snapshot: MetricsSnapshot,
    pub stdout: String,
    pub json_path: PathBuf,
    // Keeps the output directory alive for the duration of the test.
    _out_dir: TempDir,
}

impl ReportRun {
    pub fn run(selection: InputSelection) -> Self {
        let input = resolve_input(Some(&selection)).expect("fixture selection must resolve");

        let out_dir = tempfile::tempdir().expect("failed to create temp dir");
        let json_path = out_dir.path().join("report.json");

        let mut stdout = Vec::new();
        let snapshot =
            run_report_to(&input, Some(&json_path), &mut stdout).expect("report run failed");

        Self {
            snapshot,
            stdout: String::from_utf8(stdout).expect("report output must be UTF-8"),
            json_path,
            _out_dir: out_dir,
        }
    }

    pub fn file(name: &str) -> Self {
        Self::run(InputSelection::File(fixture_path(name)))
    }

    pub fn folder(name: &str) -> Self {
        Self::run(InputSelection::Folder(fixture_path(name)))
    }
}
