use crate::conf::InputSelection;
use crate::logging::LogFormat;
use crate::report::constants::{DEFAULT_LOG_FILE, DEFAULT_LOG_FOLDER, DEFAULT_REPORT_PATH};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Analyze a single .log file
    #[arg(
        long,
        num_args = 0..=1,
        default_missing_value = DEFAULT_LOG_FILE,
        conflicts_with = "folder",
        value_name = "PATH"
    )]
    pub file: Option<PathBuf>,

    /// Analyze every .log file directly inside a folder
    #[arg(
        long,
        num_args = 0..=1,
        default_missing_value = DEFAULT_LOG_FOLDER,
        value_name = "DIR"
    )]
    pub folder: Option<PathBuf>,

    /// Where to write the JSON metrics snapshot
    #[arg(long, default_value = DEFAULT_REPORT_PATH, value_name = "PATH")]
    pub output: PathBuf,

    /// Print the report only, skip the JSON snapshot
    #[arg(long)]
    pub no_json: bool,

    /// Diagnostic output format
    #[arg(long, value_enum, default_value_t = LogFormat::Auto)]
    pub log_format: LogFormat,
}

impl ReportArgs {
    pub fn selection(&self) -> Option<InputSelection> {
        match (&self.file, &self.folder) {
            (Some(file), _) => Some(InputSelection::File(file.clone())),
            (None, Some(folder)) => Some(InputSelection::Folder(folder.clone())),
            (None, None) => None,
        }
    }

    pub fn json_path(&self) -> Option<&std::path::Path> {
        (!self.no_json).then_some(self.output.as_path())
    }
}
