use crate::conf::discover::discover;
use crate::conf::error::ConfigError;
use crate::input::LogLines;
use crate::report::constants::{LOG_EXTENSION, LOG_GLOB};
use std::path::{Path, PathBuf};

/// Where the log lines come from, as chosen on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSelection {
    /// A single `.log` file.
    File(PathBuf),
    /// Every `*.log` file directly inside a directory.
    Folder(PathBuf),
}

/// Ordered list of log files a run will read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInput {
    paths: Vec<PathBuf>,
}

impl ResolvedInput {
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Lazily reads the files in order as one line sequence.
    pub fn lines(&self) -> LogLines {
        LogLines::new(self.paths.clone())
    }
}

pub fn resolve_input(selection: Option<&InputSelection>) -> Result<ResolvedInput, ConfigError> {
    match selection {
        None => Err(ConfigError::NoInput),
        Some(InputSelection::File(path)) => resolve_file(path),
        Some(InputSelection::Folder(dir)) => resolve_folder(dir),
    }
}

// The file itself is not opened here; a missing file is reported while reading.
fn resolve_file(path: &Path) -> Result<ResolvedInput, ConfigError> {
    if path.extension().and_then(|e| e.to_str()) != Some(LOG_EXTENSION) {
        return Err(ConfigError::invalid_extension(path));
    }

    Ok(ResolvedInput {
        paths: vec![path.to_path_buf()],
    })
}

fn resolve_folder(dir: &Path) -> Result<ResolvedInput, ConfigError> {
    if !dir.is_dir() {
        return Err(ConfigError::NotADirectory {
            dir: dir.to_path_buf(),
        });
    }

    let paths = discover(dir, LOG_GLOB)?;
    if paths.is_empty() {
        return Err(ConfigError::no_log_files(dir));
    }

    Ok(ResolvedInput { paths })
}
