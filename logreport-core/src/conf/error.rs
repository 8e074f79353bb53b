use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Selection
    #[error("no input given: specify a log file or a folder")]
    NoInput,

    #[error("log file {path} must have a .log extension")]
    InvalidExtension { path: PathBuf },

    // Discovery
    #[error("{dir} is not a directory")]
    NotADirectory { dir: PathBuf },

    #[error("no log files found in folder {dir}")]
    NoLogFiles { dir: PathBuf },

    #[error("glob pattern error: {pattern}: {source}")]
    Glob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

impl ConfigError {
    pub fn invalid_extension(path: impl Into<PathBuf>) -> Self {
        Self::InvalidExtension { path: path.into() }
    }

    pub fn no_log_files(dir: impl Into<PathBuf>) -> Self {
        Self::NoLogFiles { dir: dir.into() }
    }
}
