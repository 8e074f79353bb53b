use crate::conf::error::ConfigError;
use glob::{Pattern, glob};
use std::path::{Path, PathBuf};

/// Lists the log files directly inside `dir` whose names match `glob_pattern`.
///
/// Only regular files are returned, so a directory such as `archive.log` is
/// never treated as input. Paths come back sorted by name, which is the
/// order their lines are concatenated in. Entries that cannot be read while
/// walking the directory are dropped.
///
/// # Errors
///
/// Returns `ConfigError::Glob` if `glob_pattern` is malformed.
pub fn discover(dir: &Path, glob_pattern: &str) -> Result<Vec<PathBuf>, ConfigError> {
    let pattern = resolve_glob(dir, glob_pattern);
    let entries = glob(&pattern).map_err(|e| ConfigError::Glob {
        pattern: pattern.clone(),
        source: e,
    })?;

    let mut logs: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .collect();

    logs.sort();
    Ok(logs)
}

/// Joins `pattern` onto `dir`, escaping glob metacharacters in `dir` so
/// that only `pattern` is interpreted.
pub fn resolve_glob(dir: &Path, pattern: &str) -> String {
    let dir = Pattern::escape(&dir.to_string_lossy());
    Path::new(&dir).join(pattern).to_string_lossy().into_owned()
}
