use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::PathBuf;
use tracing::{error, info};

struct OpenFile {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
}

/// Pull-based line source over an ordered list of log files.
///
/// Files are opened one at a time when the previous one is exhausted. A file
/// that cannot be opened, or fails mid-read, is logged and skipped; iteration
/// continues with the next path.
pub struct LogLines {
    paths: std::vec::IntoIter<PathBuf>,
    current: Option<OpenFile>,
    files_read: usize,
}

impl LogLines {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            paths: paths.into_iter(),
            current: None,
            files_read: 0,
        }
    }

    /// Number of files successfully opened so far.
    pub fn files_read(&self) -> usize {
        self.files_read
    }

    fn open_next(&mut self) -> Option<()> {
        loop {
            let path = self.paths.next()?;
            match File::open(&path) {
                Ok(file) => {
                    info!(path = %path.display(), "reading log file");
                    self.files_read += 1;
                    self.current = Some(OpenFile {
                        path,
                        lines: BufReader::new(file).lines(),
                    });
                    return Some(());
                }
                Err(e) => {
                    error!(path = %path.display(), error = %e, "failed to open log file, skipping");
                }
            }
        }
    }
}

impl Iterator for LogLines {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let Some(open) = self.current.as_mut() else {
                self.open_next()?;
                continue;
            };

            match open.lines.next() {
                Some(Ok(line)) => return Some(line),
                Some(Err(e)) => {
                    error!(
                        path = %open.path.display(),
                        error = %e,
                        "error while reading log file, skipping remaining lines"
                    );
                    self.current = None;
                }
                None => self.current = None,
            }
        }
    }
}
