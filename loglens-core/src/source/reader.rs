use crate::record::{Record, validate};
use crate::source::SourceError;
use serde_json::Value;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::warn;

/// A live stream stops at this literal line; files read to EOF.
pub const STREAM_TERMINATOR: &str = "Exit";

/// Per-run error counters, owned by the source and read after the stream is
/// exhausted. One schema-invalid record counts once no matter how many
/// individual failures it bundles.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize)]
pub struct ErrorInfo {
    pub parse_errors: u64,
    pub invalid_records: u64,
}

/// Pull-based record source over raw JSONL lines.
///
/// Yields one validated [`Record`] at a time; counting and skipping of bad
/// lines happens between pulls, so an unbounded stream is processed in
/// constant memory. A mid-read I/O failure ends iteration and is surfaced
/// by [`RecordSource::finish`].
pub struct RecordSource {
    reader: Box<dyn BufRead>,
    errors: ErrorInfo,
    io_error: Option<io::Error>,
    sentinel: bool,
    verbose: bool,
    line_number: u64,
}

impl std::fmt::Debug for RecordSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordSource")
            .field("errors", &self.errors)
            .field("io_error", &self.io_error)
            .field("sentinel", &self.sentinel)
            .field("verbose", &self.verbose)
            .field("line_number", &self.line_number)
            .finish_non_exhaustive()
    }
}

impl RecordSource {
    /// Open a bounded `.jsonl` file. Any other extension is a fatal
    /// configuration error.
    pub fn from_path(path: &Path, verbose: bool) -> Result<Self, SourceError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        if extension != "jsonl" {
            return Err(SourceError::UnsupportedExtension {
                path: path.to_path_buf(),
                extension: extension.to_string(),
            });
        }

        let file = File::open(path).map_err(|e| SourceError::open(path, e))?;
        Ok(Self::from_reader(
            Box::new(BufReader::new(file)),
            false,
            verbose,
        ))
    }

    /// Unbounded stream from stdin; terminates on EOF or on the literal
    /// sentinel line [`STREAM_TERMINATOR`].
    pub fn stdin(verbose: bool) -> Self {
        Self::from_reader(Box::new(BufReader::new(io::stdin())), true, verbose)
    }

    pub fn from_reader(reader: Box<dyn BufRead>, sentinel: bool, verbose: bool) -> Self {
        Self {
            reader,
            errors: ErrorInfo::default(),
            io_error: None,
            sentinel,
            verbose,
            line_number: 0,
        }
    }

    pub fn error_info(&self) -> ErrorInfo {
        self.errors
    }

    /// Surface a fatal mid-read I/O error, if one ended iteration early.
    /// Call after the stream is exhausted.
    pub fn finish(&mut self) -> Result<ErrorInfo, SourceError> {
        match self.io_error.take() {
            Some(source) => Err(SourceError::Read { source }),
            None => Ok(self.errors),
        }
    }

    fn next_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                self.line_number += 1;
                Some(line)
            }
            Err(source) => {
                self.io_error = Some(source);
                None
            }
        }
    }
}

impl Iterator for RecordSource {
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        loop {
            let line = self.next_line()?;
            let line = line.trim();

            if self.sentinel && line == STREAM_TERMINATOR {
                return None;
            }
            if line.is_empty() {
                continue;
            }

            let raw: Value = match serde_json::from_str(line) {
                Ok(raw) => raw,
                Err(e) => {
                    self.errors.parse_errors += 1;
                    if self.verbose {
                        warn!(line = self.line_number, error = %e, "skipping malformed JSON line");
                    }
                    continue;
                }
            };

            match validate(&raw) {
                Ok(record) => return Some(record),
                Err(failures) => {
                    // One increment per record, however many failures it bundles.
                    self.errors.invalid_records += 1;
                    if self.verbose {
                        for failure in failures.failures() {
                            warn!(line = self.line_number, %failure, "skipping invalid record");
                        }
                    }
                }
            }
        }
    }
}
