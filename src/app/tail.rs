// MMDVM Monitor - app/tail.rs
//
// Live tail of the daily MMDVMHost log (`<log-dir>/MMDVM-YYYY-MM-DD.log`).
//
// Behaviour:
//   - The expected path is recomputed from the local date on every poll. When
//     it changes the old handle is dropped and the new file is opened
//     positioned at its end, so a restart never replays old traffic.
//   - The read offset only ever advances past complete, newline-terminated
//     lines. A line the producer is still writing is re-read next poll.
//   - On rollover any unread tail of the previous day's file is abandoned.
//   - A file that cannot be opened puts the source in the "unavailable" state;
//     every poll retries the open and returns no lines until it succeeds.
//   - No error escapes `poll`: failures are logged and yield an empty batch.
//   - Truncated files (size < offset) restart from offset 0.
//   - MAX_TAIL_READ_BYTES_PER_TICK caps the bytes read per poll. A single
//     line longer than that is read on up to MAX_TAIL_PARTIAL_BYTES; past
//     that limit it is dropped through its terminating newline.

use crate::util::constants::{
    LOG_FILE_DATE_FORMAT, LOG_FILE_PREFIX, LOG_FILE_SUFFIX, MAX_TAIL_PARTIAL_BYTES,
    MAX_TAIL_READ_BYTES_PER_TICK,
};
use crate::util::error::TailError;
use chrono::{Local, NaiveDate};
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

/// Path of the MMDVMHost log for `date` inside `log_dir`.
pub fn daily_log_path(log_dir: &Path, date: NaiveDate) -> PathBuf {
    log_dir.join(format!(
        "{LOG_FILE_PREFIX}{}{LOG_FILE_SUFFIX}",
        date.format(LOG_FILE_DATE_FORMAT)
    ))
}

/// Incremental reader over the current day's log file.
#[derive(Debug)]
pub struct LineSource {
    log_dir: PathBuf,
    /// Path of the open file; `None` while unavailable.
    current_path: Option<PathBuf>,
    file: Option<File>,
    cursor: ReadCursor,
    /// Last path whose open failed, so the retry loop warns only once.
    failed_path: Option<PathBuf>,
}

impl LineSource {
    /// Create a source for `log_dir` and open today's file at its end.
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        Self::starting_on(log_dir, Local::now().date_naive())
    }

    /// Create a source and open the file for `date` at its end.
    pub fn starting_on(log_dir: impl Into<PathBuf>, date: NaiveDate) -> Self {
        let mut source = Self {
            log_dir: log_dir.into(),
            current_path: None,
            file: None,
            cursor: ReadCursor::default(),
            failed_path: None,
        };
        let path = source.expected_path(date);
        source.reopen(path);
        source
    }

    pub fn expected_path(&self, date: NaiveDate) -> PathBuf {
        daily_log_path(&self.log_dir, date)
    }

    /// Whether a log file is currently open.
    pub fn is_available(&self) -> bool {
        self.file.is_some()
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    /// Complete lines appended since the previous poll, using today's date.
    pub fn poll(&mut self) -> Vec<String> {
        self.poll_on(Local::now().date_naive())
    }

    /// Complete lines appended since the previous poll, treating `today` as
    /// the current date.
    pub fn poll_on(&mut self, today: NaiveDate) -> Vec<String> {
        let expected = self.expected_path(today);
        if self.current_path.as_deref() != Some(expected.as_path()) {
            self.reopen(expected);
        }

        let (Some(file), Some(path)) = (self.file.as_mut(), self.current_path.as_deref()) else {
            return Vec::new();
        };

        match read_complete_lines(file, path, &mut self.cursor) {
            Ok(lines) => {
                if !lines.is_empty() {
                    tracing::trace!(file = %path.display(), count = lines.len(), "Tail: new lines");
                }
                lines
            }
            Err(e) => {
                tracing::warn!(error = %e, "Tail: read failed; retrying next poll");
                Vec::new()
            }
        }
    }

    /// Drop the current handle and open `path` positioned at its end.
    fn reopen(&mut self, path: PathBuf) {
        if let Some(old) = self.current_path.take() {
            tracing::info!(
                old = %old.display(),
                new = %path.display(),
                "Tail: log date changed; switching files"
            );
        }
        self.file = None;
        self.cursor = ReadCursor::default();

        match open_at_end(&path) {
            Ok((file, offset)) => {
                tracing::info!(file = %path.display(), offset, "Tail: log file opened");
                self.file = Some(file);
                self.cursor.offset = offset;
                self.current_path = Some(path);
                self.failed_path = None;
            }
            Err(e) => {
                if self.failed_path.as_deref() != Some(path.as_path()) {
                    tracing::warn!(error = %e, "Tail: log file unavailable; will keep retrying");
                } else {
                    tracing::trace!(error = %e, "Tail: log file still unavailable");
                }
                self.failed_path = Some(path);
            }
        }
    }
}

fn open_at_end(path: &Path) -> Result<(File, u64), TailError> {
    let mut file = File::open(path).map_err(|source| TailError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let offset = file
        .seek(SeekFrom::End(0))
        .map_err(|source| TailError::Seek {
            path: path.to_path_buf(),
            offset: 0,
            source,
        })?;
    Ok((file, offset))
}

/// Read position within the open file.
#[derive(Debug, Clone, Copy, Default)]
struct ReadCursor {
    /// Byte position just past the last complete line handed out.
    offset: u64,
    /// An over-long line was dropped; bytes up to its newline are skipped.
    discarding: bool,
}

/// Read the complete lines between `cursor.offset` and the current end of
/// file.
///
/// The offset is advanced past the last newline read; bytes after it are left
/// for the next call.
fn read_complete_lines(
    file: &mut File,
    path: &Path,
    cursor: &mut ReadCursor,
) -> Result<Vec<String>, TailError> {
    let size = file
        .metadata()
        .map_err(|source| TailError::Stat {
            path: path.to_path_buf(),
            source,
        })?
        .len();

    if size < cursor.offset {
        tracing::info!(
            file = %path.display(),
            old_offset = cursor.offset,
            new_size = size,
            "Tail: file truncated; restarting from the beginning"
        );
        *cursor = ReadCursor::default();
    }

    if size == cursor.offset {
        return Ok(Vec::new());
    }

    file.seek(SeekFrom::Start(cursor.offset))
        .map_err(|source| TailError::Seek {
            path: path.to_path_buf(),
            offset: cursor.offset,
            source,
        })?;
    let read_err = |source| TailError::Read {
        path: path.to_path_buf(),
        source,
    };

    let limit = (size - cursor.offset).min(MAX_TAIL_READ_BYTES_PER_TICK as u64);
    let mut buf = Vec::with_capacity(limit as usize);
    file.by_ref()
        .take(limit)
        .read_to_end(&mut buf)
        .map_err(read_err)?;

    if cursor.discarding {
        match buf.iter().position(|&b| b == b'\n') {
            Some(pos) => {
                cursor.offset += pos as u64 + 1;
                cursor.discarding = false;
                buf.drain(..=pos);
            }
            None => {
                cursor.offset += buf.len() as u64;
                return Ok(Vec::new());
            }
        }
    }

    let end = match buf.iter().rposition(|&b| b == b'\n') {
        Some(pos) => pos + 1,
        None => {
            // Everything up to end of file is a line still being written.
            if cursor.offset + buf.len() as u64 >= size {
                return Ok(Vec::new());
            }

            // One line is longer than a single read; look further for its end.
            let extra = (MAX_TAIL_PARTIAL_BYTES - buf.len()) as u64;
            file.by_ref()
                .take(extra)
                .read_to_end(&mut buf)
                .map_err(read_err)?;
            match buf.iter().position(|&b| b == b'\n') {
                Some(pos) => pos + 1,
                None if buf.len() >= MAX_TAIL_PARTIAL_BYTES => {
                    tracing::warn!(
                        file = %path.display(),
                        bytes = buf.len(),
                        "Tail: dropping over-long line"
                    );
                    cursor.offset += buf.len() as u64;
                    cursor.discarding = true;
                    return Ok(Vec::new());
                }
                None => return Ok(Vec::new()),
            }
        }
    };

    cursor.offset += end as u64;
    let text = String::from_utf8_lossy(&buf[..end]);
    Ok(text.lines().map(|line| line.trim().to_string()).collect())
}
