//! Rolling Logger
//!
//! Daily-rolling file logger for desktop apps. Each day gets its own
//! `{prefix}.YYYY-MM-DD.log` file, old files beyond the retention count are
//! removed, and the newest lines are kept in a ring buffer for diagnostics.
//!
//! `log` records are bridged into the same subscriber, so callers can keep
//! using `log::info!` and friends.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use chrono::{Local, NaiveDate};
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Number of daily files kept on disk
pub const DEFAULT_MAX_FILES: usize = 7;
/// Number of lines kept in memory
pub const DEFAULT_BUFFER_LINES: usize = 500;

static WRITER: OnceLock<RollingWriter> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("log directory error: {0}")]
    Io(#[from] io::Error),
    #[error("logger already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Install the global subscriber writing to `log_dir` and stderr.
///
/// Filtering follows `RUST_LOG`, defaulting to `info`.
pub fn init_logger(log_dir: impl AsRef<Path>, prefix: &str) -> Result<(), LoggerError> {
    let writer = RollingWriter::new(log_dir, prefix, DEFAULT_MAX_FILES, DEFAULT_BUFFER_LINES)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(writer.clone().and(io::stderr))
        .try_init()
        .map_err(|e| LoggerError::AlreadyInitialized(e.to_string()))?;

    let _ = WRITER.set(writer);
    tracing::info!(prefix, "rolling logger initialized");
    Ok(())
}

/// Most recent log lines from the installed logger, oldest first.
/// Empty before `init_logger`.
pub fn recent_lines() -> Vec<String> {
    WRITER.get().map(RollingWriter::recent_lines).unwrap_or_default()
}

/// Writer that rolls to a new file whenever the local date changes
#[derive(Clone)]
pub struct RollingWriter {
    state: Arc<Mutex<RollingState>>,
}

struct RollingState {
    dir: PathBuf,
    prefix: String,
    max_files: usize,
    current: Option<(NaiveDate, File)>,
    recent: VecDeque<String>,
    capacity: usize,
}

impl RollingWriter {
    pub fn new(
        dir: impl AsRef<Path>,
        prefix: &str,
        max_files: usize,
        capacity: usize,
    ) -> Result<Self, LoggerError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            state: Arc::new(Mutex::new(RollingState {
                dir,
                prefix: prefix.to_string(),
                max_files: max_files.max(1),
                current: None,
                recent: VecDeque::with_capacity(capacity),
                capacity,
            })),
        })
    }

    /// Write one formatted record as if it happened on `date`
    pub fn write_on(&self, date: NaiveDate, buf: &[u8]) -> io::Result<()> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| io::Error::other("rolling logger lock poisoned"))?;
        state.write_record(date, buf)
    }

    pub fn recent_lines(&self) -> Vec<String> {
        match self.state.lock() {
            Ok(state) => state.recent.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Path of the file used for `date`
    pub fn file_path(&self, date: NaiveDate) -> Option<PathBuf> {
        let state = self.state.lock().ok()?;
        Some(state.file_path(date))
    }
}

impl RollingState {
    fn file_path(&self, date: NaiveDate) -> PathBuf {
        self.dir
            .join(format!("{}.{}.log", self.prefix, date.format("%Y-%m-%d")))
    }

    fn write_record(&mut self, date: NaiveDate, buf: &[u8]) -> io::Result<()> {
        let needs_roll = !matches!(&self.current, Some((current, _)) if *current == date);
        if needs_roll {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(self.file_path(date))?;
            self.current = Some((date, file));
        }

        if let Some((_, file)) = self.current.as_mut() {
            file.write_all(buf)?;
        }

        // The record is already on disk; a failed prune only leaves extra files
        if needs_roll {
            if let Err(e) = self.prune() {
                eprintln!("rolling logger: pruning {} failed: {}", self.dir.display(), e);
            }
        }

        for line in String::from_utf8_lossy(buf).lines() {
            if line.is_empty() {
                continue;
            }
            if self.recent.len() == self.capacity {
                self.recent.pop_front();
            }
            if self.capacity > 0 {
                self.recent.push_back(line.to_string());
            }
        }
        Ok(())
    }

    /// Remove the oldest log files beyond `max_files`
    fn prune(&self) -> io::Result<()> {
        let head = format!("{}.", self.prefix);
        let mut logs: Vec<PathBuf> = fs::read_dir(&self.dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .map_or(false, |name| name.starts_with(&head) && name.ends_with(".log"))
            })
            .collect();

        if logs.len() <= self.max_files {
            return Ok(());
        }

        // Date stamps sort lexically
        logs.sort();
        let excess = logs.len() - self.max_files;
        for path in logs.into_iter().take(excess) {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

impl Write for RollingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_on(Local::now().date_naive(), buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| io::Error::other("rolling logger lock poisoned"))?;
        match state.current.as_mut() {
            Some((_, file)) => file.flush(),
            None => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for RollingWriter {
    type Writer = RollingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
