//! File-based sink
//!
//! Appends every entry to `<dir>/<logger name>.log`, one file per logger
//! name. Useful for backend tooling where nobody watches the console.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::traits::LogSink;
use crate::error::LogResult;
use crate::logging::entry::LogEntry;

/// A sink that appends lines to per-logger files in a directory
#[derive(Debug)]
pub struct FileSink {
    dir: PathBuf,
    // Serializes appends so lines from different threads never interleave.
    write_lock: Mutex<()>,
}

impl FileSink {
    /// Create a file sink, creating `dir` if it doesn't exist
    pub fn new(dir: impl Into<PathBuf>) -> LogResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            write_lock: Mutex::new(()),
        })
    }

    /// Get the log directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file entries for `name` are appended to
    pub fn path_for(&self, name: &str) -> PathBuf {
        let file_name: String = name
            .chars()
            .map(|c| if c == '/' || c == '\\' { '_' } else { c })
            .collect();
        self.dir.join(format!("{}.log", file_name))
    }

    fn append(&self, entry: &LogEntry) -> io::Result<()> {
        let _guard = self.write_lock.lock();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.path_for(&entry.name))?;
        writeln!(file, "{}", entry)?;
        file.flush()
    }
}

impl LogSink for FileSink {
    fn emit(&self, entry: &LogEntry) {
        if let Err(e) = self.append(entry) {
            let mut stderr = io::stderr().lock();
            let _ = writeln!(stderr, "Failed to write log: {}", e);
            let _ = writeln!(stderr, "{}", entry);
        }
    }
}
