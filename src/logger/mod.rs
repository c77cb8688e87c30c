//! Logger module
//!
//! A `Logger` is an explicitly constructed handle opened once at startup and
//! passed down (`Arc<Logger>`) to everything that writes log output. All
//! diagnostic and access-log lines go to the same sink for the process
//! lifetime. Writes are serialized through a `Mutex`, so concurrent request
//! tasks always append whole lines.

mod format;

pub use format::AccessLogEntry;

use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

/// Log output target
enum LogTarget {
    /// Write to stderr
    Stderr,
    /// Write to file
    File(File),
}

/// Thread-safe log writer with a single output target.
pub struct Logger {
    target: Mutex<LogTarget>,
}

impl Logger {
    /// Open the log file in read/write, create-if-missing, append mode.
    ///
    /// Returns an error when the file cannot be opened; the caller is
    /// expected to treat that as fatal before serving anything.
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .create(true)
            .append(true)
            .open(path)?;
        Ok(Self {
            target: Mutex::new(LogTarget::File(file)),
        })
    }

    /// Logger writing to stderr, for contexts without a log file.
    #[allow(dead_code)]
    pub fn stderr() -> Self {
        Self {
            target: Mutex::new(LogTarget::Stderr),
        }
    }

    /// Write one timestamped line to the target.
    fn write_line(&self, message: &str) {
        let stamped = format!("{} {message}", Local::now().format("%Y/%m/%d %H:%M:%S"));
        match self.target.lock() {
            Ok(target) => match &*target {
                LogTarget::Stderr => eprintln!("{stamped}"),
                LogTarget::File(file) => {
                    let mut f = file;
                    let _ = writeln!(f, "{stamped}");
                }
            },
            Err(_) => eprintln!("{stamped}"),
        }
    }

    pub fn info(&self, message: &str) {
        self.write_line(message);
    }

    pub fn error(&self, message: &str) {
        self.write_line(&format!("[ERROR] {message}"));
    }

    /// Write one formatted access-log line.
    pub fn access(&self, entry: &AccessLogEntry) {
        self.write_line(&entry.format());
    }
}
