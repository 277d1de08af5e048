//! Session logging.
//!
//! A run owns a single [`Logger`] that appends every message to one session
//! log file and mirrors it to the console with level-dependent color. All
//! levels are always recorded; the configured log level does not filter.

use crate::backup::result_error::result::Result;
use chrono::Local;
use derive_more::Display;
use serde::de::{Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Formatter;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// File name timestamp, seconds resolution, local time
static SESSION_TIME_FORMAT: &str = "%Y%m%d_%H%M%S";
/// Timestamp embedded in each log line
static LINE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

static RED: &str = "\x1b[31m";
static DIM: &str = "\x1b[90m";
static RESET: &str = "\x1b[0m";

/// Severity of a log message, ordered Error < Info < Debug.
///
/// The ordering mirrors the settings file encoding (0, 1, 2); coloring is a
/// direct per-level mapping, not an ordering comparison.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum LogLevel {
    Error,
    Info,
    Debug,
}

struct LogLevelVisitor;

impl Visitor<'_> for LogLevelVisitor {
    type Value = LogLevel;

    fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
        formatter.write_str("a log level name (Error, Info, Debug) or index (0, 1, 2)")
    }

    fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        match v {
            "Error" => Ok(LogLevel::Error),
            "Info" => Ok(LogLevel::Info),
            "Debug" => Ok(LogLevel::Debug),
            _ => Err(E::unknown_variant(v, &["Error", "Info", "Debug"])),
        }
    }

    fn visit_u64<E>(self, v: u64) -> std::result::Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        match v {
            0 => Ok(LogLevel::Error),
            1 => Ok(LogLevel::Info),
            2 => Ok(LogLevel::Debug),
            _ => Err(E::invalid_value(Unexpected::Unsigned(v), &self)),
        }
    }

    fn visit_i64<E>(self, v: i64) -> std::result::Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        match u64::try_from(v) {
            Ok(v) => self.visit_u64(v),
            Err(_) => Err(E::invalid_value(Unexpected::Signed(v), &self)),
        }
    }
}

// The settings file historically accepted both the level name and its index.
impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(LogLevelVisitor)
    }
}

impl LogLevel {
    fn color(&self) -> Option<&'static str> {
        match self {
            LogLevel::Error => Some(RED),
            LogLevel::Info => None,
            LogLevel::Debug => Some(DIM),
        }
    }
}

/// Appends timestamped, leveled lines to a session log file and mirrors them
/// to stdout.
///
/// The file name is derived once from the startup timestamp; every message of
/// the run appends to the same file. No rotation, no size cap.
#[derive(Debug)]
pub struct Logger {
    file: File,
    path: PathBuf,
}

impl Logger {
    /// Creates `log_dir` if missing and opens this run's session log file
    /// (`log_dir/log_{yyyyMMdd_HHmmss}.txt`) for append.
    pub fn create<P: AsRef<Path>>(log_dir: P) -> Result<Logger> {
        let log_dir = log_dir.as_ref();
        std::fs::create_dir_all(log_dir)?;
        let path = log_dir.join(format!(
            "log_{}.txt",
            Local::now().format(SESSION_TIME_FORMAT)
        ));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Logger { file, path })
    }

    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    /// Writes `[{level}] {timestamp} - {message}` to stdout (colored) and to
    /// the session file (uncolored). Recorded at every level regardless of
    /// the configured log level.
    pub fn log(&mut self, level: LogLevel, message: &str) {
        let line = format!(
            "[{level}] {} - {message}",
            Local::now().format(LINE_TIME_FORMAT)
        );

        match level.color() {
            Some(color) => println!("{color}{line}{RESET}"),
            None => println!("{line}"),
        }

        if let Err(e) = writeln!(self.file, "{line}") {
            tracing::error!("Failed to append to session log {:?}: {e}", self.path);
        }
    }
}
