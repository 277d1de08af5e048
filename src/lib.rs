//! # dirstash
//!
//! A configuration-driven directory backup tool: copy, zip, log.
//!
//! ## Features
//!
//! - **Multiple Sources**: Backs up the top-level files of each configured directory
//! - **Timestamped Archives**: One `{name}_Backup_{yyyyMMdd_HHmmss}.zip` per source per run
//! - **Session Logging**: Every run appends to a single timestamped log file, mirrored to the console with level colors
//! - **Isolated Failures**: A missing or unreadable source never stops the remaining backups
//!
//! ## Quick Start
//!
//! ```no_run
//! use dirstash::backup::logger::Logger;
//! use dirstash::backup::runner::run_all;
//! use dirstash::backup::settings::Settings;
//!
//! // Load configuration from a JSON settings file
//! let settings = Settings::load("settings.json")?;
//!
//! // Back up every configured source directory
//! let mut logger = Logger::create("logs")?;
//! run_all(&settings, &mut logger);
//! # Ok::<(), dirstash::backup::result_error::error::Error>(())
//! ```

pub mod backup;
