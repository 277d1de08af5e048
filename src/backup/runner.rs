//! Per-directory backup execution and the run loop.
//!
//! Each configured source directory is one independent backup attempt:
//! validate the source, stage its top-level files under the target root,
//! archive the staging folder, report the outcome. A failed attempt never
//! stops the remaining ones, and the only state shared between attempts is
//! the append-only session log.

use crate::backup::archive::archive_directory;
use crate::backup::logger::{LogLevel, Logger};
use crate::backup::result_error::error::Error;
use crate::backup::result_error::result::Result;
use crate::backup::settings::Settings;
use chrono::Local;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Staging folder timestamp, seconds resolution, local time. Two backups of
/// directories with the same base name started within the same second would
/// collide; accepted limitation.
static STAGING_TIME_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Result of one backup attempt.
#[derive(Debug)]
pub enum BackupOutcome {
    /// The source was staged and archived; the staging folder is gone and
    /// only the archive remains.
    Archived {
        source: PathBuf,
        staging: PathBuf,
        archive: PathBuf,
        files_copied: usize,
    },
    /// The source directory does not exist; nothing was created.
    MissingSource { source: PathBuf },
    /// A copy or archive step failed; the run continues with the next source.
    Failed { source: PathBuf, error: Error },
}

/// Runs one backup attempt for `source_dir`.
///
/// Emits a Debug log line per copied file; all other logging is the caller's
/// responsibility, driven by the returned outcome.
pub fn backup_one(source_dir: &Path, target_root: &Path, logger: &mut Logger) -> BackupOutcome {
    if !source_dir.is_dir() {
        return BackupOutcome::MissingSource {
            source: source_dir.to_path_buf(),
        };
    }

    match stage_and_archive(source_dir, target_root, logger) {
        Ok((staging, archive, files_copied)) => BackupOutcome::Archived {
            source: source_dir.to_path_buf(),
            staging,
            archive,
            files_copied,
        },
        Err(error) => BackupOutcome::Failed {
            source: source_dir.to_path_buf(),
            error,
        },
    }
}

fn stage_and_archive(
    source_dir: &Path,
    target_root: &Path,
    logger: &mut Logger,
) -> Result<(PathBuf, PathBuf, usize)> {
    if !target_root.exists() {
        std::fs::create_dir_all(target_root)?;
    }

    let base_name = match source_dir.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => {
            return Err(std::io::Error::other(format!(
                "cannot derive a backup name from {source_dir:?}"
            ))
            .into())
        }
    };

    let timestamp = Local::now().format(STAGING_TIME_FORMAT);
    let staging = target_root.join(format!("{base_name}_Backup_{timestamp}"));
    std::fs::create_dir(&staging)?;

    let mut files_copied = 0;
    for entry in std::fs::read_dir(source_dir)? {
        let entry = entry?;
        // Top-level files only; subdirectories are not backed up.
        if !entry.file_type()?.is_file() {
            continue;
        }

        let file_name = entry.file_name();
        let staged_file = staging.join(&file_name);
        if staged_file.exists() {
            return Err(std::io::Error::new(
                ErrorKind::AlreadyExists,
                format!("{staged_file:?} already exists"),
            )
            .into());
        }
        std::fs::copy(entry.path(), &staged_file)?;
        files_copied += 1;

        logger.log(
            LogLevel::Debug,
            &format!("Copied: {}", file_name.to_string_lossy()),
        );
    }

    let archive = archive_directory(&staging)?;

    Ok((staging, archive, files_copied))
}

/// Processes every configured source directory, strictly in order, one
/// attempt each, and logs each outcome. Failures are logged and abandoned;
/// nothing propagates between attempts.
pub fn run_all(settings: &Settings, logger: &mut Logger) -> Vec<BackupOutcome> {
    settings
        .source_directories()
        .iter()
        .map(|source_dir| {
            let outcome = backup_one(source_dir, settings.target_directory(), logger);
            match &outcome {
                BackupOutcome::MissingSource { source } => logger.log(
                    LogLevel::Error,
                    &format!("Source directory not found: {}", source.display()),
                ),
                BackupOutcome::Failed { error, .. } => {
                    logger.log(LogLevel::Error, &format!("Error copying files: {error}"))
                }
                BackupOutcome::Archived {
                    source,
                    staging,
                    archive,
                    ..
                } => logger.log(
                    LogLevel::Info,
                    &format!(
                        "Files copied from {} to {} and zipped to {}",
                        source.display(),
                        staging.display(),
                        archive.display()
                    ),
                ),
            }
            outcome
        })
        .collect()
}
