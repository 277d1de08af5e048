use crate::backup::logger::LogLevel;
use crate::backup::result_error::error::Error;
use crate::backup::result_error::result::Result;
use crate::backup::validate::{validate_non_empty_path, validate_source_directories};
use bon::Builder;
use getset::Getters;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use validator::Validate;

/// Backup configuration loaded once at startup from a JSON settings file.
///
/// Immutable after loading; the entry point owns it and hands out references.
/// No field is defaulted: a settings file missing `target_directory` or
/// `source_directories` is malformed.
#[derive(Clone, Debug, Serialize, Deserialize, Validate, Builder, Getters)]
#[serde(deny_unknown_fields)]
#[getset(get = "pub")]
pub struct Settings {
    /// Directories to back up, processed in order.
    #[validate(custom(function = validate_source_directories))]
    #[builder(into)]
    source_directories: Vec<PathBuf>,
    /// Root under which staging folders and archives are created.
    #[validate(custom(function = validate_non_empty_path))]
    #[builder(into)]
    target_directory: PathBuf,
    /// Accepted from the settings file but not used to filter log output;
    /// every message is recorded regardless.
    log_level: LogLevel,
}

impl Settings {
    /// Reads and validates the settings file.
    ///
    /// Fails with [`Error::ConfigNotFound`] when the file does not exist and
    /// [`Error::ConfigMalformed`] when it cannot be parsed into the expected
    /// structure. No side effects beyond reading the file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Settings> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }

        let file = File::open(path)?;
        let settings: Settings =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| {
                Error::ConfigMalformed {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
        settings.validate()?;

        Ok(settings)
    }
}
