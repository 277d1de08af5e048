//! Validation functions for configuration values.
//!
//! Provides custom validation functions for the paths read from the
//! settings file.

use std::path::{Path, PathBuf};
use validator::ValidationError;

pub fn validate_non_empty_path<P: AsRef<Path>>(path: P) -> Result<(), ValidationError> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(ValidationError::new("EmptyPath").with_message("path must not be empty".into()));
    }

    Ok(())
}

pub fn validate_source_directories(dirs: &Vec<PathBuf>) -> Result<(), ValidationError> {
    for dir in dirs {
        validate_non_empty_path(dir)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_path() {
        assert!(validate_non_empty_path("some/dir").is_ok());
        assert!(validate_non_empty_path("").is_err());
    }

    #[test]
    fn test_validate_source_directories() {
        let dirs = vec![PathBuf::from("a"), PathBuf::from("b")];
        assert!(validate_source_directories(&dirs).is_ok());

        let dirs = vec![PathBuf::from("a"), PathBuf::from("")];
        assert!(validate_source_directories(&dirs).is_err());

        let empty: Vec<PathBuf> = vec![];
        assert!(validate_source_directories(&empty).is_ok());
    }
}
