//! ZIP archiving of staging directories.
//!
//! The archive is written next to the staging directory as `{staging}.zip`,
//! through a `.tmp` file that is renamed into place only on success. Once the
//! archive exists the staging directory is deleted, so a completed backup
//! leaves only the archive on disk.

use crate::backup::result_error::result::Result;
use crate::backup::result_error::WithMsg;
use std::fs::File;
use std::io::{BufWriter, IntoInnerError, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Compresses everything under `staging` (recursively) into `{staging}.zip`
/// and deletes `staging` on success. Returns the archive path.
pub fn archive_directory<P: AsRef<Path>>(staging: P) -> Result<PathBuf> {
    let staging = staging.as_ref();
    if !staging.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{staging:?} is not a directory"),
        )
        .into());
    }

    let archive_path = sibling_with_suffix(staging, ".zip");
    let tmp_path = sibling_with_suffix(&archive_path, ".tmp");

    match write_zip(staging, &tmp_path) {
        Ok(_) => {
            std::fs::rename(&tmp_path, &archive_path)?;
            std::fs::remove_dir_all(staging)?;
            Ok(archive_path)
        }
        Err(e) => {
            let _ = std::fs::remove_file(&tmp_path);
            Err(e).with_msg(format!("Archiving {staging:?} failed"))
        }
    }
}

fn write_zip(staging: &Path, out: &Path) -> Result<()> {
    let file = File::create_new(out)?;
    let mut writer = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut entry_count = 0;
    for entry in WalkDir::new(staging).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        let name = entry
            .path()
            .strip_prefix(staging)
            .map_err(|e| std::io::Error::other(e.to_string()))?
            .to_string_lossy()
            .replace(std::path::MAIN_SEPARATOR, "/");

        if entry.file_type().is_dir() {
            writer.add_directory(name, options)?;
        } else {
            writer.start_file(name, options)?;
            let mut source = File::open(entry.path())?;
            std::io::copy(&mut source, &mut writer)?;
            entry_count += 1;
        }
    }
    tracing::debug!("Wrote {} entries into {:?}", entry_count, out);

    writer
        .finish()?
        .into_inner()
        .map_err(IntoInnerError::into_error)?
        .flush()?;

    Ok(())
}

/// Appends `suffix` to the final path component, keeping the parent intact.
fn sibling_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}
