//! CSV serialization and atomic file replacement.

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use polars::prelude::{CsvWriter, DataFrame, SerWriter};

use crate::error::{OutputError, Result};

/// UTF-8 byte-order mark, written ahead of the CSV so spreadsheet tools
/// pick the right encoding for the Korean region names.
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Serialize a frame to CSV bytes with a leading UTF-8 byte-order mark.
pub fn frame_to_csv_bytes(frame: &mut DataFrame) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    buffer.extend_from_slice(UTF8_BOM);
    CsvWriter::new(&mut buffer)
        .include_header(true)
        .finish(frame)
        .map_err(|source| OutputError::Csv {
            message: source.to_string(),
        })?;
    Ok(buffer)
}

/// Write bytes to `path` through a sibling `.tmp` file and an atomic
/// rename.
///
/// The destination either keeps its previous content or receives the full
/// new content; a failed run never leaves a partial file behind.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    ensure_parent_dir(path)?;
    let file_name = path
        .file_name()
        .and_then(OsStr::to_str)
        .unwrap_or("output");
    let tmp_path = path.with_file_name(format!("{file_name}.tmp"));
    fs::write(&tmp_path, bytes).map_err(|source| OutputError::Io {
        path: tmp_path.clone(),
        source,
    })?;
    fs::rename(&tmp_path, path).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Create the parent directory of a file path if it does not exist.
pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}
