//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::error::{MalformedReason, TrackerError};

/// Read a JSON array from a file, returning an empty list if the file doesn't exist
///
/// Distinguishes between a file that cannot be read, one that is not JSON, and
/// one whose top-level value is not an array.
pub fn read_json_array<P: AsRef<Path>>(path: P) -> Result<Vec<Value>, TrackerError> {
    let path = path.as_ref();

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "data file missing, starting empty");
            return Ok(Vec::new());
        }
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "failed to read data file");
            return Err(TrackerError::unreadable(path));
        }
    };

    let value: Value = serde_json::from_slice(&bytes).map_err(|e| {
        tracing::debug!(path = %path.display(), error = %e, "failed to parse data file");
        TrackerError::malformed(path, MalformedReason::InvalidJson)
    })?;

    match value {
        Value::Array(items) => Ok(items),
        _ => Err(TrackerError::malformed(path, MalformedReason::NotAList)),
    }
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// The output is pretty-printed. The file is either completely replaced or
/// left as it was; every failure is reported as unwritable.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), TrackerError>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let temp_path = temp_path_for(path);

    write_then_rename(path, &temp_path, data).map_err(|e| {
        tracing::debug!(path = %path.display(), error = %e, "failed to write data file");
        let _ = fs::remove_file(&temp_path);
        TrackerError::unwritable(path)
    })
}

fn write_then_rename<T>(path: &Path, temp_path: &Path, data: &T) -> io::Result<()>
where
    T: Serialize + ?Sized,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(temp_path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;

    fs::rename(temp_path, path)
}

/// Sibling temp file used during an atomic write ("expenses.json.tmp")
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("data"));
    name.push(".tmp");
    path.with_file_name(name)
}
