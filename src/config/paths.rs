//! Path management for the expense tracker
//!
//! ## Path Resolution Order
//!
//! 1. `--file` on the command line
//! 2. `EXPENSE_TRACKER_FILE` environment variable (if set and non-empty)
//! 3. `expenses.json` next to the installed executable
//!
//! Steps 1 and 2 are merged by clap before [`TrackerPaths::resolve`] sees
//! them.

use std::path::{Path, PathBuf};

use crate::error::TrackerError;

/// Environment variable that overrides the data file location
pub const DATA_FILE_ENV: &str = "EXPENSE_TRACKER_FILE";

/// File name of the data file in the installation root
pub const DATA_FILE_NAME: &str = "expenses.json";

/// Manages the paths used by a single invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerPaths {
    data_file: PathBuf,
}

impl TrackerPaths {
    /// Resolve the data file from an optional override
    ///
    /// # Errors
    ///
    /// Returns an error if no override is given and the location of the
    /// running executable cannot be determined.
    pub fn resolve(override_path: Option<PathBuf>) -> Result<Self, TrackerError> {
        let data_file = match override_path {
            Some(path) if !path.as_os_str().is_empty() => path,
            _ => default_data_file(&installation_root()?),
        };

        tracing::debug!(path = %data_file.display(), "resolved data file");
        Ok(Self { data_file })
    }

    /// Create TrackerPaths pointing at an explicit data file (useful for testing)
    pub fn with_data_file(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    /// Get the path to the expense data file
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}

/// The default data file for a given installation root
pub fn default_data_file(root: &Path) -> PathBuf {
    root.join(DATA_FILE_NAME)
}

/// Directory containing the running executable
fn installation_root() -> Result<PathBuf, TrackerError> {
    let exe = std::env::current_exe().map_err(|e| {
        TrackerError::Config(format!("Could not locate the running executable: {}", e))
    })?;

    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        TrackerError::Config(format!(
            "Executable has no parent directory: {}",
            exe.display()
        ))
    })
}
