//! Storage layer for the expense tracker
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. There is no locking: the last writer wins.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json_array, write_json_atomic};

use crate::config::paths::TrackerPaths;

/// Main storage coordinator
pub struct Storage {
    paths: TrackerPaths,
    pub expenses: ExpenseRepository,
}

impl Storage {
    /// Create a new Storage instance
    ///
    /// Nothing is touched on disk until a repository is loaded or saved.
    pub fn new(paths: TrackerPaths) -> Self {
        Self {
            expenses: ExpenseRepository::new(paths.data_file().to_path_buf()),
            paths,
        }
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }
}
