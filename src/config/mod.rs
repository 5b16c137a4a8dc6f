//! Configuration module for the expense tracker
//!
//! Resolves where the expense data file lives. The location is decided once
//! at startup and handed to every command.

pub mod paths;

pub use paths::{default_data_file, TrackerPaths, DATA_FILE_ENV, DATA_FILE_NAME};
