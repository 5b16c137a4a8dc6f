//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Why a store file was rejected as malformed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// The file is not valid JSON
    InvalidJson,
    /// The top-level value is not an array
    NotAList,
    /// An element of the array is not a usable expense record
    InvalidRecord,
    /// A record's amount is outside the representable decimal range
    AmountOutOfRange,
}

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Argument validation errors
    #[error("{0}")]
    Validation(String),

    /// Store file exists but its content is unusable
    #[error("{}", malformed_message(.reason, .path))]
    Malformed {
        path: PathBuf,
        reason: MalformedReason,
    },

    /// Store file exists but could not be read
    #[error("Could not read {}", .path.display())]
    Unreadable { path: PathBuf },

    /// Store or export destination could not be written
    #[error("Could not write {}", .path.display())]
    Unwritable { path: PathBuf },

    /// Sum of the recorded amounts leaves the decimal range
    #[error("Total is too large to represent")]
    TotalOverflow,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),
}

fn malformed_message(reason: &MalformedReason, path: &Path) -> String {
    match reason {
        MalformedReason::InvalidJson => format!("Invalid JSON in {}", path.display()),
        MalformedReason::NotAList => format!("Expected a list in {}", path.display()),
        MalformedReason::InvalidRecord => {
            format!("Invalid expense record in {}", path.display())
        }
        MalformedReason::AmountOutOfRange => {
            format!("Amount out of range in {}", path.display())
        }
    }
}

impl TrackerError {
    /// Create a "malformed" error for the given path
    pub fn malformed(path: impl Into<PathBuf>, reason: MalformedReason) -> Self {
        Self::Malformed {
            path: path.into(),
            reason,
        }
    }

    /// Create an "unreadable" error for the given path
    pub fn unreadable(path: impl Into<PathBuf>) -> Self {
        Self::Unreadable { path: path.into() }
    }

    /// Create an "unwritable" error for the given path
    pub fn unwritable(path: impl Into<PathBuf>) -> Self {
        Self::Unwritable { path: path.into() }
    }

    /// Check if this is a malformed-data error
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result type alias for expense tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
