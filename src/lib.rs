//! Expense Tracker - personal expense tracking from the command line
//!
//! Expenses are kept as a single JSON array in a local file. Every command
//! loads the whole file, does its work, and (for `add`) writes the whole
//! file back.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data file location
//! - `error`: Custom error types
//! - `models`: The expense record and its decimal amount
//! - `storage`: JSON file storage layer
//! - `services`: Business logic for add/list/total/export
//! - `export`: CSV writer
//! - `display`: Output line formatting
//! - `cli`: clap subcommands and their handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::TrackerPaths;
//! use expense_tracker::services::ExpenseService;
//! use expense_tracker::storage::Storage;
//!
//! let storage = Storage::new(TrackerPaths::resolve(None)?);
//! let total = ExpenseService::new(&storage).total()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
