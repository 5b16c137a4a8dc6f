//! Expense model
//!
//! A single expense entry as stored in the data file. Optional fields may be
//! missing on records written by older versions or edited by hand, and any
//! fields this tool does not know about are carried through untouched.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::amount::Amount;

/// One recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Creation instant as an ISO-8601 UTC string; absent on legacy records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    /// Amount spent
    pub amount: Amount,

    /// Free-form category label; missing or `null` reads as empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,

    /// Optional note; `None` when missing or `null` in the file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Fields not understood by this version, preserved on save
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Expense {
    /// Create a new expense stamped with the current time
    pub fn new(amount: Amount, category: impl Into<String>, note: impl Into<String>) -> Self {
        Self::with_time(amount, category, note, Utc::now())
    }

    /// Create a new expense stamped with the given instant
    pub fn with_time(
        amount: Amount,
        category: impl Into<String>,
        note: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            time: Some(format_timestamp(at)),
            amount,
            category: category.into(),
            note: Some(note.into()),
            extra: Map::new(),
        }
    }

    /// The note, or `None` if it is absent or empty
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref().filter(|note| !note.is_empty())
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Render an instant the way it is stored: RFC 3339, microseconds, `+00:00`
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, false)
}
