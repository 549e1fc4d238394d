//! Deposit records held against in-use tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One line of the deposit checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositedItem {
    /// Display name, e.g. `Mobile`.
    pub name: String,
    /// How many of the item were handed over.
    pub quantity: u32,
}

impl DepositedItem {
    /// Build a checklist line.
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// Items held against a token until it is returned.
///
/// `timestamp` travels as milliseconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositRecord {
    /// Photo of the depositor as a `data:image/...` URL.
    pub sangat_photo: String,
    /// Checklist lines in submission order.
    pub items: Vec<DepositedItem>,
    /// Free-text description of anything not on the checklist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub others: Option<String>,
    /// When the deposit was accepted.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}
