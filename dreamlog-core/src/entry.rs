//! Journal entry data model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One published journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Storage-assigned identifier, immutable after creation.
    pub id: i64,
    pub title: String,
    /// Free-form text; blank-line runs separate paragraphs.
    pub body: String,
    /// Sole ordering key for listings (descending = newest first).
    pub date: NaiveDate,
}

/// Listing row for the admin panel: no body text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntrySummary {
    pub id: i64,
    pub title: String,
    pub date: NaiveDate,
}

/// Mutable fields of an entry, used for both insert and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDraft {
    pub title: String,
    pub body: String,
    pub date: NaiveDate,
}
