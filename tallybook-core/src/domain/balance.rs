//! Balance record domain model

use serde::{Deserialize, Serialize};

/// Account label substituted when input carries none.
pub const DEFAULT_ACCOUNT: &str = "Unnamed";

/// A single ledger entry: an amount against an account label at a point in time.
///
/// Records are plain values. An "update" is a new value; nothing here mutates
/// a stored record in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    /// Unique within whatever collection holds the record.
    pub id: String,
    pub account: String,
    /// Amount in a caller-defined unit (integer minor units or float major
    /// units both work; no scale is enforced here).
    pub amount: f64,
    /// ISO 8601 timestamp string, e.g. `2024-01-15T10:30:00.000Z`
    pub datetime: String,
    /// Optional free-text note; stays absent on the wire when `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Balance {
    /// Create a fully-specified record with no notes
    pub fn new(
        id: impl Into<String>,
        account: impl Into<String>,
        amount: f64,
        datetime: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            account: account.into(),
            amount,
            datetime: datetime.into(),
            notes: None,
        }
    }

    /// Attach a note
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Partially-populated input for [`RecordService::create`].
///
/// Every field is optional; missing fields are filled with defaults during
/// construction. Built from external sources (stored payloads, user input),
/// so nothing about it is trusted.
///
/// [`RecordService::create`]: crate::services::RecordService::create
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BalanceDraft {
    pub id: Option<String>,
    pub account: Option<String>,
    pub amount: Option<f64>,
    pub datetime: Option<String>,
    pub notes: Option<String>,
}
