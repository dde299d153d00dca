//! Clock port
//!
//! Services read the current time through this trait instead of calling
//! `Utc::now()` directly, so tests can pin the instant.

use chrono::{DateTime, SecondsFormat, Utc};

/// Source of the current instant.
pub trait Clock: Send + Sync {
    /// Current instant in UTC
    fn now_utc(&self) -> DateTime<Utc>;

    /// Current instant rendered as ISO 8601 with millisecond precision and a
    /// `Z` suffix, e.g. `2024-01-15T10:30:00.000Z`. This is the form used
    /// for defaulted `datetime` fields.
    fn now_iso(&self) -> String {
        self.now_utc().to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
