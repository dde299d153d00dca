//! Diagnostic sink port
//!
//! Parsing and id generation swallow failures to keep their contracts total:
//! malformed payloads degrade to empty results, a missing UUID facility
//! degrades to composite ids. A sink, when wired, receives a description of
//! each swallowed failure at the point it is swallowed. Return values are
//! identical with or without one.

use thiserror::Error;

/// A failure that was recovered from rather than raised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// Payload rejected by the JSON decoder
    #[error("payload is not valid JSON: {reason}")]
    DecodeFailed { reason: String },

    /// Payload decoded cleanly but the top-level value is not an array
    #[error("payload decoded to {found}, expected an array")]
    WrongShape { found: &'static str },

    /// Record list refused by the JSON encoder
    #[error("record list failed to encode: {reason}")]
    EncodeFailed { reason: String },

    /// Strong UUID facility declined; composite ids are in use
    #[error("strong id source unavailable, using composite ids")]
    StrongIdsUnavailable,
}

/// Receiver for swallowed-failure reports.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, diagnostic: &Diagnostic);
}
