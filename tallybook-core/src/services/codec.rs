//! Codec service - JSON encoding and lenient decoding of record lists

use std::sync::Arc;

use serde_json::Value;

use crate::domain::{Balance, DEFAULT_ACCOUNT};
use crate::ports::{Clock, Diagnostic, DiagnosticSink};
use crate::services::IdService;

/// Codec service for the record-list wire format
pub struct CodecService {
    ids: Arc<IdService>,
    clock: Arc<dyn Clock>,
    diagnostics: Option<Arc<dyn DiagnosticSink>>,
}

impl CodecService {
    pub fn new(ids: Arc<IdService>, clock: Arc<dyn Clock>) -> Self {
        Self::with_diagnostics(ids, clock, None)
    }

    pub fn with_diagnostics(
        ids: Arc<IdService>,
        clock: Arc<dyn Clock>,
        diagnostics: Option<Arc<dyn DiagnosticSink>>,
    ) -> Self {
        Self {
            ids,
            clock,
            diagnostics,
        }
    }

    /// Encode records as a JSON array, order preserved.
    ///
    /// Absent notes are omitted rather than encoded as null; a non-finite
    /// amount encodes as null. Total: if the encoder ever refuses the list,
    /// the failure is reported and `"[]"` comes back.
    pub fn serialize(&self, records: &[Balance]) -> String {
        match serde_json::to_string(records) {
            Ok(json) => json,
            Err(err) => {
                self.report(Diagnostic::EncodeFailed {
                    reason: err.to_string(),
                });
                "[]".to_string()
            }
        }
    }

    /// Decode a JSON payload into records. Total: never fails.
    ///
    /// Absent input, empty input, undecodable text, and any top-level value
    /// other than an array all yield an empty list. Array elements are
    /// revived independently; a bad element degrades that one record, never
    /// the whole parse.
    pub fn parse(&self, payload: Option<&str>) -> Vec<Balance> {
        let text = match payload {
            Some(text) if !text.is_empty() => text,
            _ => return Vec::new(),
        };

        let decoded: Value = match serde_json::from_str(text) {
            Ok(value) => value,
            Err(err) => {
                self.report(Diagnostic::DecodeFailed {
                    reason: err.to_string(),
                });
                return Vec::new();
            }
        };

        let items = match decoded.as_array() {
            Some(items) => items,
            None => {
                self.report(Diagnostic::WrongShape {
                    found: json_kind(&decoded),
                });
                return Vec::new();
            }
        };

        items.iter().map(|item| self.revive(item)).collect()
    }

    /// Rebuild one record from an untyped element.
    ///
    /// Present fields are coerced to the target type; absent (or null)
    /// fields take the constructor's defaults. `notes` differs: only a
    /// missing key stays `None`, a null note is stringified like any other
    /// present value. Elements without keys at all (scalars, arrays, null)
    /// default every field.
    fn revive(&self, item: &Value) -> Balance {
        Balance {
            id: match provided(item, "id") {
                Some(value) => coerce_string(value),
                None => self.ids.generate(),
            },
            account: match provided(item, "account") {
                Some(value) => coerce_string(value),
                None => DEFAULT_ACCOUNT.to_string(),
            },
            amount: match provided(item, "amount") {
                Some(value) => coerce_number(value),
                None => 0.0,
            },
            datetime: match provided(item, "datetime") {
                Some(value) => coerce_string(value),
                None => self.clock.now_iso(),
            },
            notes: item.get("notes").map(coerce_string),
        }
    }

    fn report(&self, diagnostic: Diagnostic) {
        if let Some(sink) = &self.diagnostics {
            sink.emit(&diagnostic);
        }
    }
}

// ==== Coercion helpers ====

/// Field lookup with null treated as absence (the coalescing rule).
/// Non-object `item`s have no fields, so everything reads as absent.
fn provided<'a>(item: &'a Value, key: &str) -> Option<&'a Value> {
    match item.get(key) {
        Some(Value::Null) | None => None,
        present => present,
    }
}

/// Total string coercion: strings pass through, everything else renders as
/// its JSON text (`null`, `true`, `12.5`, container literals).
fn coerce_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Total numeric coercion. Numbers pass through, booleans become 1/0,
/// strings are trimmed and parsed (empty parses to 0, unparseable to NaN),
/// containers are NaN. No NaN guard here: a present-but-unconvertible
/// amount stays NaN, unlike the constructor's defaulting.
fn coerce_number(value: &Value) -> f64 {
    match value {
        Value::Number(number) => number.as_f64().unwrap_or(f64::NAN),
        Value::Bool(true) => 1.0,
        Value::Bool(false) => 0.0,
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(f64::NAN)
            }
        }
        Value::Null => 0.0,
        Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}

/// JSON type name for shape diagnostics
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
