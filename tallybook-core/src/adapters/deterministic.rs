//! Deterministic capability adapters
//!
//! Fixed and scripted implementations of the capability ports. They ship in
//! the library proper so embedders can pin time and randomness in their own
//! tests; this crate's test suite uses them the same way.

use std::collections::VecDeque;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::ports::{Clock, Diagnostic, DiagnosticSink, RandomSource};

/// Clock pinned to a single instant
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.instant
    }
}

/// Random source that answers from prepared material.
///
/// The strong-UUID answer is fixed at construction; uniform draws are served
/// from a queue, taken modulo the requested bound, with `0` once the queue
/// runs dry.
pub struct ScriptedRandom {
    uuid: Option<Uuid>,
    draws: Mutex<VecDeque<u64>>,
}

impl ScriptedRandom {
    /// Source whose strong facility is available and always yields `uuid`
    pub fn with_uuid(uuid: Uuid, draws: impl IntoIterator<Item = u64>) -> Self {
        Self {
            uuid: Some(uuid),
            draws: Mutex::new(draws.into_iter().collect()),
        }
    }

    /// Source without a strong UUID facility
    pub fn without_uuid(draws: impl IntoIterator<Item = u64>) -> Self {
        Self {
            uuid: None,
            draws: Mutex::new(draws.into_iter().collect()),
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn strong_uuid(&self) -> Option<Uuid> {
        self.uuid
    }

    fn uniform_below(&self, bound: u64) -> u64 {
        let mut draws = self
            .draws
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let draw = draws.pop_front().unwrap_or(0);
        if bound == 0 {
            0
        } else {
            draw % bound
        }
    }
}

/// Sink that stores every diagnostic it receives
pub struct MemorySink {
    events: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of everything emitted so far, in emission order
    pub fn events(&self) -> Vec<Diagnostic> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, diagnostic: &Diagnostic) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(diagnostic.clone());
    }
}
