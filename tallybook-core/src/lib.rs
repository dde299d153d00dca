//! Tallybook Core - balance records with lenient JSON round-tripping
//!
//! This crate implements a small ledger-record utility following hexagonal
//! architecture:
//!
//! - **domain**: the record entities (Balance, BalanceDraft)
//! - **ports**: trait definitions for injected capabilities (Clock, RandomSource, DiagnosticSink)
//! - **services**: id generation, record construction, the wire codec
//! - **adapters**: concrete capabilities (system-backed and deterministic)
//!
//! Every operation is total: malformed input degrades to defaults or empty
//! results, never to an error. Swallowed failures can be observed through an
//! optional diagnostic sink.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

use std::sync::Arc;

use adapters::{SystemClock, SystemRandom};

// Re-export commonly used types at crate root
pub use domain::{Balance, BalanceDraft, DEFAULT_ACCOUNT};
pub use ports::{Clock, Diagnostic, DiagnosticSink, RandomSource};
pub use services::{CodecService, IdService, IdStrategy, RecordService};

/// Main context for tallybook operations
///
/// This is the primary entry point. It wires the capabilities into the
/// services once; the id strategy is probed during that wiring and never
/// again. Services take `&self` and share their capabilities through
/// `Arc`s, so a context can be used from any number of threads.
pub struct TallybookContext {
    pub ids: Arc<IdService>,
    pub records: RecordService,
    pub codec: CodecService,
}

impl TallybookContext {
    /// Context over the system clock and OS-backed randomness
    pub fn new() -> Self {
        Self::with_capabilities(Arc::new(SystemClock::new()), Arc::new(SystemRandom::new()))
    }

    /// Context over explicit capabilities
    pub fn with_capabilities(clock: Arc<dyn Clock>, random: Arc<dyn RandomSource>) -> Self {
        Self::with_diagnostics(clock, random, None)
    }

    /// Context over explicit capabilities, reporting swallowed failures to
    /// `diagnostics` when one is given
    pub fn with_diagnostics(
        clock: Arc<dyn Clock>,
        random: Arc<dyn RandomSource>,
        diagnostics: Option<Arc<dyn DiagnosticSink>>,
    ) -> Self {
        let ids = Arc::new(IdService::with_diagnostics(
            Arc::clone(&clock),
            random,
            diagnostics.clone(),
        ));
        let records = RecordService::new(Arc::clone(&ids), Arc::clone(&clock));
        let codec = CodecService::with_diagnostics(Arc::clone(&ids), clock, diagnostics);

        Self {
            ids,
            records,
            codec,
        }
    }
}

impl Default for TallybookContext {
    fn default() -> Self {
        Self::new()
    }
}
