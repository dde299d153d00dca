//! Identifier service - unique record id generation

use std::sync::Arc;

use crate::ports::{Clock, Diagnostic, DiagnosticSink, RandomSource};

/// Fixed prefix of composite identifiers
const COMPOSITE_PREFIX: &str = "b";

/// Exclusive upper bound of the composite salt draw
const COMPOSITE_SALT_BOUND: u64 = 1_000_000_000;

/// How identifiers are produced.
///
/// Selected once when the service is built, by probing the random source for
/// a strong UUID. A failing probe is not distinguished from an absent
/// facility; either picks the composite fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdStrategy {
    /// Version-4 UUIDs in hyphenated form
    StrongRandom,
    /// `b_<millis base36>_<salt base36>`
    FallbackComposite,
}

/// Identifier service for practically-unique record ids
pub struct IdService {
    clock: Arc<dyn Clock>,
    random: Arc<dyn RandomSource>,
    diagnostics: Option<Arc<dyn DiagnosticSink>>,
    strategy: IdStrategy,
}

impl IdService {
    pub fn new(clock: Arc<dyn Clock>, random: Arc<dyn RandomSource>) -> Self {
        Self::with_diagnostics(clock, random, None)
    }

    pub fn with_diagnostics(
        clock: Arc<dyn Clock>,
        random: Arc<dyn RandomSource>,
        diagnostics: Option<Arc<dyn DiagnosticSink>>,
    ) -> Self {
        // Single capability probe; never re-checked per call
        let strategy = if random.strong_uuid().is_some() {
            IdStrategy::StrongRandom
        } else {
            IdStrategy::FallbackComposite
        };

        let service = Self {
            clock,
            random,
            diagnostics,
            strategy,
        };
        if service.strategy == IdStrategy::FallbackComposite {
            service.report(Diagnostic::StrongIdsUnavailable);
        }
        service
    }

    /// Strategy selected at construction
    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    /// Generate an identifier.
    ///
    /// Never fails: under [`IdStrategy::StrongRandom`], a source that
    /// declines mid-flight makes the call fall through to the composite
    /// form instead.
    pub fn generate(&self) -> String {
        if self.strategy == IdStrategy::StrongRandom {
            if let Some(uuid) = self.random.strong_uuid() {
                return uuid.to_string();
            }
            self.report(Diagnostic::StrongIdsUnavailable);
        }
        self.composite()
    }

    /// `b_<millis base36>_<salt base36>`, salt drawn below 1e9
    fn composite(&self) -> String {
        let millis = self.clock.now_utc().timestamp_millis().max(0) as u64;
        let salt = self.random.uniform_below(COMPOSITE_SALT_BOUND);
        format!(
            "{}_{}_{}",
            COMPOSITE_PREFIX,
            to_base36(millis),
            to_base36(salt)
        )
    }

    fn report(&self, diagnostic: Diagnostic) {
        if let Some(sink) = &self.diagnostics {
            sink.emit(&diagnostic);
        }
    }
}

/// Lowercase base-36 rendering of `value`
fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }

    // u64::MAX takes 13 base-36 digits
    let mut buf = [0u8; 13];
    let mut pos = buf.len();
    while value > 0 {
        pos -= 1;
        buf[pos] = DIGITS[(value % 36) as usize];
        value /= 36;
    }
    String::from_utf8_lossy(&buf[pos..]).into_owned()
}
