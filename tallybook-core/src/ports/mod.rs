//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. The core services
//! depend only on these traits, not on concrete implementations.

mod clock;
mod diagnostics;
mod random;

pub use clock::Clock;
pub use diagnostics::{Diagnostic, DiagnosticSink};
pub use random::RandomSource;
