//! Adapter implementations
//!
//! Adapters implement the port traits with concrete sources:
//! - System clock and OS-backed randomness for production use
//! - Fixed clock, scripted randomness, and an in-memory diagnostic sink
//!   for reproducible tests

pub mod deterministic;
pub mod system;

pub use deterministic::{FixedClock, MemorySink, ScriptedRandom};
pub use system::{SystemClock, SystemRandom};
