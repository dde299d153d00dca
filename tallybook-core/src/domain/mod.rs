//! Core domain entities
//!
//! Pure data structures - no I/O or external dependencies.

pub mod balance;

pub use balance::{Balance, BalanceDraft, DEFAULT_ACCOUNT};
