//! Random source port
//!
//! Covers both flavors of randomness the id generator needs: strong UUIDs
//! for the primary strategy and plain uniform draws for the composite
//! fallback.

use uuid::Uuid;

/// Source of randomness for identifier generation.
pub trait RandomSource: Send + Sync {
    /// Draw a version-4 UUID from a cryptographically strong generator.
    ///
    /// `None` means no strong generator is available. Implementations that
    /// only discover unavailability by failing must swallow the failure and
    /// return `None`; callers treat failure and absence identically.
    fn strong_uuid(&self) -> Option<Uuid>;

    /// Uniform draw in `[0, bound)`. A zero bound yields zero.
    fn uniform_below(&self, bound: u64) -> u64;
}
