//! System-backed capability adapters

use chrono::{DateTime, Utc};
use rand::Rng;
use uuid::Uuid;

use crate::ports::{Clock, RandomSource};

/// Clock backed by the operating system
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Randomness backed by the OS entropy pool
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemRandom {
    fn strong_uuid(&self) -> Option<Uuid> {
        Some(Uuid::new_v4())
    }

    fn uniform_below(&self, bound: u64) -> u64 {
        if bound == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..bound)
    }
}
