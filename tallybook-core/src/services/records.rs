//! Record service - building full records from partial input

use std::sync::Arc;

use crate::domain::{Balance, BalanceDraft, DEFAULT_ACCOUNT};
use crate::ports::Clock;
use crate::services::IdService;

/// Record service for turning drafts into complete records
pub struct RecordService {
    ids: Arc<IdService>,
    clock: Arc<dyn Clock>,
}

impl RecordService {
    pub fn new(ids: Arc<IdService>, clock: Arc<dyn Clock>) -> Self {
        Self { ids, clock }
    }

    /// Build a complete record from a draft.
    ///
    /// Absent fields are filled: generated id, `"Unnamed"` account, zero
    /// amount, the clock's current instant. A NaN amount counts as absent
    /// and becomes zero. Notes pass through untouched, including absence.
    /// Never fails; invalid input is normalized, not rejected.
    pub fn create(&self, draft: BalanceDraft) -> Balance {
        let amount = match draft.amount {
            Some(value) if !value.is_nan() => value,
            _ => 0.0,
        };

        Balance {
            id: draft.id.unwrap_or_else(|| self.ids.generate()),
            account: draft.account.unwrap_or_else(|| DEFAULT_ACCOUNT.to_string()),
            amount,
            datetime: draft.datetime.unwrap_or_else(|| self.clock.now_iso()),
            notes: draft.notes,
        }
    }
}
