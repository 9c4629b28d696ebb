use std::collections::HashMap;
use std::sync::Mutex;

use crate::core::{AppError, PeriodKey, Result};

/// Hands out invoice sequence numbers per period.
///
/// Implementations must make read-increment-return a single atomic step:
/// two concurrent calls for the same period never get the same number.
/// Numbers start at 1; gaps are allowed, repeats are not.
pub trait SequenceStore: Send + Sync {
    /// Next number for `period`; failures are `AppError::SequenceUnavailable`
    fn next_sequence(&self, period: &PeriodKey) -> Result<u64>;
}

/// Process-local sequence store; one counter per period behind a mutex
#[derive(Debug, Default)]
pub struct InMemorySequenceStore {
    counters: Mutex<HashMap<PeriodKey, u64>>,
}

impl InMemorySequenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a period as if `last` numbers had already been issued
    pub fn with_last(self, period: PeriodKey, last: u64) -> Self {
        if let Ok(mut counters) = self.counters.lock() {
            counters.insert(period, last);
        }
        self
    }

    /// Last number issued for `period`, if any
    pub fn last_issued(&self, period: &PeriodKey) -> Result<Option<u64>> {
        let counters = self
            .counters
            .lock()
            .map_err(|_| AppError::sequence_unavailable("sequence counter lock poisoned"))?;

        Ok(counters.get(period).copied())
    }
}

impl SequenceStore for InMemorySequenceStore {
    fn next_sequence(&self, period: &PeriodKey) -> Result<u64> {
        let mut counters = self
            .counters
            .lock()
            .map_err(|_| AppError::sequence_unavailable("sequence counter lock poisoned"))?;

        let counter = counters.entry(period.clone()).or_insert(0);
        *counter = counter.checked_add(1).ok_or_else(|| {
            AppError::sequence_unavailable(format!("sequence for period {} exhausted", period))
        })?;

        Ok(*counter)
    }
}
