//! Persisted Id Counter
//!
//! Next id = stored counter + 1, written back on every allocation.
//! A counter that lags the list it serves is an integrity fault.

use log::{debug, error};

use super::traits::KeyValueStorage;
use crate::domain::{max_id, Record};
use crate::error::{StoreError, StoreResult};

#[derive(Debug, Clone, Copy)]
pub struct IdCounter {
    key: &'static str,
}

impl IdCounter {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Last allocated id, 0 when nothing was ever allocated
    pub fn current<S: KeyValueStorage>(&self, storage: &S) -> StoreResult<u32> {
        match storage.get_item(self.key)? {
            None => Ok(0),
            Some(text) if text.trim().is_empty() => Ok(0),
            Some(text) => text
                .trim()
                .parse::<u32>()
                .map_err(|e| StoreError::malformed(self.key, format!("`{}`: {}", text, e))),
        }
    }

    /// Allocate the id for a record about to join `records`.
    pub fn allocate<S, T>(&self, storage: &S, records: &[T]) -> StoreResult<u32>
    where
        S: KeyValueStorage,
        T: Record,
    {
        let counter = self.current(storage)?;
        let len = records.len();
        let max_id = max_id(records);

        if (counter as usize) < len || counter < max_id {
            error!(
                "[ids] counter `{}` = {} lags list (len {}, max id {})",
                self.key, counter, len, max_id
            );
            return Err(StoreError::Consistency {
                key: self.key.to_string(),
                counter,
                len,
                max_id,
            });
        }

        let next = counter
            .checked_add(1)
            .ok_or_else(|| StoreError::malformed(self.key, "id space exhausted"))?;
        storage.set_item(self.key, &next.to_string())?;
        debug!("[ids] allocated {} from `{}`", next, self.key);
        Ok(next)
    }
}
