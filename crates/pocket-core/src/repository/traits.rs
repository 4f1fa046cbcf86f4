//! Repository Layer - Storage Trait
//!
//! Flat string key-value storage, shaped after browser local storage.
//! Implementations: in-memory (tests, native) and the browser's own.

use crate::error::StoreResult;

pub trait KeyValueStorage {
    /// Value under `key`, `None` when never written
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;

    /// Overwrite the value under `key`
    fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;
}
