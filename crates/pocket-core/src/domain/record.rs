//! Record Trait
//!
//! The contract every stored list element fulfils.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A list element with a unique numeric id that round-trips through JSON
pub trait Record: Clone + Serialize + DeserializeOwned {
    fn id(&self) -> u32;
}

/// Largest id in a slice of records, 0 when empty
pub fn max_id<T: Record>(records: &[T]) -> u32 {
    records.iter().map(Record::id).max().unwrap_or(0)
}
