//! Store Errors
//!
//! One error type for every store operation. Integrity faults are fatal,
//! input rejections are not.

use thiserror::Error;

/// Common result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// The persisted id counter fell behind the list it allocates for.
    #[error(
        "stored counter `{key}` is {counter} but the list holds {len} records (largest id {max_id}); \
         the saved data must be repaired by hand"
    )]
    Consistency {
        key: String,
        counter: u32,
        len: usize,
        max_id: u32,
    },

    /// A persisted value could not be decoded.
    #[error("stored value under `{key}` is malformed: {reason}")]
    Malformed { key: String, reason: String },

    /// A required field was empty after trimming.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// A typed field did not parse.
    #[error("{field} has an invalid value: `{value}`")]
    InvalidField { field: &'static str, value: String },

    #[error("no record with id {0}")]
    NotFound(u32),

    /// A record was added under an id the list already holds.
    #[error("a record with id {0} already exists")]
    DuplicateId(u32),

    /// The storage backend refused a read or write.
    #[error("storage unavailable: {0}")]
    Storage(String),
}

impl StoreError {
    /// Integrity faults need manual repair; everything else is a rejected action.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            StoreError::Consistency { .. }
                | StoreError::Malformed { .. }
                | StoreError::DuplicateId(_)
                | StoreError::Storage(_)
        )
    }

    pub(crate) fn malformed(key: &str, reason: impl ToString) -> Self {
        StoreError::Malformed {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }
}
