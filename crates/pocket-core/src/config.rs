//! Storage Key Configuration
//!
//! Each widget persists under its own pair of keys.

/// Where a list and its id counter live in key-value storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageKeys {
    /// JSON array of records
    pub list: &'static str,
    /// Decimal text of the last allocated id
    pub counter: &'static str,
}

impl StorageKeys {
    pub const TODO: StorageKeys = StorageKeys {
        list: "todoList",
        counter: "maxId",
    };

    pub const EXPENSE: StorageKeys = StorageKeys {
        list: "expenseList",
        counter: "maxExpenseId",
    };
}
