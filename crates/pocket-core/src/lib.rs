//! Pocket Widgets Core
//!
//! Layered the same way for every widget:
//! - domain: records, form validation and pure calculations
//! - repository: key-value storage backends, the list store and id allocation

pub mod config;
pub mod domain;
pub mod error;
pub mod repository;

pub use config::StorageKeys;
pub use domain::{
    count_vowels, format_amount, ExpenseDraft, ExpenseItem, ExpensePatch, ExpenseStatus, Record,
    TodoItem, TodoPatch,
};
pub use error::{StoreError, StoreResult};
pub use repository::{
    BrowserStorage, ExpenseLedger, KeyValueStorage, ListStore, MemoryStorage, TodoList,
};
