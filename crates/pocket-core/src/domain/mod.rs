//! Domain Layer
//!
//! Records, form validation and pure calculations.
//! Nothing here touches storage.

mod expense;
mod record;
mod todo;
mod vowels;

pub use expense::{
    format_amount, parse_amount, parse_date, total_unpaid, ExpenseDraft, ExpenseItem, ExpensePatch,
    ExpenseStatus,
};
pub use record::{max_id, Record};
pub use todo::{TodoItem, TodoPatch};
pub use vowels::count_vowels;

use crate::error::{StoreError, StoreResult};

/// Trim a required text field, rejecting it when nothing is left.
pub(crate) fn required(field: &'static str, raw: &str) -> StoreResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(StoreError::MissingField(field));
    }
    Ok(trimmed.to_string())
}
