//! Expense Repository
//!
//! Expense-specific operations over a `ListStore<ExpenseItem, _>`.
//! Expenses are never deleted.

use chrono::NaiveDate;

use super::list_store::ListStore;
use super::traits::KeyValueStorage;
use crate::config::StorageKeys;
use crate::domain::{total_unpaid, ExpenseDraft, ExpenseItem, ExpensePatch};
use crate::error::StoreResult;

#[derive(Debug, Clone)]
pub struct ExpenseLedger<S> {
    store: ListStore<ExpenseItem, S>,
}

impl<S: KeyValueStorage> ExpenseLedger<S> {
    /// Open under the standard `expenseList` / `maxExpenseId` keys.
    pub fn open(storage: S) -> StoreResult<Self> {
        Self::open_with_keys(storage, StorageKeys::EXPENSE)
    }

    pub fn open_with_keys(storage: S, keys: StorageKeys) -> StoreResult<Self> {
        Ok(Self {
            store: ListStore::open(storage, keys)?,
        })
    }

    /// Record a new unpaid expense.
    pub fn add(&mut self, draft: ExpenseDraft) -> StoreResult<ExpenseItem> {
        self.store.insert_with(|id| draft.into_item(id)).cloned()
    }

    /// Commit a detail-view edit. `today` stamps a fresh payment.
    pub fn modify(&mut self, id: u32, patch: ExpensePatch, today: NaiveDate) -> StoreResult<ExpenseItem> {
        self.store
            .update(id, |expense| patch.apply(expense, today))
            .cloned()
    }

    pub fn get(&self, id: u32) -> Option<&ExpenseItem> {
        self.store.get(id)
    }

    pub fn items(&self) -> &[ExpenseItem] {
        self.store.items()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Sum over records still unpaid
    pub fn total_unpaid(&self) -> f64 {
        total_unpaid(self.store.items())
    }

    pub fn reload(&mut self) -> StoreResult<()> {
        self.store.load()
    }

    pub fn store(&self) -> &ListStore<ExpenseItem, S> {
        &self.store
    }
}
