//! Widget State
//!
//! Each widget owns its store in a signal created when it mounts.
//! Nothing here is global: the signals are passed down as props.

use leptos::prelude::*;
use pocket_core::{BrowserStorage, ExpenseLedger, StoreResult, TodoList};

/// Todo list backed by browser local storage
pub type TodoStore = RwSignal<TodoList<BrowserStorage>>;

/// Expense ledger backed by browser local storage
pub type ExpenseStore = RwSignal<ExpenseLedger<BrowserStorage>>;

/// Which screen a list widget shows. Back always returns to the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    List,
    Detail(u32),
}

/// Load the todo list from local storage into a fresh signal.
pub fn open_todo_store() -> StoreResult<TodoStore> {
    TodoList::open(BrowserStorage).map(RwSignal::new)
}

/// Load the expense ledger from local storage into a fresh signal.
pub fn open_expense_store() -> StoreResult<ExpenseStore> {
    ExpenseLedger::open(BrowserStorage).map(RwSignal::new)
}
