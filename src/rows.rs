//! Row Projection
//!
//! Turns store contents into the plain rows the list views render.
//! Pure, so rendering the same store twice shows the same rows.

use pocket_core::{format_amount, ExpenseItem, TodoItem};

#[derive(Debug, Clone, PartialEq)]
pub struct TodoRow {
    pub id: u32,
    pub title: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRow {
    pub id: u32,
    pub date: String,
    pub name: String,
    pub amount: String,
    pub status: &'static str,
}

/// Rows in the order given (the caller picks newest first)
pub fn todo_rows<'a>(items: impl IntoIterator<Item = &'a TodoItem>) -> Vec<TodoRow> {
    items
        .into_iter()
        .map(|todo| TodoRow {
            id: todo.id,
            title: todo.title.clone(),
            completed: todo.completed,
        })
        .collect()
}

/// Rows in insertion order
pub fn expense_rows(items: &[ExpenseItem]) -> Vec<ExpenseRow> {
    items
        .iter()
        .map(|expense| ExpenseRow {
            id: expense.id,
            date: expense.date_input(),
            name: expense.name.clone(),
            amount: format_amount(expense.amount),
            status: expense.expense_status.as_str(),
        })
        .collect()
}

/// "3 items, 1 done"
pub fn todo_summary(total: usize, done: usize) -> String {
    let noun = if total == 1 { "item" } else { "items" };
    format!("{} {}, {} done", total, noun, done)
}

pub fn unpaid_summary(total: f64) -> String {
    format!("Total Unpaid: {}", format_amount(total))
}
