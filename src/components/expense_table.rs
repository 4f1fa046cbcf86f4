//! Expense Table Component
//!
//! Unpaid total plus one clickable row per expense.

use leptos::prelude::*;

use crate::rows::{expense_rows, unpaid_summary};
use crate::store::{ExpenseStore, ViewMode};

#[component]
pub fn ExpenseTable(expenses: ExpenseStore, set_view: WriteSignal<ViewMode>) -> impl IntoView {
    let total = move || expenses.with(|ledger| unpaid_summary(ledger.total_unpaid()));
    let rows = move || expenses.with(|ledger| expense_rows(ledger.items()));

    view! {
        <p class="total-unpaid">{total}</p>
        <table class="expense-table">
            <thead>
                <tr>
                    <th>"Date"</th>
                    <th>"Name"</th>
                    <th>"Amount"</th>
                    <th>"Status"</th>
                </tr>
            </thead>
            <tbody>
                {move || rows().into_iter().map(|row| {
                    let id = row.id;
                    view! {
                        <tr
                            class=format!("expense-row {}", row.status)
                            on:click=move |_| set_view.set(ViewMode::Detail(id))
                        >
                            <td>{row.date}</td>
                            <td>{row.name}</td>
                            <td>{row.amount}</td>
                            <td>{row.status}</td>
                        </tr>
                    }
                }).collect_view()}
            </tbody>
        </table>
    }
}
