//! Expense Form Component
//!
//! Always-present form for recording a new expense.

use leptos::prelude::*;
use pocket_core::ExpenseDraft;

use crate::context::AppContext;
use crate::store::ExpenseStore;

#[component]
pub fn ExpenseForm(expenses: ExpenseStore) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (name, set_name) = signal(String::new());
    let (amount, set_amount) = signal(String::new());
    let (date, set_date) = signal(String::new());

    let add_expense = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = match ExpenseDraft::parse(&name.get(), &amount.get(), &date.get()) {
            Ok(draft) => draft,
            Err(err) => return ctx.report(&err),
        };
        if ctx.settle(expenses.try_update(|ledger| ledger.add(draft))).is_some() {
            set_name.set(String::new());
            set_amount.set(String::new());
            set_date.set(String::new());
        }
    };

    view! {
        <form class="expense-form" on:submit=add_expense>
            <input
                type="text"
                id="name"
                placeholder="Name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                type="number"
                id="amount"
                placeholder="Amount"
                step="any"
                prop:value=move || amount.get()
                on:input=move |ev| set_amount.set(event_target_value(&ev))
            />
            <input
                type="date"
                id="date"
                prop:value=move || date.get()
                on:input=move |ev| set_date.set(event_target_value(&ev))
            />
            <button type="submit">"Add Expense"</button>
        </form>
    }
}
