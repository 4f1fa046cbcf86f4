//! Expense Detail Component
//!
//! Edit form for a single expense: name, amount, date and the paid flag.
//! Expenses cannot be deleted.

use leptos::prelude::*;
use pocket_core::ExpensePatch;

use crate::context::AppContext;
use crate::store::{ExpenseStore, ViewMode};

#[component]
pub fn ExpenseDetail(
    id: u32,
    expenses: ExpenseStore,
    set_view: WriteSignal<ViewMode>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let back = move |_: web_sys::MouseEvent| set_view.set(ViewMode::List);

    let Some(expense) = expenses.with_untracked(|ledger| ledger.get(id).cloned()) else {
        return view! {
            <section class="expense-detail">
                <p>"This expense no longer exists."</p>
                <button type="button" on:click=back>"Back"</button>
            </section>
        }
        .into_any();
    };

    let (name, set_name) = signal(expense.name.clone());
    let (amount, set_amount) = signal(expense.amount_input());
    let (date, set_date) = signal(expense.date_input());
    let (paid, set_paid) = signal(expense.is_paid());
    let paid_on = expense.paid_date.map(|d| format!("Paid on {}", d));

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let patch = match ExpensePatch::parse(&name.get(), &amount.get(), &date.get(), paid.get()) {
            Ok(patch) => patch,
            Err(err) => return ctx.report(&err),
        };
        let today = chrono::Local::now().date_naive();
        if ctx
            .settle(expenses.try_update(|ledger| ledger.modify(id, patch, today)))
            .is_some()
        {
            set_view.set(ViewMode::List);
        }
    };

    view! {
        <form class="expense-detail" on:submit=save>
            <button type="button" on:click=back>"Back"</button>
            <div>
                <input
                    type="text"
                    id="display-expense-name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </div>
            <div>
                <input
                    type="number"
                    id="display-expense-amount"
                    step="any"
                    prop:value=move || amount.get()
                    on:input=move |ev| set_amount.set(event_target_value(&ev))
                />
            </div>
            <div>
                <input
                    type="date"
                    id="display-expense-date"
                    prop:value=move || date.get()
                    on:input=move |ev| set_date.set(event_target_value(&ev))
                />
            </div>
            <div>
                <label>
                    <input
                        id="expense-paid"
                        type="checkbox"
                        prop:checked=move || paid.get()
                        on:change=move |ev| set_paid.set(event_target_checked(&ev))
                    />
                    " Paid"
                </label>
                {paid_on.map(|text| view! { <span class="paid-date">{text}</span> })}
            </div>
            <button type="submit">"Save"</button>
        </form>
    }
    .into_any()
}
