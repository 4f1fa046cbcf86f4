//! Expense Widget
//!
//! List view (form, unpaid total, table) or the detail view of one expense.

use leptos::prelude::*;

use crate::components::{ExpenseDetail, ExpenseForm, ExpenseTable};
use crate::context::AppContext;
use crate::store::{open_expense_store, ViewMode};

#[component]
pub fn ExpenseWidget() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let expenses = match open_expense_store() {
        Ok(expenses) => expenses,
        Err(err) => {
            ctx.report(&err);
            return view! { <p class="widget-unavailable">"The expense list cannot be shown."</p> }
                .into_any();
        }
    };

    let (view_mode, set_view_mode) = signal(ViewMode::List);

    view! {
        <section class="expense-widget">
            {move || match view_mode.get() {
                ViewMode::List => view! {
                    <ExpenseForm expenses=expenses />
                    <ExpenseTable expenses=expenses set_view=set_view_mode />
                }.into_any(),
                ViewMode::Detail(id) => view! {
                    <ExpenseDetail id=id expenses=expenses set_view=set_view_mode />
                }.into_any(),
            }}
        </section>
    }
    .into_any()
}
