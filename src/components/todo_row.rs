//! Todo Row Component
//!
//! One todo in the list view.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::rows::TodoRow as TodoRowData;
use crate::store::{TodoStore, ViewMode};

#[component]
pub fn TodoRow(
    row: TodoRowData,
    todos: TodoStore,
    set_view: WriteSignal<ViewMode>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = row.id;
    let completed = row.completed;

    view! {
        <div class=if completed { "todo-row completed" } else { "todo-row" }>
            <input
                type="checkbox"
                checked=completed
                on:change=move |_| {
                    ctx.settle(todos.try_update(|list| list.toggle(id)));
                }
            />

            <span class="todo-title" on:click=move |_| set_view.set(ViewMode::Detail(id))>
                {row.title}
            </span>

            <button class="detail-btn" on:click=move |_| set_view.set(ViewMode::Detail(id))>
                "Detail"
            </button>

            <DeleteConfirmButton
                button_class="delete-btn"
                on_confirm=move |_: ()| {
                    ctx.settle(todos.try_update(|list| list.remove(id)));
                }
            />
        </div>
    }
}
