//! Todo Widget
//!
//! List view (form, count line, newest-first rows) or the detail view of
//! one todo. The store is loaded when the widget mounts.

use leptos::prelude::*;

use crate::components::{NewTodoForm, TodoDetail, TodoRow};
use crate::context::AppContext;
use crate::rows::{todo_rows, todo_summary};
use crate::store::{open_todo_store, TodoStore, ViewMode};

#[component]
pub fn TodoWidget() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let todos = match open_todo_store() {
        Ok(todos) => todos,
        Err(err) => {
            ctx.report(&err);
            return view! { <p class="widget-unavailable">"The todo list cannot be shown."</p> }
                .into_any();
        }
    };

    let (view_mode, set_view_mode) = signal(ViewMode::List);

    view! {
        <section class="todo-widget">
            {move || match view_mode.get() {
                ViewMode::List => view! { <TodoListView todos=todos set_view=set_view_mode /> }.into_any(),
                ViewMode::Detail(id) => view! { <TodoDetail id=id todos=todos set_view=set_view_mode /> }.into_any(),
            }}
        </section>
    }
    .into_any()
}

#[component]
fn TodoListView(todos: TodoStore, set_view: WriteSignal<ViewMode>) -> impl IntoView {
    // Whole list is rebuilt on every store change
    let rows = move || todos.with(|list| todo_rows(list.newest_first()));
    let summary = move || todos.with(|list| todo_summary(list.len(), list.completed_count()));

    view! {
        <NewTodoForm todos=todos />
        <div class="todo-list">
            {move || rows().into_iter().map(|row| view! {
                <TodoRow row=row todos=todos set_view=set_view />
            }).collect_view()}
        </div>
        <p class="item-count">{summary}</p>
    }
}
