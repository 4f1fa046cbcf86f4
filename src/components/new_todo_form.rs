//! New Todo Form Component
//!
//! Always-present form for adding a todo by title.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::TodoStore;

#[component]
pub fn NewTodoForm(todos: TodoStore) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (new_title, set_new_title) = signal(String::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get();
        if ctx.settle(todos.try_update(|list| list.add(&title))).is_some() {
            set_new_title.set(String::new());
        }
    };

    view! {
        <form class="new-todo-form" on:submit=add_todo>
            <input
                type="text"
                id="todo-title"
                placeholder="Add new todo..."
                prop:value=move || new_title.get()
                on:input=move |ev| set_new_title.set(event_target_value(&ev))
            />
            <button type="submit" id="add-todo">"Add"</button>
        </form>
    }
}
