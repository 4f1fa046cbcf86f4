//! Todo Detail Component
//!
//! Edit form for a single todo: title and detail, save, delete or go back.

use leptos::prelude::*;
use pocket_core::TodoPatch;

use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::store::{TodoStore, ViewMode};

#[component]
pub fn TodoDetail(
    id: u32,
    todos: TodoStore,
    set_view: WriteSignal<ViewMode>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let back = move |_: web_sys::MouseEvent| set_view.set(ViewMode::List);

    let Some(todo) = todos.with_untracked(|list| list.get(id).cloned()) else {
        return view! {
            <section class="todo-detail">
                <p>"This todo no longer exists."</p>
                <button type="button" on:click=back>"Back"</button>
            </section>
        }
        .into_any();
    };

    let (title, set_title) = signal(todo.title);
    let (detail, set_detail) = signal(todo.detail);

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let patch = match TodoPatch::parse(&title.get(), &detail.get()) {
            Ok(patch) => patch,
            Err(err) => return ctx.report(&err),
        };
        if ctx.settle(todos.try_update(|list| list.edit(id, patch))).is_some() {
            set_view.set(ViewMode::List);
        }
    };

    let delete = move |_: ()| {
        if ctx.settle(todos.try_update(|list| list.remove(id))).is_some() {
            set_view.set(ViewMode::List);
        }
    };

    view! {
        <form class="todo-detail" on:submit=save>
            <div>
                <input
                    type="text"
                    id="display-todo-title"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
            </div>
            <div>
                <textarea
                    id="todo-detail"
                    prop:value=move || detail.get()
                    on:input=move |ev| set_detail.set(event_target_value(&ev))
                ></textarea>
            </div>
            <div class="detail-actions">
                <button type="submit">"Save"</button>
                <button type="button" on:click=back>"Back"</button>
                <DeleteConfirmButton button_class="delete-btn" on_confirm=delete />
            </div>
        </form>
    }
    .into_any()
}
