//! Widget Tab Bar Component
//!
//! Tab bar for switching between the three widgets.

use leptos::prelude::*;

use crate::context::AppContext;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Widget {
    Vowels,
    #[default]
    Todos,
    Expenses,
}

/// Tab order and labels
pub const WIDGETS: &[(Widget, &str)] = &[
    (Widget::Vowels, "Vowel Counter"),
    (Widget::Todos, "Todo List"),
    (Widget::Expenses, "Expenses"),
];

/// Widget Tab Bar component
#[component]
pub fn WidgetTabBar(
    current_widget: ReadSignal<Widget>,
    set_current_widget: WriteSignal<Widget>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <nav class="widget-tab-bar">
            {WIDGETS.iter().map(|&(widget, label)| {
                let is_active = move || current_widget.get() == widget;
                view! {
                    <button
                        class=move || if is_active() { "widget-tab active" } else { "widget-tab" }
                        on:click=move |_| {
                            if current_widget.get_untracked() != widget {
                                ctx.clear();
                                set_current_widget.set(widget);
                            }
                        }
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
