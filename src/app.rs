//! Pocket Widgets App
//!
//! Tab bar, message banner and the selected widget.

use leptos::prelude::*;

use crate::components::{ExpenseWidget, FaultBanner, TodoWidget, VowelCounter, Widget, WidgetTabBar};
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (current_widget, set_current_widget) = signal(Widget::default());
    let fault = signal::<Option<String>>(None);
    let notice = signal::<Option<String>>(None);

    // Provide context to all children
    provide_context(AppContext::new(fault, notice));

    view! {
        <div class="app-layout">
            <WidgetTabBar
                current_widget=current_widget
                set_current_widget=set_current_widget
            />

            <FaultBanner />

            // Each switch remounts the widget, which reloads it from storage
            <main class="main-content" id="app">
                {move || match current_widget.get() {
                    Widget::Vowels => view! { <VowelCounter /> }.into_any(),
                    Widget::Todos => view! { <TodoWidget /> }.into_any(),
                    Widget::Expenses => view! { <ExpenseWidget /> }.into_any(),
                }}
            </main>
        </div>
    }
}
