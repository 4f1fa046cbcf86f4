//! Fault Banner Component
//!
//! Persistent banner for integrity faults and a dismissable line for
//! rejected input.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn FaultBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || ctx.fault.get().map(|fault| view! {
            <div class="fault-banner" role="alert">
                <strong>"Stored data needs repair"</strong>
                <p class="fault-message">{fault}</p>
                <details class="fault-log">
                    <summary>"Recent log"</summary>
                    <pre>{ring_logger::recent_lines().join("\n")}</pre>
                </details>
            </div>
        })}
        {move || ctx.notice.get().map(|notice| view! {
            <div class="notice">
                <span class="notice-text">{notice}</span>
                <button class="close-btn" on:click=move |_| ctx.clear_notice()>"×"</button>
            </div>
        })}
    }
}
