//! Vowel Counter Component
//!
//! Live vowel count of a text input. Nothing is stored.

use leptos::prelude::*;
use pocket_core::count_vowels;

#[component]
pub fn VowelCounter() -> impl IntoView {
    let (text, set_text) = signal(String::new());
    let count = move || count_vowels(&text.get());

    view! {
        <section class="vowel-counter">
            <input
                type="text"
                id="input"
                placeholder="Type something..."
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
            />
            <p id="output">"vowels: " {count}</p>
        </section>
    }
}
