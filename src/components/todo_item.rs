//! Todo Item Component
//!
//! One task row: checkbox, text and delete button.

use leptos::prelude::*;

use crate::config::UiConfig;
use crate::models::Completion;
use crate::view::{checkbox_label, text_decoration};

/// A single task row
///
/// The completion flag lives here only. It starts unchecked every time the
/// row is created and is never reported to the root.
#[component]
pub fn TodoItem(
    text: String,
    config: UiConfig,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let (completion, set_completion) = signal(Completion::default());
    let label = checkbox_label(&text);
    let delete_text = text.clone();

    view! {
        <li class=move || if completion.get().is_completed() { "todo-item completed" } else { "todo-item" }>
            // Checkbox
            <input
                type="checkbox"
                aria-label=label
                prop:checked=move || completion.get().is_completed()
                on:change=move |_| set_completion.update(|c| c.toggle())
            />

            // Text
            <span
                class="todo-text"
                style=move || format!("text-decoration: {};", text_decoration(completion.get()))
            >
                {text}
            </span>

            // Delete button
            <button class="delete-btn" on:click=move |_| on_delete.run(delete_text.clone())>
                {config.delete_label.clone()}
            </button>
        </li>
    }
}
