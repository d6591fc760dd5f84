//! Todo List Component
//!
//! Projects the root collection into one row per task.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::config::UiConfig;
use crate::models::TodoCollection;

/// Ordered task list
#[component]
pub fn TodoList(
    #[prop(into)] todos: Signal<TodoCollection>,
    config: UiConfig,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let entries = move || {
        todos
            .get()
            .iter()
            .map(str::to_string)
            .enumerate()
            .collect::<Vec<_>>()
    };

    view! {
        <ul class="todo-list">
            <For
                each=entries
                // Rows are keyed by position and text, so a row that shifts
                // or changes text is rebuilt with a fresh completion flag.
                key=|entry| entry.clone()
                children=move |(_, text)| {
                    view! {
                        <TodoItem text=text config=config.clone() on_delete=on_delete />
                    }
                }
            />
        </ul>
    }
}
