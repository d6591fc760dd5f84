//! Todo App
//!
//! Root component. Owns the task collection and passes callbacks down.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{TodoInput, TodoList};
use crate::config::UiConfig;
use crate::store::{store_add_todo, store_delete_todo, store_todos, AppState};

#[component]
pub fn App(#[prop(optional)] config: UiConfig) -> impl IntoView {
    // State
    let store = Store::new(AppState::new());

    let add_todo = Callback::new(move |text: String| store_add_todo(&store, text));
    let delete_todo = Callback::new(move |text: String| store_delete_todo(&store, &text));
    let todos = Signal::derive(move || store_todos(&store));

    view! {
        <div class="App">
            <TodoInput config=config.clone() on_add=add_todo />
            <TodoList todos=todos config=config on_delete=delete_todo />
        </div>
    }
}
