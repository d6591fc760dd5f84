//! Todo Input Component
//!
//! Form holding the draft text; hands non-blank submissions to the root.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::config::UiConfig;
use crate::models::Draft;

/// Input field plus Add button
#[component]
pub fn TodoInput(
    config: UiConfig,
    #[prop(into)] on_add: Callback<String>,
) -> impl IntoView {
    let draft = RwSignal::new(Draft::default());

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let mut accepted = None;
        draft.update(|d| accepted = d.submit());
        match accepted {
            Some(text) => on_add.run(text),
            None => log::debug!("[INPUT] blank submission ignored"),
        }
    };

    view! {
        <form class="todo-input" on:submit=submit>
            <input
                type="text"
                placeholder=config.placeholder.clone()
                aria-label=config.input_label.clone()
                prop:value=move || draft.with(|d| d.value().to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| d.on_change(value));
                }
            />
            <button type="submit">{config.add_label.clone()}</button>
        </form>
    }
}
