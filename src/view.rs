//! View Descriptions
//!
//! Plain data describing what each component puts on screen. The Leptos
//! components render from the same helpers, the headless session renders
//! whole trees of these.

use crate::config::UiConfig;
use crate::models::{Completion, Draft, TodoCollection};

/// Accessible label of an item's checkbox
pub fn checkbox_label(text: &str) -> String {
    format!("Mark {} as completed", text)
}

/// CSS `text-decoration` value of an item's text
pub fn text_decoration(completion: Completion) -> &'static str {
    if completion.is_completed() {
        "line-through"
    } else {
        "none"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    pub placeholder: String,
    pub aria_label: String,
    pub value: String,
    pub submit_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub text: String,
    pub checked: bool,
    pub checkbox_label: String,
    pub text_decoration: &'static str,
    pub delete_label: String,
}

/// Ordered list entries; empty collection means zero entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListView {
    pub entries: Vec<ItemView>,
}

impl ListView {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.text.as_str()).collect()
    }

    pub fn count_of(&self, text: &str) -> usize {
        self.entries.iter().filter(|e| e.text == text).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootView {
    pub input: InputView,
    pub list: ListView,
}

pub fn render_input(config: &UiConfig, draft: &Draft) -> InputView {
    InputView {
        placeholder: config.placeholder.clone(),
        aria_label: config.input_label.clone(),
        value: draft.value().to_string(),
        submit_label: config.add_label.clone(),
    }
}

pub fn render_item(config: &UiConfig, text: &str, completion: Completion) -> ItemView {
    ItemView {
        text: text.to_string(),
        checked: completion.is_completed(),
        checkbox_label: checkbox_label(text),
        text_decoration: text_decoration(completion),
        delete_label: config.delete_label.clone(),
    }
}

/// One entry per task, in order. `flags` holds the completion flag of each
/// position; positions past its end render unchecked.
pub fn render_list(config: &UiConfig, todos: &TodoCollection, flags: &[Completion]) -> ListView {
    let entries = todos
        .iter()
        .enumerate()
        .map(|(i, text)| render_item(config, text, flags.get(i).copied().unwrap_or_default()))
        .collect();
    ListView { entries }
}
