//! Headless Session
//!
//! Hosts the root, input, list and item state outside the browser. Each
//! event is applied in full and the view recomputed before `handle` returns.

use crate::config::UiConfig;
use crate::models::{Completion, Draft, TodoCollection};
use crate::view::{render_input, render_list, RootView};

/// User interaction with the rendered surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Text typed into the input field
    InputChanged(String),
    /// Form submitted via the Add button
    Submit,
    /// Checkbox of the item at this position clicked
    Toggle(usize),
    /// Delete button of the item at this position clicked
    Delete(usize),
}

/// A mounted item: the text it was created for and its local flag
#[derive(Debug, Clone)]
struct ItemSlot {
    text: String,
    completion: Completion,
}

pub struct TodoSession {
    config: UiConfig,
    todos: TodoCollection,
    draft: Draft,
    items: Vec<ItemSlot>,
    view: RootView,
}

impl TodoSession {
    pub fn new(config: UiConfig) -> Self {
        let todos = TodoCollection::new();
        let draft = Draft::default();
        let view = RootView {
            input: render_input(&config, &draft),
            list: render_list(&config, &todos, &[]),
        };
        Self {
            config,
            todos,
            draft,
            items: Vec::new(),
            view,
        }
    }

    pub fn handle(&mut self, event: UiEvent) -> &RootView {
        match event {
            UiEvent::InputChanged(value) => self.draft.on_change(value),
            UiEvent::Submit => {
                if let Some(text) = self.draft.submit() {
                    self.add(text);
                }
            }
            UiEvent::Toggle(index) => match self.items.get_mut(index) {
                Some(slot) => {
                    slot.completion.toggle();
                    log::debug!("[ITEM] toggled #{} -> {}", index, slot.completion.is_completed());
                }
                None => log::debug!("[ITEM] toggle ignored, no item #{}", index),
            },
            UiEvent::Delete(index) => match self.items.get(index) {
                Some(slot) => {
                    let text = slot.text.clone();
                    self.delete(&text);
                }
                None => log::debug!("[ITEM] delete ignored, no item #{}", index),
            },
        }
        self.rerender();
        &self.view
    }

    pub fn view(&self) -> &RootView {
        &self.view
    }

    pub fn todos(&self) -> &TodoCollection {
        &self.todos
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    fn add(&mut self, text: String) {
        let index = self.todos.add(text);
        log::debug!("[APP] added task #{}", index);
        self.reconcile();
    }

    fn delete(&mut self, text: &str) {
        match self.todos.delete(text) {
            Some(index) => log::debug!("[APP] deleted task #{}", index),
            None => log::debug!("[APP] delete of absent task ignored"),
        }
        self.reconcile();
    }

    /// Re-key mounted items by (position, text). An item whose slot still
    /// shows the same text survives with its flag, anything else is created
    /// fresh.
    fn reconcile(&mut self) {
        let old = std::mem::take(&mut self.items);
        self.items = self
            .todos
            .iter()
            .enumerate()
            .map(|(i, text)| match old.get(i) {
                Some(slot) if slot.text == text => slot.clone(),
                _ => ItemSlot {
                    text: text.to_string(),
                    completion: Completion::default(),
                },
            })
            .collect();
    }

    fn rerender(&mut self) {
        let flags: Vec<Completion> = self.items.iter().map(|s| s.completion).collect();
        self.view = RootView {
            input: render_input(&self.config, &self.draft),
            list: render_list(&self.config, &self.todos, &flags),
        };
    }
}

impl Default for TodoSession {
    fn default() -> Self {
        Self::new(UiConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(session: &mut TodoSession, text: &str) {
        session.handle(UiEvent::InputChanged(text.to_string()));
        session.handle(UiEvent::Submit);
    }

    #[test]
    fn test_starts_empty() {
        let session = TodoSession::default();
        assert!(session.view().list.is_empty());
        assert_eq!(session.view().input.value, "");
    }

    #[test]
    fn test_add_then_delete_scenario() {
        let mut session = TodoSession::default();

        add(&mut session, "Buy milk");
        assert_eq!(session.view().list.texts(), ["Buy milk"]);

        add(&mut session, "Walk the dog");
        assert_eq!(session.view().list.texts(), ["Buy milk", "Walk the dog"]);

        let view = session.handle(UiEvent::Delete(0));
        assert_eq!(view.list.texts(), ["Walk the dog"]);
    }

    #[test]
    fn test_input_cleared_after_submit() {
        let mut session = TodoSession::default();
        let view = session.handle(UiEvent::InputChanged("New Todo".to_string()));
        assert_eq!(view.input.value, "New Todo");

        let view = session.handle(UiEvent::Submit);
        assert_eq!(view.input.value, "");
        assert_eq!(view.list.count_of("New Todo"), 1);
    }

    #[test]
    fn test_add_shows_text_once_more() {
        let mut session = TodoSession::default();
        for s in ["a", "b", "a", " a", "a "] {
            let before = session.view().list.count_of(s);
            add(&mut session, s);
            assert_eq!(session.view().list.count_of(s), before + 1);
        }
        assert_eq!(session.todos().as_slice(), ["a", "b", "a", " a", "a "]);
    }

    #[test]
    fn test_blank_submit_changes_nothing() {
        let mut session = TodoSession::default();
        add(&mut session, "Buy milk");

        for blank in ["", " ", "\t \n"] {
            session.handle(UiEvent::InputChanged(blank.to_string()));
            let view = session.handle(UiEvent::Submit);
            assert_eq!(view.list.texts(), ["Buy milk"]);
            assert_eq!(view.input.value, blank);
            assert_eq!(session.draft().value(), blank);
        }
    }

    #[test]
    fn test_delete_removes_first_duplicate_only() {
        let mut session = TodoSession::default();
        for s in ["a", "b", "a", "c"] {
            add(&mut session, s);
        }
        // The second "a" asks for deletion; the first equal value goes.
        let view = session.handle(UiEvent::Delete(2));
        assert_eq!(view.list.texts(), ["b", "a", "c"]);
    }

    #[test]
    fn test_delete_missing_item_is_noop() {
        let mut session = TodoSession::default();
        add(&mut session, "Buy milk");
        let view = session.handle(UiEvent::Delete(5));
        assert_eq!(view.list.texts(), ["Buy milk"]);
    }

    #[test]
    fn test_toggle_affects_only_that_item() {
        let mut session = TodoSession::default();
        add(&mut session, "Buy milk");
        add(&mut session, "Walk the dog");

        let view = session.handle(UiEvent::Toggle(1));
        assert_eq!(view.list.texts(), ["Buy milk", "Walk the dog"]);
        assert!(!view.list.entries[0].checked);
        assert!(view.list.entries[1].checked);
        assert_eq!(view.list.entries[1].text_decoration, "line-through");
        assert_eq!(session.todos().len(), 2);

        let view = session.handle(UiEvent::Toggle(1));
        assert!(!view.list.entries[1].checked);
    }

    #[test]
    fn test_completion_survives_unrelated_add() {
        let mut session = TodoSession::default();
        add(&mut session, "Buy milk");
        session.handle(UiEvent::Toggle(0));
        add(&mut session, "Walk the dog");
        assert!(session.view().list.entries[0].checked);
        assert!(!session.view().list.entries[1].checked);
    }

    #[test]
    fn test_completion_resets_when_item_shifts() {
        let mut session = TodoSession::default();
        add(&mut session, "Buy milk");
        add(&mut session, "Walk the dog");
        session.handle(UiEvent::Toggle(1));

        let view = session.handle(UiEvent::Delete(0));
        assert_eq!(view.list.texts(), ["Walk the dog"]);
        assert!(!view.list.entries[0].checked);
    }

    #[test]
    fn test_completion_kept_before_deleted_position() {
        let mut session = TodoSession::default();
        for s in ["a", "b", "c"] {
            add(&mut session, s);
        }
        session.handle(UiEvent::Toggle(0));
        let view = session.handle(UiEvent::Delete(2));
        assert_eq!(view.list.texts(), ["a", "b"]);
        assert!(view.list.entries[0].checked);
    }
}
