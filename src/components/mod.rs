//! UI Components
//!
//! Leptos components for the input form, the list and its rows.

mod todo_input;
mod todo_item;
mod todo_list;

pub use todo_input::TodoInput;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
