//! Todo Widget
//!
//! Browser task list: add tasks, tick them off, delete them. State lives in
//! memory for the lifetime of the page.

pub mod app;
pub mod components;
pub mod config;
pub mod models;
pub mod session;
pub mod store;
pub mod view;

pub use app::App;
pub use config::UiConfig;
pub use session::{TodoSession, UiEvent};
