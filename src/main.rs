//! Todo Widget Entry Point

use leptos::prelude::*;
use todo_widget::{App, UiConfig};

fn main() {
    console_error_panic_hook::set_once();

    let loaded = UiConfig::from_page();
    let config = loaded.clone().unwrap_or_default();
    if let Err(e) = console_log::init_with_level(config.level()) {
        web_sys::console::warn_1(&format!("[APP] console logger unavailable: {}", e).into());
    }
    if let Err(e) = loaded {
        log::warn!("[APP] ignoring invalid page config: {}", e);
    }

    mount_to_body(move || view! { <App config=config /> });
}
