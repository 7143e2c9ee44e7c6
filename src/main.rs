//! User Manager Frontend Entry Point

mod app;
mod components;
mod context;
mod store;

use app::App;
use leptos::prelude::*;
use user_manager_core::ClientConfig;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init_logger(console_logger::default_level()) {
        web_sys::console::error_1(&format!("Logger already installed: {}", e).into());
    }

    match ClientConfig::from_build_env() {
        Ok(config) => mount_to_body(move || view! { <App config=config /> }),
        Err(e) => log::error!("Cannot start user manager: {}", e),
    }
}
