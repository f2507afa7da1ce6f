//! Task List Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controller;
mod error;
mod logging;
mod models;
mod summary;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    if let Err(e) = logging::init(config.log_level) {
        web_sys::console::warn_1(&format!("Logger already set: {}", e).into());
    }
    log::info!("Using task store at {}", config.collection_url());

    mount_to_body(move || view! { <App config=config /> });
}
