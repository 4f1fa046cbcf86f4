//! Pocket Widgets Frontend Entry Point

mod app;
mod components;
mod context;
mod rows;
mod store;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

/// Log lines kept for the fault banner
const LOG_CAPACITY: usize = 200;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(e) = ring_logger::init_logger("PocketWidgets", LOG_CAPACITY, level) {
        web_sys::console::warn_1(&format!("[APP] logger not installed: {}", e).into());
    }

    mount_to_body(App);
}
