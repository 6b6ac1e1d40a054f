//! Stir-Fry Timeline Frontend Entry Point

mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init_logger("StirFryTimeline") {
        web_sys::console::warn_1(&format!("logger not installed: {}", e).into());
    }
    mount_to_body(App);
}
