//! Task Board Frontend Entry Point

mod models;
mod error;
mod config;
mod commands;
mod filter;
mod store;
mod render;
mod context;
mod actions;
mod dom;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();
    mount_to_body(App);
}
