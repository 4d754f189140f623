//! Supra StarKey Wallet Kit - Leptos Demo App
//!
//! Demo dApp pages wired to the StarKey extension through `lib-supra`.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // `tracing` events from the library crates arrive here through their `log` feature
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Supra wallet demo starting");

    leptos::mount::mount_to_body(|| view! { <App/> });
}
