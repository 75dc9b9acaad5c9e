//! SwapDeck - browser demo for exploring token swap pricing.
//!
//! Leptos CSR app; the quote, validation, lifecycle, and selection logic
//! lives in [`core`] and is wired to signals in [`state`].

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
pub mod components;
pub mod core;
pub mod pages;
pub mod services;
pub mod state;
pub mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("SwapDeck starting...");

    hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading screen once the WASM bundle is running.
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if let Some(loading) = document.get_element_by_id("loading") {
        if let Some(element) = loading.dyn_ref::<HtmlElement>() {
            element.class_list().add_1("hidden").ok();
        }
        loading.set_attribute("style", "display: none !important;").ok();
    } else {
        log::warn!("Loading element not found");
    }
}
