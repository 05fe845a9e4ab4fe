//! IdeaForge - Collaboration and Productivity Platform
//!
//! Marketing site, login and signup flows for IdeaForge, built with Leptos
//! and WebAssembly on top of a hosted authentication service.

#![recursion_limit = "256"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
