//! Open Hospital login screen
//!
//! Username/password form with client-side validation, a password
//! visibility toggle and a redirect that stores the session identifier in
//! `localStorage`. Built with Leptos and WebAssembly.

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
