//! Synthara - authentication and theme front end
//!
//! Sign-in / sign-up form backed by Supabase GoTrue, plus a light / dark /
//! system theme menu, built with Leptos and WebAssembly.

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
