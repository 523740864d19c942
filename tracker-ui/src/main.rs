//! Nutrition Tracker
//!
//! Single-page daily intake tracker built with Leptos (WASM).
//!
//! # Features
//!
//! - Daily calorie and protein targets
//! - Add, edit and clear food entries
//! - Stacked bar charts against a requirement line
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. State changes go through the tracker reducer; the food list
//! is persisted to `window.localStorage`.

use leptos::*;

mod app;
mod components;
mod state;
mod storage;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
