//! Quoteboard
//!
//! Browser client for a quote-serving REST API, built with Leptos (WASM).
//!
//! # Features
//!
//! - Fetch a random public quote
//! - Register or log in against the API's JWT endpoints
//! - Fetch quotes reserved for authenticated users
//! - Session survives reloads via localStorage
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. User actions and network completions are funneled as messages
//! into a pure `update` function that returns the next session state plus an
//! optional command; a thin runner in `app` executes commands (HTTP calls,
//! storage writes) and feeds their results back in as messages.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
