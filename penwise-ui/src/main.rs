//! Penwise Web App
//!
//! Writing app built with Leptos (WASM).
//!
//! # Features
//!
//! - Landing and marketing pages
//! - Sign-in / sign-up with client-side validation
//! - Write mode with live word, character and reading-time stats
//! - Dark mode shared across every page
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. There is no backend: the draft lives in an in-memory
//! `penwise::EditorSession` for as long as the Write page is mounted.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;
mod theme;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
