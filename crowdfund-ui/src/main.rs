//! Crowdfund Dashboard
//!
//! Browser front-end for the crowdfunding ledger built with Leptos (WASM).
//!
//! # Features
//!
//! - Connects the injected Celo wallet
//! - Lists every project with progress and creator identicon
//! - Creates projects and funds them (approve, then support)
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All ledger traffic goes through the wallet extension.

use leptos::*;
use log::Level;

mod app;
mod components;
mod provider;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // tracing events reach the console through the `log` facade
    _ = console_log::init_with_level(Level::Info);

    mount_to_body(|| view! { <app::App /> });
}
