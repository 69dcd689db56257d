//! Guri24 - Dioxus Web Application
//!
//! Property listings with a side-by-side comparison of up to three
//! listings. The comparison selection lives in browser `localStorage` and
//! survives reloads.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web
//! ```

#![allow(non_snake_case)]

mod app;
mod catalog;
mod components;
mod pages;
mod routes;
mod state;
mod storage;

use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .without_time()
        .init();

    dioxus::launch(app::App);
}
