//! Root application component

use dioxus::prelude::*;
use guri_compare::CompareConfig;

use crate::routes::Route;
use crate::state::CompareProvider;

/// Root application component
#[component]
pub fn App() -> Element {
    let config = use_hook(compare_config);

    rsx! {
        // Global styles
        document::Script { src: "https://cdn.tailwindcss.com" }

        // Compare list outlives route changes
        CompareProvider {
            config,
            Router::<Route> {}
        }
    }
}

// The browser has no process environment or .env file.
#[cfg(feature = "web")]
fn compare_config() -> CompareConfig {
    CompareConfig::default()
}

#[cfg(not(feature = "web"))]
fn compare_config() -> CompareConfig {
    CompareConfig::from_env().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "invalid compare settings, using defaults");
        CompareConfig::default()
    })
}
