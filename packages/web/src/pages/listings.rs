//! Listings grid

use dioxus::prelude::*;
use tracing::warn;

use crate::catalog::{load_catalog, matches_query};
use crate::components::PropertyCard;

/// Home page - every listing in the catalog, with a text filter
#[component]
pub fn Listings() -> Element {
    let catalog = use_hook(|| {
        load_catalog().map_err(|e| {
            warn!(error = %e, "failed to load listings");
            e.to_string()
        })
    });
    let mut search_query = use_signal(String::new);

    let listings = match catalog {
        Ok(listings) => listings,
        Err(message) => {
            return rsx! {
                div {
                    class: "bg-red-50 border border-red-200 rounded-lg p-6 text-red-800",
                    h2 { class: "font-semibold mb-1", "Listings are unavailable" }
                    p { class: "text-sm", "{message}" }
                }
            };
        }
    };

    let query = search_query();
    let visible: Vec<_> = listings
        .into_iter()
        .filter(|entry| matches_query(entry, &query))
        .collect();
    let shown = visible.len();

    rsx! {
        div {
            class: "mb-6 flex flex-col md:flex-row md:items-center md:justify-between gap-4",
            div {
                h1 { class: "text-2xl font-bold text-gray-900", "Properties" }
                p { class: "text-sm text-gray-500", "Pick up to three to compare side by side." }
            }
            input {
                class: "w-full md:w-72 px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-amber-400",
                r#type: "search",
                placeholder: "Search by title, area or type",
                value: "{search_query}",
                oninput: move |e| search_query.set(e.value()),
            }
        }

        if shown == 0 {
            p {
                class: "text-center text-gray-500 py-16",
                "No properties match \"{query}\"."
            }
        } else {
            div {
                class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6",
                for entry in visible {
                    PropertyCard { key: "{entry.id}", entry: entry.clone() }
                }
            }
        }
    }
}
