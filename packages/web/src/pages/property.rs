//! Listing detail page

use dioxus::prelude::*;
use guri_compare::{format_price, property_type_label, purpose_label};

use crate::catalog::load_catalog;
use crate::routes::Route;
use crate::state::use_compare;

/// Detail view of one catalog listing, looked up by slug
#[component]
pub fn Property(slug: String) -> Element {
    let compare = use_compare();
    let entry = load_catalog()
        .ok()
        .and_then(|catalog| catalog.into_iter().find(|e| e.slug.as_deref() == Some(slug.as_str())));

    let Some(entry) = entry else {
        return rsx! {
            div {
                class: "text-center py-16",
                h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Property not found" }
                Link { to: Route::Listings {}, class: "text-amber-700 hover:underline", "Back to listings" }
            }
        };
    };

    let selected = compare.is_in_compare(&entry.id);
    let price = format_price(entry.price, &entry.currency, entry.price_unit.as_deref());
    let description = entry
        .extra
        .get("description")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    let agent = entry
        .extra
        .get("agent")
        .and_then(|a| a.get("name"))
        .and_then(|n| n.as_str())
        .map(str::to_string);
    let facts: Vec<String> = [
        entry.property_type.as_deref().map(property_type_label),
        entry.purpose.as_deref().map(purpose_label),
        entry.bedrooms.filter(|n| *n > 0).map(|n| format!("{} bedrooms", n)),
        entry.bathrooms.filter(|n| *n > 0).map(|n| format!("{} bathrooms", n)),
        entry.size.clone(),
    ]
    .into_iter()
    .flatten()
    .collect();
    let to_add = entry.clone();
    let id = entry.id.clone();

    rsx! {
        div {
            class: "bg-white rounded-xl border border-gray-200 overflow-hidden",
            if let Some(src) = entry.thumbnail() {
                img { class: "w-full h-80 object-cover", src: "{src}", alt: "{entry.title}" }
            }
            div {
                class: "p-6",
                div {
                    class: "flex items-start justify-between gap-4 mb-4",
                    div {
                        h1 { class: "text-2xl font-bold text-gray-900", "{entry.title}" }
                        if let Some(location) = &entry.location {
                            p { class: "text-gray-500", "{location.city}, {location.country}" }
                        }
                    }
                    p { class: "text-2xl font-bold text-amber-700 whitespace-nowrap", "{price}" }
                }

                div {
                    class: "flex flex-wrap gap-2 mb-4",
                    for fact in facts {
                        span { key: "{fact}", class: "bg-gray-100 px-2.5 py-1 rounded text-sm text-gray-700", "{fact}" }
                    }
                }

                if !description.is_empty() {
                    p { class: "text-gray-700 mb-4", "{description}" }
                }

                if !entry.features.is_empty() {
                    ul {
                        class: "grid grid-cols-2 gap-1 text-sm text-gray-700 mb-6",
                        for feature in entry.features.iter() {
                            li { key: "{feature}", "\u{2713} {feature}" }
                        }
                    }
                }

                div {
                    class: "flex items-center justify-between border-t border-gray-100 pt-4",
                    if let Some(agent) = agent {
                        p { class: "text-sm text-gray-500", "Listed by {agent}" }
                    }
                    button {
                        class: "px-4 py-2 rounded-lg text-sm font-medium bg-gray-900 text-white hover:bg-gray-700",
                        onclick: move |_| {
                            if selected {
                                compare.remove(&id);
                            } else {
                                compare.add(to_add.clone());
                            }
                        },
                        if selected { "Remove from Compare" } else { "Add to Compare" }
                    }
                }
            }
        }
    }
}
