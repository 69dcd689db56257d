//! Listing card with a compare toggle

use dioxus::prelude::*;
use guri_compare::{format_price, property_type_label, purpose_label, ComparisonEntry};

use crate::state::use_compare;

/// Props for PropertyCard
#[derive(Props, Clone, PartialEq)]
pub struct PropertyCardProps {
    pub entry: ComparisonEntry,
}

/// Card for one listing in the grid
#[component]
pub fn PropertyCard(props: PropertyCardProps) -> Element {
    let compare = use_compare();
    let entry = &props.entry;

    let selected = compare.is_in_compare(&entry.id);
    let blocked = !selected && compare.is_full();
    let button = compare_button_styles(selected, blocked);

    let price = format_price(entry.price, &entry.currency, entry.price_unit.as_deref());
    let thumbnail = entry.thumbnail().unwrap_or_default().to_string();
    let purpose = entry.purpose.as_deref().map(purpose_label);
    let property_type = entry.property_type.as_deref().map(property_type_label);
    let place = entry.location.as_ref().map(|l| match &l.area {
        Some(area) => format!("{}, {}", area, l.city),
        None => format!("{}, {}", l.city, l.country),
    });
    let hint = if blocked {
        "Remove a property from your compare list first"
    } else {
        ""
    };

    let to_toggle = props.entry.clone();

    rsx! {
        div {
            class: "rounded-xl border border-gray-200 bg-white overflow-hidden hover:shadow-lg transition-all duration-200 flex flex-col h-full",

            // Image + purpose badge
            div {
                class: "relative h-48 bg-gray-100",
                if !thumbnail.is_empty() {
                    img {
                        class: "w-full h-full object-cover",
                        src: "{thumbnail}",
                        alt: "{entry.title}",
                    }
                }
                if let Some(purpose) = purpose {
                    span {
                        class: "absolute top-3 left-3 px-2.5 py-1 rounded-full text-xs font-semibold bg-amber-500 text-white",
                        "{purpose}"
                    }
                }
            }

            div {
                class: "p-5 flex flex-col flex-grow",

                p {
                    class: "text-lg font-bold text-amber-700 mb-1",
                    "{price}"
                }
                h3 {
                    class: "text-base font-semibold text-gray-900 mb-2 line-clamp-2",
                    "{entry.title}"
                }

                div {
                    class: "flex flex-wrap items-center gap-2 text-sm text-gray-500 mb-4",
                    if let Some(place) = place {
                        span { "{place}" }
                    }
                    if let Some(property_type) = property_type {
                        span {
                            class: "bg-gray-100 px-2 py-0.5 rounded text-xs",
                            "{property_type}"
                        }
                    }
                }

                // Rooms
                div {
                    class: "flex gap-4 text-sm text-gray-600 mb-4",
                    if let Some(bedrooms) = entry.bedrooms.filter(|n| *n > 0) {
                        span { "{bedrooms} bd" }
                    }
                    if let Some(bathrooms) = entry.bathrooms.filter(|n| *n > 0) {
                        span { "{bathrooms} ba" }
                    }
                    if let Some(size) = &entry.size {
                        span { "{size}" }
                    }
                }

                button {
                    class: "mt-auto w-full px-3 py-2 text-sm font-medium rounded-lg transition-colors {button.class}",
                    title: "{hint}",
                    onclick: move |_| compare.toggle(to_toggle.clone()),
                    "{button.label}"
                }
            }
        }
    }
}

struct CompareButtonStyles {
    class: &'static str,
    label: &'static str,
}

// A full list still accepts the click so the visitor gets the capacity notice.
fn compare_button_styles(selected: bool, blocked: bool) -> CompareButtonStyles {
    if selected {
        CompareButtonStyles {
            class: "bg-amber-100 text-amber-800 hover:bg-amber-200",
            label: "\u{2713} In Compare",
        }
    } else if blocked {
        CompareButtonStyles {
            class: "bg-gray-100 text-gray-400 cursor-not-allowed",
            label: "Compare Full",
        }
    } else {
        CompareButtonStyles {
            class: "bg-gray-900 text-white hover:bg-gray-700",
            label: "+ Compare",
        }
    }
}
