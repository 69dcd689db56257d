//! Floating compare widget

use dioxus::prelude::*;
use guri_compare::format_price;

use crate::routes::Route;
use crate::state::use_compare;

/// Bottom-right panel listing the selected properties. Hidden when empty.
#[component]
pub fn CompareWidget() -> Element {
    let compare = use_compare();
    let count = compare.count();

    if count == 0 {
        return rsx! {};
    }

    let is_open = *compare.is_open.read();
    let entries = compare.entries();

    rsx! {
        div {
            class: "fixed bottom-6 right-6 w-80 bg-white rounded-xl shadow-2xl border border-gray-200 z-40",

            // Header toggles the panel
            button {
                class: "w-full flex items-center justify-between px-4 py-3 bg-gray-900 text-white rounded-t-xl",
                onclick: move |_| compare.toggle_open(),
                span {
                    class: "font-semibold",
                    "\u{2696} Compare ({count})"
                }
                span {
                    if is_open { "\u{25BE}" } else { "\u{25B4}" }
                }
            }

            if is_open {
                div {
                    class: "p-3 space-y-2",
                    for entry in entries {
                        CompareWidgetItem {
                            key: "{entry.id}",
                            id: entry.id.clone(),
                            title: entry.title.clone(),
                            thumbnail: entry.thumbnail().map(str::to_string),
                            price: format_price(entry.price, &entry.currency, entry.price_unit.as_deref()),
                        }
                    }
                }

                div {
                    class: "flex items-center justify-between px-4 py-3 border-t border-gray-100",
                    button {
                        class: "text-sm text-gray-500 hover:text-gray-900",
                        onclick: move |_| compare.clear(),
                        "Clear all"
                    }
                    Link {
                        to: Route::Compare {},
                        class: "px-4 py-2 bg-amber-500 text-white text-sm font-medium rounded-lg hover:bg-amber-600 transition-colors",
                        onclick: move |_| compare.close(),
                        "Compare Now"
                    }
                }
            }
        }
    }
}

#[component]
fn CompareWidgetItem(
    id: guri_compare::ListingId,
    title: String,
    thumbnail: Option<String>,
    price: String,
) -> Element {
    let compare = use_compare();
    let to_remove = id.clone();

    rsx! {
        div {
            class: "flex items-center gap-3",
            div {
                class: "w-12 h-12 rounded bg-gray-100 overflow-hidden flex-shrink-0",
                if let Some(src) = thumbnail {
                    img { class: "w-full h-full object-cover", src: "{src}", alt: "{title}" }
                }
            }
            div {
                class: "flex-grow min-w-0",
                p { class: "text-sm font-medium text-gray-900 truncate", "{title}" }
                p { class: "text-xs text-gray-500", "{price}" }
            }
            button {
                class: "text-gray-400 hover:text-red-600 px-1",
                title: "Remove",
                onclick: move |_| compare.remove(&to_remove),
                "\u{2715}"
            }
        }
    }
}
