//! Fallback page

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "text-center py-16",
            h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Page not found" }
            p { class: "text-gray-500 mb-6", "Nothing lives at /{path}." }
            Link {
                to: Route::Listings {},
                class: "text-amber-700 hover:underline",
                "Back to listings"
            }
        }
    }
}
