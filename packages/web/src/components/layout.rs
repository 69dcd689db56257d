//! Shared page layout

use dioxus::prelude::*;

use crate::routes::Route;
use crate::state::use_compare;
use super::{CompareWidget, NoticeBanner};

/// Header, notice banner and compare widget around every page
#[component]
pub fn PublicLayout() -> Element {
    let compare = use_compare();
    let count = compare.count();

    rsx! {
        div {
            class: "min-h-screen bg-gray-50",

            header {
                class: "bg-white border-b border-gray-200 px-6 py-3",
                div {
                    class: "max-w-6xl mx-auto flex items-center justify-between",
                    Link {
                        to: Route::Listings {},
                        class: "text-xl font-bold text-amber-700",
                        "Guri24"
                    }
                    Link {
                        to: Route::Compare {},
                        class: "text-sm font-medium text-gray-600 hover:text-gray-900",
                        "Compare ({count})"
                    }
                }
            }

            NoticeBanner {}

            main {
                class: "max-w-6xl mx-auto p-6",
                Outlet::<Route> {}
            }

            CompareWidget {}
        }
    }
}
