//! Inline notice banner

use dioxus::prelude::*;

use crate::state::{use_compare, NoticeLevel};

#[component]
pub fn NoticeBanner() -> Element {
    let compare = use_compare();
    let Some(notice) = compare.notice.read().clone() else {
        return rsx! {};
    };

    let style = match notice.level {
        NoticeLevel::Info => "bg-blue-50 border-blue-200 text-blue-800",
        NoticeLevel::Warning => "bg-amber-50 border-amber-300 text-amber-900",
    };

    rsx! {
        div {
            class: "flex items-center justify-between gap-4 px-6 py-3 border-b {style}",
            role: "status",
            p { class: "text-sm", "{notice.message}" }
            button {
                class: "text-sm font-medium opacity-70 hover:opacity-100",
                onclick: move |_| compare.dismiss_notice(),
                "Dismiss"
            }
        }
    }
}
