//! Side-by-side comparison page

use dioxus::prelude::*;
use guri_compare::{Cell, ComparisonTable, TableColumn};

use crate::routes::Route;
use crate::state::use_compare;

/// Comparison table of the selected listings
#[component]
pub fn Compare() -> Element {
    let compare = use_compare();
    let table = ComparisonTable::from_entries(&compare.entries());

    if table.is_empty() {
        return rsx! {
            div {
                class: "text-center py-16",
                h2 { class: "text-2xl font-bold text-gray-900 mb-2", "No properties to compare" }
                p {
                    class: "text-gray-500 mb-6",
                    "Select properties from the listings to see them side by side."
                }
                Link {
                    to: Route::Listings {},
                    class: "inline-flex items-center gap-2 px-4 py-2 bg-amber-500 text-white rounded-lg hover:bg-amber-600",
                    "\u{2190} Browse Properties"
                }
            }
        };
    }

    rsx! {
        div {
            class: "flex items-center justify-between mb-6",
            h1 { class: "text-2xl font-bold text-gray-900", "Compare Properties" }
            button {
                class: "px-4 py-2 border border-gray-300 rounded-lg text-sm text-gray-700 hover:bg-gray-100",
                onclick: move |_| compare.clear(),
                "Clear All"
            }
        }

        div {
            class: "overflow-x-auto bg-white rounded-xl border border-gray-200",
            table {
                class: "w-full text-sm",
                thead {
                    tr {
                        th { class: "w-40 p-4 text-left text-gray-500 font-medium", "Feature" }
                        for column in table.columns.iter() {
                            ColumnHeader { key: "{column.id}", column: column.clone() }
                        }
                    }
                }
                tbody {
                    for row in table.rows.iter() {
                        tr {
                            key: "{row.label}",
                            class: "border-t border-gray-100",
                            td { class: "p-4 font-medium text-gray-600", "{row.label}" }
                            for (i, cell) in row.cells.iter().enumerate() {
                                td { key: "{i}", class: "p-4 align-top text-gray-900", {render_cell(cell)} }
                            }
                        }
                    }
                    tr {
                        class: "border-t border-gray-100",
                        td { class: "p-4 font-medium text-gray-600", "Action" }
                        for column in table.columns.iter() {
                            td {
                                key: "{column.id}",
                                class: "p-4",
                                if let Some(path) = column.detail_path.clone() {
                                    Link {
                                        to: path,
                                        class: "block text-center px-3 py-2 bg-amber-500 text-white rounded-lg hover:bg-amber-600",
                                        "View Details"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ColumnHeader(column: TableColumn) -> Element {
    let compare = use_compare();
    let id = column.id.clone();

    rsx! {
        th {
            class: "relative p-4 text-left align-top min-w-56",
            button {
                class: "absolute top-2 right-2 w-7 h-7 rounded-full bg-white/90 text-gray-500 hover:text-red-600 shadow",
                title: "Remove",
                onclick: move |_| compare.remove(&id),
                "\u{2715}"
            }
            if let Some(src) = &column.thumbnail {
                img {
                    class: "w-full h-32 object-cover rounded-lg mb-3",
                    src: "{src}",
                    alt: "{column.title}",
                }
            }
            p { class: "font-semibold text-gray-900 mb-1", "{column.title}" }
            p { class: "text-amber-700 font-bold", "{column.price}" }
        }
    }
}

fn render_cell(cell: &Cell) -> Element {
    match cell {
        Cell::Text(text) => rsx! { "{text}" },
        Cell::Badge(label) => rsx! {
            span {
                class: "px-2.5 py-1 rounded-full text-xs font-semibold bg-amber-100 text-amber-800",
                "{label}"
            }
        },
        Cell::List { items, more } => rsx! {
            ul {
                class: "space-y-1",
                for item in items.iter() {
                    li { key: "{item}", "\u{2713} {item}" }
                }
                if let Some(more) = more {
                    li { class: "text-gray-500 text-xs", "{more}" }
                }
            }
        },
    }
}
