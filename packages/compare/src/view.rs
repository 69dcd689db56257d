//! Side-by-side comparison view model.
//!
//! Turns the selected entries into a table (one column per listing, one row
//! per feature) so any renderer can draw it without re-deriving labels.

use crate::types::{ComparisonEntry, ListingId};

/// How many amenities a cell lists before collapsing the rest into "+N more".
pub const AMENITY_PREVIEW: usize = 5;

/// Placeholder for missing values.
pub const MISSING: &str = "-";

/// Header of one compared listing.
#[derive(Debug, Clone, PartialEq)]
pub struct TableColumn {
    pub id: ListingId,
    pub title: String,
    pub thumbnail: Option<String>,
    /// Link to the detail page, when the listing has a slug
    pub detail_path: Option<String>,
    /// Formatted price, e.g. "KSh2,000,000"
    pub price: String,
}

/// Content of one table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    /// Short highlighted label (purpose)
    Badge(String),
    /// Preview of a list plus a "+N more" suffix when truncated
    List { items: Vec<String>, more: Option<String> },
}

impl Cell {
    fn text_or_missing(value: Option<String>) -> Self {
        Cell::Text(value.unwrap_or_else(|| MISSING.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub label: &'static str,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComparisonTable {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<TableRow>,
}

impl ComparisonTable {
    pub fn from_entries(entries: &[ComparisonEntry]) -> Self {
        let columns = entries
            .iter()
            .map(|e| TableColumn {
                id: e.id.clone(),
                title: e.title.clone(),
                thumbnail: e.thumbnail().map(str::to_string),
                detail_path: detail_path(e),
                price: format_price(e.price, &e.currency, e.price_unit.as_deref()),
            })
            .collect();

        let rows = vec![
            table_row(entries, "Location", |e| {
                Cell::text_or_missing(
                    e.location
                        .as_ref()
                        .map(|l| format!("{}, {}", l.city, l.country)),
                )
            }),
            table_row(entries, "Type", |e| {
                Cell::text_or_missing(e.property_type.as_deref().map(property_type_label))
            }),
            table_row(entries, "Purpose", |e| match e.purpose.as_deref() {
                Some(p) => Cell::Badge(purpose_label(p)),
                None => Cell::Text(MISSING.to_string()),
            }),
            table_row(entries, "Bedrooms", |e| Cell::text_or_missing(room_count(e.bedrooms))),
            table_row(entries, "Bathrooms", |e| Cell::text_or_missing(room_count(e.bathrooms))),
            table_row(entries, "Size", |e| {
                Cell::text_or_missing(e.size.clone().filter(|s| !s.trim().is_empty()))
            }),
            table_row(entries, "Amenities", |e| amenities_cell(&e.features)),
        ];

        Self { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

fn table_row(
    entries: &[ComparisonEntry],
    label: &'static str,
    cell: fn(&ComparisonEntry) -> Cell,
) -> TableRow {
    TableRow {
        label,
        cells: entries.iter().map(cell).collect(),
    }
}

/// Detail page path for a listing, e.g. `/property/3-bed-apartment`.
pub fn detail_path(entry: &ComparisonEntry) -> Option<String> {
    entry
        .slug
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(|slug| format!("/property/{}", slug))
}

// Zero rooms reads as "not given" in listing data.
fn room_count(count: Option<u32>) -> Option<String> {
    count.filter(|c| *c > 0).map(|c| c.to_string())
}

fn amenities_cell(features: &[String]) -> Cell {
    let items: Vec<String> = features.iter().take(AMENITY_PREVIEW).cloned().collect();
    let hidden = features.len().saturating_sub(AMENITY_PREVIEW);
    let more = (hidden > 0).then(|| format!("+{} more", hidden));
    Cell::List { items, more }
}

/// Format a price as `{currency}{amount}[ {unit}]`.
///
/// The amount uses comma digit grouping and at most three fraction digits,
/// trailing zeros dropped: `format_price(2_000_000.0, "KSh", None)` gives
/// `"KSh2,000,000"`.
pub fn format_price(price: f64, currency: &str, unit: Option<&str>) -> String {
    let amount = if price.is_finite() {
        group_digits(price)
    } else {
        price.to_string()
    };

    match unit.map(str::trim).filter(|u| !u.is_empty()) {
        Some(unit) => format!("{}{} {}", currency, amount, unit),
        None => format!("{}{}", currency, amount),
    }
}

fn group_digits(value: f64) -> String {
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    let sign = if value.is_sign_negative() && !is_zero { "-" } else { "" };

    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}

/// Display label for a backend property type.
pub fn property_type_label(property_type: &str) -> String {
    let label = match property_type {
        "apartment" => "Apartment",
        "house" => "House",
        "villa" => "Villa",
        "commercial" => "Office",
        "land" => "Land",
        other => other,
    };
    label.to_string()
}

/// Display label for a backend listing purpose.
pub fn purpose_label(purpose: &str) -> String {
    let label = match purpose {
        "rent" => "Rent",
        "sale" => "Buy",
        "stay" => "Stay",
        other => other,
    };
    label.to_string()
}
