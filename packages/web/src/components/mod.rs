//! Reusable UI components

mod compare_widget;
mod layout;
mod notice;
mod property_card;

pub use compare_widget::*;
pub use layout::*;
pub use notice::*;
pub use property_card::*;
