//! Application pages

mod compare;
mod listings;
mod not_found;
mod property;

pub use compare::*;
pub use listings::*;
pub use not_found::*;
pub use property::*;
