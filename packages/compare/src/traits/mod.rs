//! Core trait abstractions.
//!
//! - [`storage::KeyValueStorage`]: raw string storage (browser, file, memory)
//! - [`store::CompareStore`]: typed load/save of a comparison set

pub mod storage;
pub mod store;
