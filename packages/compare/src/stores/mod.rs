//! Storage implementations for the comparison list.
//!
//! Available backends:
//! - `MemoryStorage` - In-memory storage (tests, server-side rendering)
//! - `FileStorage` - One JSON file per key under a directory
//! - `JsonStore` - Adapts any `KeyValueStorage` into a `CompareStore`
//!
//! The browser `localStorage` backend lives in the web package.

pub mod file;
pub mod json;
pub mod memory;

pub use file::FileStorage;
pub use json::JsonStore;
pub use memory::MemoryStorage;
