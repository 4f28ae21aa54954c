//! Word catalog: categories of secret words.
//!
//! The catalog is loaded once at startup and read-only afterwards.
//! Round setup looks categories up by id; the presentation layer lists
//! them to render its picker.

pub mod builtin;
pub mod category;
pub mod registry;

pub use builtin::builtin;
pub use category::{Category, WordEntry};
pub use registry::WordCatalog;
