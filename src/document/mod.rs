//! Document parsing and data structures module
//!
//! This module provides functionality for reading Microsoft Word (.docx)
//! documents and extracting the paragraphs that contain tracked changes.

pub(crate) mod io;
pub mod loader;
pub mod models;
pub mod revisions;

// Re-export the models and the extraction entry points
pub use io::FormatError;
pub use loader::load_document;
pub use models::*;
pub use revisions::{collect_changed_paragraphs, reconstruct};
