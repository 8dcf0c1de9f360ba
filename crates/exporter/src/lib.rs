//! Persistence of chart documents and their composition into one combined
//! document.
//!
//! Documents are stored as paged JSON files: each exported chart is a
//! single-page document, and the combined document holds the first page of
//! every chart in identifier order.

pub mod error;
pub mod json;
pub mod merger;
pub mod paged;

pub use error::ExportError;
pub use json::{JsonExporter, JsonPageStore};
pub use merger::{merge_order, DocumentMerger, PageStore};
pub use paged::{Page, PagedDocument};

/// Extension of every document written by this crate.
pub const DOCUMENT_EXTENSION: &str = "json";
