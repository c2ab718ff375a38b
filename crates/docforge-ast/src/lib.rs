//! docforge-ast - Shared document model
//!
//! This crate provides the types passed between the docforge parsers and
//! the format emitters: structural nodes for word-processor and PDF output,
//! table rows for spreadsheets, sections for presentations, and the style
//! template applied to every run.

pub mod format;
pub mod metadata;
pub mod node;
pub mod section;
pub mod style;
pub mod table;

pub use format::{DocumentFormat, UnknownFormat};
pub use metadata::DocumentMetadata;
pub use node::StructuralNode;
pub use section::Section;
pub use style::StyleTemplate;
pub use table::TableRow;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
