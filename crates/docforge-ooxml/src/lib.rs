//! # docforge-ooxml
//!
//! OOXML (Office Open XML) generation for docforge.
//!
//! This crate provides:
//! - [`DocxWriter`]: word-processor documents from structural nodes
//! - [`XlsxWriter`]: single-sheet workbooks from table rows
//! - the package plumbing both share ([`OoxmlArchive`], [`Relationships`],
//!   [`ContentTypes`], [`CoreProperties`]), also used by `docforge-pptx`
//!
//! ## Example: Writing a Document
//!
//! ```no_run
//! use docforge_ast::{StructuralNode, StyleTemplate};
//! use docforge_ooxml::DocxWriter;
//!
//! let style = StyleTemplate {
//!     name: "professional",
//!     primary_color: "#1f4e79",
//!     secondary_color: "#2e75b6",
//!     font_family: "Calibri",
//! };
//! let nodes = vec![StructuralNode::heading(1, "Intro"), StructuralNode::paragraph("Hello")];
//!
//! let mut writer = DocxWriter::new("Report", &style);
//! writer.write_to_file(&nodes, std::path::Path::new("report.docx"))?;
//! # Ok::<(), docforge_ooxml::OoxmlError>(())
//! ```

pub mod archive;
pub mod content_types;
pub mod error;
pub mod properties;
pub mod relationships;
pub mod styles;
pub mod writer;
pub mod xlsx;
pub mod xml;

#[cfg(test)]
mod test_utils;

pub use archive::OoxmlArchive;
pub use content_types::ContentTypes;
pub use error::{OoxmlError, Result};
pub use properties::CoreProperties;
pub use relationships::Relationships;
pub use writer::DocxWriter;
pub use xlsx::{sheet_name_for, XlsxWriter};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
