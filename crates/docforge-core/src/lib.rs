//! docforge-core - Parsers, templates and settings for docforge
//!
//! This crate turns raw input text into the shapes the format emitters
//! consume:
//!
//! - [`markdown::parse_lines`] classifies lines into structural nodes
//!   (word-processor and PDF output)
//! - [`tabular::parse_table`] splits lines into spreadsheet rows
//! - [`sections::split_sections`] cuts content into presentation sections
//!
//! It also holds the fixed [`template::TemplateRegistry`], metadata JSON
//! parsing, the [`ConversionResult`] reported to the user and the TOML
//! [`Settings`].
//!
//! # Example
//!
//! ```
//! use docforge_core::{markdown, TemplateRegistry};
//!
//! let nodes = markdown::parse_lines("# Title\n\nBody");
//! assert_eq!(nodes.len(), 2);
//!
//! let style = TemplateRegistry::resolve("academic");
//! assert_eq!(style.font_family, "Times New Roman");
//! ```

pub mod config;
pub mod error;
pub mod markdown;
pub mod metadata;
pub mod result;
pub mod sections;
pub mod tabular;
pub mod template;

pub use config::Settings;
pub use error::{CoreError, Result};
pub use metadata::parse_metadata;
pub use result::ConversionResult;
pub use sections::{split_sections, SectionSplit};
pub use template::TemplateRegistry;

// Re-export the shared model so emitters need a single import path
pub use docforge_ast::{
    DocumentFormat, DocumentMetadata, Section, StructuralNode, StyleTemplate, TableRow,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
