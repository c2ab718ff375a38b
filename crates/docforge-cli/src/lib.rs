//! docforge CLI - Command-line interface library
//!
//! Converts a text or markdown file into one of four formats:
//! - `docx`: headings, bullets and paragraphs as a styled Word document
//! - `xlsx`: delimited lines as a spreadsheet with a bold header row
//! - `pptx`: `## ` sections as slides
//! - `pdf`: markdown rendered to HTML and handed to an external converter
//!
//! # Binary Usage
//!
//! ```bash
//! docforge docx notes.md --title "Meeting Notes" --template academic
//! docforge xlsx data.csv -o report.xlsx
//! docforge pptx talk.md --template executive
//! docforge docx report.md --metadata '{"author": "Ann", "subject": "Q3"}'
//! docforge pdf README.md -vv
//! ```

pub mod app;
pub mod convert;

// Re-export main entry point and types
pub use app::{run_cli, OutputFormat};
pub use convert::{convert, unavailable, ConversionRequest};
