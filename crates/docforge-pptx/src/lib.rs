//! # docforge-pptx
//!
//! PowerPoint (PPTX) generation from sectioned text.
//!
//! Content is split on `## ` headings into a [`Deck`]: a title slide, an
//! optional overview slide, then one title-and-content slide per section.
//! The deck is rendered by [`PptxWriter`] into a standalone package whose
//! theme colors and fonts come from a [`StyleTemplate`](docforge_ast::StyleTemplate).
//!
//! ## Example
//!
//! ```rust
//! use docforge_core::TemplateRegistry;
//! use docforge_pptx::{Deck, PptxWriter};
//!
//! let deck = Deck::from_content("Quarterly Review", "Intro\n## Results\nUp 4%");
//! let mut writer = PptxWriter::new(TemplateRegistry::resolve("executive"))
//!     .with_title("Quarterly Review");
//! writer.add_deck(deck);
//!
//! let bytes = writer.generate().unwrap();
//! assert!(!bytes.is_empty());
//! ```

pub mod deck;
pub mod error;
pub mod layout;
pub mod slide;
pub mod theme;
pub mod writer;

// Re-exports
pub use deck::Deck;
pub use error::{PptxError, Result};
pub use layout::{Frame, SlideLayout};
pub use slide::Slide;
pub use writer::PptxWriter;

/// PPTX-related constants
pub mod constants {
    /// Default slide width in EMU (914400 EMU = 1 inch, standard 10" width)
    pub const DEFAULT_SLIDE_WIDTH_EMU: i64 = 9_144_000;

    /// Default slide height in EMU (standard 7.5" height for 4:3)
    pub const DEFAULT_SLIDE_HEIGHT_EMU: i64 = 6_858_000;

    /// EMU per inch
    pub const EMU_PER_INCH: i64 = 914_400;

    /// EMU per point
    pub const EMU_PER_POINT: i64 = 12_700;

    /// PresentationML namespace
    pub const NS_PRESENTATION: &str =
        "http://schemas.openxmlformats.org/presentationml/2006/main";

    /// DrawingML namespace
    pub const NS_DRAWING: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";

    /// Relationships namespace
    pub const NS_RELATIONSHIPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

    pub const PRESENTATION_PATH: &str = "ppt/presentation.xml";
    pub const PRES_PROPS_PATH: &str = "ppt/presProps.xml";
    pub const VIEW_PROPS_PATH: &str = "ppt/viewProps.xml";
    pub const TABLE_STYLES_PATH: &str = "ppt/tableStyles.xml";
    pub const THEME_PATH: &str = "ppt/theme/theme1.xml";
    pub const SLIDE_MASTER_PATH: &str = "ppt/slideMasters/slideMaster1.xml";

    /// Slide relationship type
    pub const REL_TYPE_SLIDE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";

    /// Slide layout relationship type
    pub const REL_TYPE_SLIDE_LAYOUT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";

    /// Slide master relationship type
    pub const REL_TYPE_SLIDE_MASTER: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";

    pub const REL_TYPE_PRES_PROPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/presProps";

    pub const REL_TYPE_VIEW_PROPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/viewProps";

    pub const REL_TYPE_TABLE_STYLES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/tableStyles";

    pub const CT_PRESENTATION: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";
    pub const CT_PRES_PROPS: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.presProps+xml";
    pub const CT_VIEW_PROPS: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.viewProps+xml";
    pub const CT_TABLE_STYLES: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.tableStyles+xml";
    pub const CT_SLIDE_MASTER: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml";
    pub const CT_SLIDE_LAYOUT: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml";
    pub const CT_SLIDE: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.slide+xml";
}
