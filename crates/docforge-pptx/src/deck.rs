//! Slide deck assembly.
//!
//! A deck is always: a title slide carrying the run title, then an
//! optional overview slide, then one slide per section in split order.

use docforge_ast::Section;
use docforge_core::sections::{split_sections, SectionSplit};

use crate::slide::Slide;

/// Ordered slides of one presentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Slides in presentation order
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Build a deck from a title and already-split sections
    pub fn from_sections<'a>(
        title: &str,
        sections: impl IntoIterator<Item = &'a Section>,
    ) -> Self {
        let mut slides = vec![Slide::title_slide(title)];
        slides.extend(sections.into_iter().map(Slide::from));
        Self { slides }
    }

    /// Split raw content on `"\n## "` and build a deck from it
    pub fn from_content(title: &str, content: &str) -> Self {
        let split: SectionSplit = split_sections(content);
        log::debug!(
            "Split content into {} sections (overview: {})",
            split.sections.len(),
            split.overview.is_some()
        );
        Self::from_sections(title, split.iter())
    }

    /// Number of slides
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the deck has no slides
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Slide titles in order
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.slides.iter().map(|s| s.title.as_str())
    }
}
