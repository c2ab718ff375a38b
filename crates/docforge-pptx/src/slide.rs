//! Slide data structures.

use docforge_ast::Section;

use crate::layout::SlideLayout;

/// A single slide: a title plus optional body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    /// Layout the slide is based on
    pub layout: SlideLayout,
    /// Slide title
    pub title: String,
    /// Body text; each line becomes one paragraph
    pub body: String,
}

impl Slide {
    /// Create a title slide (centered title, no body)
    pub fn title_slide(title: impl Into<String>) -> Self {
        Self {
            layout: SlideLayout::Title,
            title: title.into(),
            body: String::new(),
        }
    }

    /// Create a title-and-content slide
    pub fn content_slide(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            layout: SlideLayout::TitleAndContent,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Check if this is a title slide
    pub fn is_title_slide(&self) -> bool {
        self.layout == SlideLayout::Title
    }

    /// Whether a body shape should be emitted
    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }

    /// Body paragraphs, one per line
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.body.split('\n').filter(|_| self.has_body())
    }
}

impl From<&Section> for Slide {
    fn from(section: &Section) -> Self {
        Self::content_slide(section.title.clone(), section.body.clone())
    }
}
