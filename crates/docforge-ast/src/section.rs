//! Presentation sections

use serde::{Deserialize, Serialize};

/// Maximum number of characters kept in a section body
pub const MAX_BODY_CHARS: usize = 500;

/// Title used for the untitled leading section
pub const OVERVIEW_TITLE: &str = "Overview";

/// A titled block of presentation content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Slide title
    pub title: String,
    /// Slide body, at most [`MAX_BODY_CHARS`] characters
    pub body: String,
}

impl Section {
    /// Create a section, truncating the body to [`MAX_BODY_CHARS`] characters
    pub fn new(title: impl Into<String>, body: &str) -> Self {
        Self {
            title: title.into(),
            body: truncate_chars(body, MAX_BODY_CHARS),
        }
    }

    /// Create the overview section
    pub fn overview(body: &str) -> Self {
        Self::new(OVERVIEW_TITLE, body)
    }

    /// Whether the body is empty
    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }
}

/// Keep at most `max` characters (not bytes), with no marker appended
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("hello", 3), "hel");
        assert_eq!(truncate_chars("hi", 3), "hi");
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("", 5), "");
    }

    #[test]
    fn test_section_body_limit() {
        let long = "x".repeat(MAX_BODY_CHARS + 20);
        let section = Section::new("Title", &long);
        assert_eq!(section.body.chars().count(), MAX_BODY_CHARS);
        assert!(section.has_body());
    }

    #[test]
    fn test_overview_title() {
        let section = Section::overview("intro");
        assert_eq!(section.title, OVERVIEW_TITLE);
        assert_eq!(section.body, "intro");
    }
}
