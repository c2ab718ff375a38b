//! Section splitter for presentations
//!
//! Content is cut on the literal separator `"\n## "`. The text before the
//! first separator may become an overview section; every following chunk is
//! a titled section whose title is its first line.
//!
//! A `## ` at the very start of the content has no preceding newline, so it
//! is not a split point and ends up in the overview candidate.

use docforge_ast::Section;

/// Literal separator between sections
pub const SECTION_SEPARATOR: &str = "\n## ";

/// Result of splitting content into sections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionSplit {
    /// Leading untitled content, if any
    pub overview: Option<Section>,
    /// Titled sections in input order
    pub sections: Vec<Section>,
}

impl SectionSplit {
    /// Iterate the overview (when present) followed by every section
    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.overview.iter().chain(self.sections.iter())
    }

    /// Number of content sections, overview included
    pub fn len(&self) -> usize {
        self.sections.len() + usize::from(self.overview.is_some())
    }

    /// Whether neither an overview nor any section was found
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Split `content` into an optional overview and titled sections
pub fn split_sections(content: &str) -> SectionSplit {
    let mut chunks = content.split(SECTION_SEPARATOR);

    let overview = chunks.next().and_then(|first| {
        let trimmed = first.trim();
        if trimmed.is_empty() || first.starts_with("# ") {
            None
        } else {
            Some(Section::overview(trimmed))
        }
    });

    let sections = chunks.map(parse_chunk).collect();

    SectionSplit { overview, sections }
}

fn parse_chunk(chunk: &str) -> Section {
    let (first_line, rest) = chunk.split_once('\n').unwrap_or((chunk, ""));
    let title = first_line.strip_prefix("## ").unwrap_or(first_line).trim();
    Section::new(title, rest.trim())
}
