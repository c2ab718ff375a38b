//! Structural nodes
//!
//! One node is produced per non-blank input line by the markdown-ish line
//! parser. Nodes carry no identity beyond their position in the sequence.

use serde::{Deserialize, Serialize};

/// A classified line of input text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StructuralNode {
    /// A heading (`# `, `## `, `### `)
    Heading {
        /// Heading level (1-3, where 1 is the highest)
        level: u8,
        /// Heading text without the marker
        text: String,
    },
    /// A bullet item (`- ` or `* `)
    BulletItem(String),
    /// Any other non-blank line, kept as-is
    Paragraph(String),
}

impl StructuralNode {
    /// Create a heading node
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::Heading {
            level,
            text: text.into(),
        }
    }

    /// Create a bullet item node
    pub fn bullet(text: impl Into<String>) -> Self {
        Self::BulletItem(text.into())
    }

    /// Create a paragraph node
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph(text.into())
    }

    /// The text carried by this node
    pub fn text(&self) -> &str {
        match self {
            Self::Heading { text, .. } => text,
            Self::BulletItem(text) | Self::Paragraph(text) => text,
        }
    }

    /// Heading level, if this node is a heading
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            Self::Heading { level, .. } => Some(*level),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(
            StructuralNode::heading(2, "Intro"),
            StructuralNode::Heading {
                level: 2,
                text: "Intro".to_string()
            }
        );
        assert_eq!(
            StructuralNode::bullet("item"),
            StructuralNode::BulletItem("item".to_string())
        );
    }

    #[test]
    fn test_text_and_level() {
        let heading = StructuralNode::heading(3, "Deep");
        assert_eq!(heading.text(), "Deep");
        assert_eq!(heading.heading_level(), Some(3));

        let para = StructuralNode::paragraph("  indented");
        assert_eq!(para.text(), "  indented");
        assert_eq!(para.heading_level(), None);
    }

    #[test]
    fn test_serde_roundtrip() {
        let node = StructuralNode::heading(1, "Title");
        let json = serde_json::to_string(&node).unwrap();
        let back: StructuralNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }
}
