//! Markdown-ish line parser
//!
//! Each physical line becomes at most one [`StructuralNode`]. Classification
//! is a prefix match on the right-trimmed line, checked in order:
//!
//! | Prefix | Node |
//! |--------|------|
//! | `# `   | Heading level 1 |
//! | `## `  | Heading level 2 |
//! | `### ` | Heading level 3 |
//! | `- ` / `* ` | Bullet item |
//! | other non-blank | Paragraph |
//!
//! Leading whitespace is kept, so an indented `# ` line is a paragraph.
//! There is no nesting, no multi-line paragraph joining and no inline markup.

use docforge_ast::StructuralNode;

const HEADING_PREFIXES: [(&str, u8); 3] = [("# ", 1), ("## ", 2), ("### ", 3)];
const BULLET_PREFIXES: [&str; 2] = ["- ", "* "];

/// Classify every line of `text`
pub fn parse_lines(text: &str) -> Vec<StructuralNode> {
    text.split('\n').filter_map(classify_line).collect()
}

/// Classify a single line; blank lines yield `None`
pub fn classify_line(raw: &str) -> Option<StructuralNode> {
    let line = raw.trim_end();

    for (prefix, level) in HEADING_PREFIXES {
        if let Some(rest) = line.strip_prefix(prefix) {
            return Some(StructuralNode::heading(level, rest));
        }
    }

    for prefix in BULLET_PREFIXES {
        if let Some(rest) = line.strip_prefix(prefix) {
            return Some(StructuralNode::bullet(rest));
        }
    }

    if line.trim().is_empty() {
        None
    } else {
        Some(StructuralNode::paragraph(line))
    }
}
