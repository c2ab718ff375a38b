//! Structural nodes to Typst markup transpiler
//!
//! Converts classified lines into Typst markup styled after a
//! [`StyleTemplate`].

use docforge_ast::{StructuralNode, StyleTemplate};

/// Transpiler for converting structural nodes to Typst markup
pub struct Transpiler;

impl Transpiler {
    /// Transpile a titled document to Typst markup
    pub fn transpile(title: &str, nodes: &[StructuralNode], style: &StyleTemplate) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "#set document(title: \"{}\")\n",
            escape_string(title)
        ));
        output.push_str(&format!(
            "#set text(font: \"{}\")\n",
            escape_string(style.font_family)
        ));
        output.push_str(&format!(
            "#show heading: set text(fill: rgb(\"{}\"))\n\n",
            style.primary_color
        ));

        output.push_str(&format!(
            "#align(center)[#text(size: 20pt, weight: \"bold\", fill: rgb(\"{}\"))[{}]]\n",
            style.primary_color,
            escape_markup(title)
        ));
        output.push_str(&format!(
            "#line(length: 100%, stroke: rgb(\"{}\"))\n\n",
            style.secondary_color
        ));

        for node in nodes {
            output.push_str(&Self::transpile_node(node));
        }

        output
    }

    /// Transpile a single node
    fn transpile_node(node: &StructuralNode) -> String {
        match node {
            StructuralNode::Heading { level, text } => {
                let prefix = "=".repeat(*level as usize);
                format!("{} {}\n\n", prefix, escape_markup(text))
            }
            StructuralNode::BulletItem(text) => format!("- {}\n", escape_markup(text)),
            StructuralNode::Paragraph(text) => format!("{}\n\n", escape_markup(text)),
        }
    }
}

/// Escape special characters in strings for Typst
fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Escape text so it renders literally in markup mode
///
/// A leading `12.` would start a numbered list, so its dot is escaped too.
fn escape_markup(s: &str) -> String {
    let body = s.trim_start();
    let digits = body.bytes().take_while(u8::is_ascii_digit).count();
    let enum_dot = (digits > 0 && body[digits..].starts_with('.'))
        .then_some(s.len() - body.len() + digits);

    let mut out = String::with_capacity(s.len());
    for (i, c) in s.char_indices() {
        if Some(i) == enum_dot || matches!(
            c,
            '\\' | '#' | '*' | '_' | '`' | '$' | '<' | '>' | '@' | '[' | ']' | '=' | '-' | '+'
                | '/' | '~'
        ) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
