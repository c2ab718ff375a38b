//! Markdown to styled HTML
//!
//! The HTML page is the hand-off format for every external converter: a
//! small stylesheet derived from the [`StyleTemplate`], an `<h1>` title and
//! the CommonMark rendering of the content.

use docforge_ast::StyleTemplate;
use pulldown_cmark::{html, Options, Parser};

/// Stylesheet for a template
pub fn stylesheet(style: &StyleTemplate) -> String {
    format!(
        "body {{ font-family: {font}, sans-serif; margin: 40px; line-height: 1.6; }}\n\
         h1, h2, h3 {{ color: {primary}; }}\n\
         h1 {{ border-bottom: 2px solid {secondary}; padding-bottom: 10px; }}\n\
         code {{ background: #f4f4f4; padding: 2px 6px; border-radius: 3px; }}\n\
         pre {{ background: #f4f4f4; padding: 15px; border-radius: 5px; overflow-x: auto; }}\n",
        font = style.font_family,
        primary = style.primary_color,
        secondary = style.secondary_color,
    )
}

/// Render markdown content with tables and fenced code enabled
pub fn markdown_to_html(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(content, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Render the complete HTML page
pub fn render_page(title: &str, content: &str, style: &StyleTemplate) -> String {
    let title = escape_html(title);
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>\n{css}</style>\n</head>\n<body>\n<h1>{title}</h1>\n{body}</body>\n</html>\n",
        title = title,
        css = stylesheet(style),
        body = markdown_to_html(content),
    )
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
