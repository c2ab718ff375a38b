//! Style template registry
//!
//! The set of templates is fixed at compile time. Lookups never fail:
//! an unknown name resolves to the default template.

use docforge_ast::StyleTemplate;

/// Name of the template used when none (or an unknown one) is requested
pub const DEFAULT_TEMPLATE: &str = "professional";

static TEMPLATES: [StyleTemplate; 4] = [
    StyleTemplate {
        name: "professional",
        primary_color: "#1f4e79",
        secondary_color: "#2e75b6",
        font_family: "Calibri",
    },
    StyleTemplate {
        name: "academic",
        primary_color: "#2f3e46",
        secondary_color: "#354f52",
        font_family: "Times New Roman",
    },
    StyleTemplate {
        name: "executive",
        primary_color: "#2d3436",
        secondary_color: "#74b9ff",
        font_family: "Arial",
    },
    StyleTemplate {
        name: "casual",
        primary_color: "#6c5ce7",
        secondary_color: "#a29bfe",
        font_family: "Arial",
    },
];

/// Lookup over the built-in style templates
pub struct TemplateRegistry;

impl TemplateRegistry {
    /// Find a template by exact name
    pub fn get(name: &str) -> Option<&'static StyleTemplate> {
        TEMPLATES.iter().find(|t| t.name == name)
    }

    /// Find a template by name, falling back to the default
    pub fn resolve(name: &str) -> &'static StyleTemplate {
        Self::get(name).unwrap_or_else(|| {
            log::debug!(
                "Unknown template '{}', using '{}'",
                name,
                DEFAULT_TEMPLATE
            );
            Self::default_template()
        })
    }

    /// The default template
    pub fn default_template() -> &'static StyleTemplate {
        &TEMPLATES[0]
    }

    /// All template names, in registry order
    pub fn names() -> impl Iterator<Item = &'static str> {
        TEMPLATES.iter().map(|t| t.name)
    }

    /// All templates, in registry order
    pub fn all() -> &'static [StyleTemplate] {
        &TEMPLATES
    }
}
