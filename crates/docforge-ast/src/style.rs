//! Style templates
//!
//! A style template is the cosmetic bundle (two colors and a font family)
//! applied uniformly to one conversion run.

use serde::Serialize;

/// Named color/font bundle applied to generated documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleTemplate {
    /// Template name (e.g., "professional")
    pub name: &'static str,
    /// Primary color as `#rrggbb` (headings, accents)
    pub primary_color: &'static str,
    /// Secondary color as `#rrggbb` (rules, secondary accents)
    pub secondary_color: &'static str,
    /// Font family name
    pub font_family: &'static str,
}

impl StyleTemplate {
    /// Primary color as an OOXML hex value (`1F4E79`)
    pub fn primary_hex(&self) -> String {
        ooxml_hex(self.primary_color)
    }

    /// Secondary color as an OOXML hex value
    pub fn secondary_hex(&self) -> String {
        ooxml_hex(self.secondary_color)
    }
}

fn ooxml_hex(color: &str) -> String {
    color.trim_start_matches('#').to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: StyleTemplate = StyleTemplate {
        name: "sample",
        primary_color: "#1f4e79",
        secondary_color: "#2e75b6",
        font_family: "Calibri",
    };

    #[test]
    fn test_hex_conversion() {
        assert_eq!(SAMPLE.primary_hex(), "1F4E79");
        assert_eq!(SAMPLE.secondary_hex(), "2E75B6");
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&SAMPLE).unwrap();
        assert!(json.contains("\"font_family\":\"Calibri\""));
    }
}
