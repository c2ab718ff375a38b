//! Package properties (`docProps/core.xml`, `docProps/app.xml`)

use chrono::{DateTime, SecondsFormat, Utc};
use docforge_ast::DocumentMetadata;

use crate::xml::{escape_xml, XML_DECLARATION};

/// Path of the core properties part
pub const CORE_PROPERTIES_PATH: &str = "docProps/core.xml";

/// Path of the extended properties part
pub const APP_PROPERTIES_PATH: &str = "docProps/app.xml";

/// Creator recorded when metadata is supplied without an author
pub const DEFAULT_CREATOR: &str = "Generated";

/// Application name written to `docProps/app.xml`
pub const APPLICATION_NAME: &str = "docforge";

/// Dublin Core properties of a package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreProperties {
    /// Document title
    pub title: Option<String>,
    /// Author
    pub creator: Option<String>,
    /// Subject
    pub subject: Option<String>,
    /// Creation and modification timestamp
    pub created: DateTime<Utc>,
}

impl CoreProperties {
    /// Properties with a title, stamped with the current time
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            creator: None,
            subject: None,
            created: Utc::now(),
        }
    }

    /// Apply user metadata: creator falls back to [`DEFAULT_CREATOR`],
    /// subject to an empty string
    pub fn with_metadata(mut self, metadata: &DocumentMetadata) -> Self {
        self.creator = Some(
            metadata
                .author
                .clone()
                .unwrap_or_else(|| DEFAULT_CREATOR.to_string()),
        );
        self.subject = Some(metadata.subject.clone().unwrap_or_default());
        self
    }

    /// Override the timestamp
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = created;
        self
    }

    /// Serialize to `docProps/core.xml`
    pub fn to_xml(&self) -> String {
        let mut xml = String::from(XML_DECLARATION);
        xml.push_str(
            r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
        );

        if let Some(t) = &self.title {
            xml.push_str(&format!("<dc:title>{}</dc:title>", escape_xml(t)));
        }
        if let Some(s) = &self.subject {
            xml.push_str(&format!("<dc:subject>{}</dc:subject>", escape_xml(s)));
        }
        if let Some(c) = &self.creator {
            xml.push_str(&format!("<dc:creator>{}</dc:creator>", escape_xml(c)));
        }

        let stamp = self.created.to_rfc3339_opts(SecondsFormat::Secs, true);
        xml.push_str(&format!(
            "<dcterms:created xsi:type=\"dcterms:W3CDTF\">{}</dcterms:created>",
            stamp
        ));
        xml.push_str(&format!(
            "<dcterms:modified xsi:type=\"dcterms:W3CDTF\">{}</dcterms:modified>",
            stamp
        ));

        xml.push_str("</cp:coreProperties>");
        xml
    }
}

/// Serialize `docProps/app.xml`
pub fn app_properties_xml() -> String {
    format!(
        "{}<Properties xmlns=\"http://schemas.openxmlformats.org/officeDocument/2006/extended-properties\" xmlns:vt=\"http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes\"><Application>{}</Application><AppVersion>{}</AppVersion></Properties>",
        XML_DECLARATION,
        APPLICATION_NAME,
        app_version()
    )
}

/// `AppVersion` must look like `XX.YYYY`
fn app_version() -> String {
    let major: u32 = env!("CARGO_PKG_VERSION_MAJOR").parse().unwrap_or(1);
    let minor: u32 = env!("CARGO_PKG_VERSION_MINOR").parse().unwrap_or(0);
    format!("{:02}.{:04}", major, minor)
}
