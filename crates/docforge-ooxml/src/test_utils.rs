//! Shared test utilities for docforge-ooxml

use std::io::Cursor;

use docforge_ast::StyleTemplate;
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::archive::OoxmlArchive;

/// The default template, without going through the registry
pub fn professional() -> StyleTemplate {
    StyleTemplate {
        name: "professional",
        primary_color: "#1f4e79",
        secondary_color: "#2e75b6",
        font_family: "Calibri",
    }
}

/// Read one part of a generated package as a string
pub fn read_part(package: &[u8], path: &str) -> String {
    let archive = OoxmlArchive::from_reader(Cursor::new(package)).expect("valid ZIP package");
    archive.require_string(path).unwrap()
}

/// Panic unless `xml` parses to the end with matching tags
pub fn assert_well_formed(xml: &str) {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!(
                "malformed XML at position {}: {}",
                reader.buffer_position(),
                e
            ),
        }
    }
}
