//! Package-level tests for generated presentations.

use std::io::{Cursor, Read};

use docforge_core::TemplateRegistry;
use docforge_ooxml::xml::is_xml_char;
use docforge_pptx::{Deck, PptxWriter};
use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

const CONTENT: &str = "Welcome to the review.\n## Revenue\nUp 4%\nEurope strongest\n## Costs\nFlat\n## Next Steps\n";

fn build(title: &str, content: &str) -> Vec<u8> {
    let deck = Deck::from_content(title, content);
    let mut writer = PptxWriter::new(TemplateRegistry::resolve("professional")).with_title(title);
    writer.add_deck(deck);
    writer.generate().unwrap()
}

fn read_part(archive: &mut ZipArchive<Cursor<&[u8]>>, name: &str) -> String {
    let mut file = archive.by_name(name).unwrap();
    let mut xml = String::new();
    file.read_to_string(&mut xml).unwrap();
    xml
}

/// Collect the text runs of a slide
fn slide_texts(xml: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    let mut texts = Vec::new();
    let mut in_text = false;
    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) if e.name().as_ref() == b"a:t" => in_text = true,
            Event::End(e) if e.name().as_ref() == b"a:t" => in_text = false,
            Event::Text(t) if in_text => texts.push(t.unescape().unwrap().into_owned()),
            Event::Eof => break,
            _ => {}
        }
    }
    texts
}

fn assert_well_formed(xml: &str) {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!("malformed XML: {e}"),
        }
    }
}

#[test]
fn one_slide_part_per_planned_slide_in_order() {
    let bytes = build("Review", CONTENT);
    let mut archive = ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();

    let expected = ["Review", "Overview", "Revenue", "Costs", "Next Steps"];
    for (i, title) in expected.iter().enumerate() {
        let xml = read_part(&mut archive, &format!("ppt/slides/slide{}.xml", i + 1));
        let texts = slide_texts(&xml);
        assert_eq!(texts.first().map(String::as_str), Some(*title));
    }
    assert!(archive.by_name("ppt/slides/slide6.xml").is_err());
}

#[test]
fn section_body_lines_become_paragraphs() {
    let bytes = build("Review", CONTENT);
    let mut archive = ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();

    let xml = read_part(&mut archive, "ppt/slides/slide3.xml");
    assert_eq!(slide_texts(&xml), vec!["Revenue", "Up 4%", "Europe strongest"]);

    // Trailing section has a title only
    let xml = read_part(&mut archive, "ppt/slides/slide5.xml");
    assert_eq!(slide_texts(&xml), vec!["Next Steps"]);
    assert!(!xml.contains("Content Placeholder"));
}

#[test]
fn every_xml_part_is_well_formed() {
    let bytes = build("A & B <review>", CONTENT);
    let mut archive = ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();

    let names: Vec<String> = archive.file_names().map(String::from).collect();
    assert!(names.iter().any(|n| n == "[Content_Types].xml"));
    assert!(names.iter().any(|n| n == "ppt/slideMasters/slideMaster1.xml"));
    assert!(names.iter().any(|n| n == "ppt/slideLayouts/slideLayout2.xml"));

    for name in names {
        let xml = read_part(&mut archive, &name);
        assert_well_formed(&xml);
    }
}

#[test]
fn heading_only_content_has_no_overview() {
    let bytes = build("Solo", "# Solo\n## Only\ntext");
    let mut archive = ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();

    let xml = read_part(&mut archive, "ppt/slides/slide2.xml");
    assert_eq!(slide_texts(&xml), vec!["Only", "text"]);
    assert!(archive.by_name("ppt/slides/slide3.xml").is_err());
}

#[test]
fn write_to_file_produces_archive() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deck.pptx");

    let mut writer = PptxWriter::new(TemplateRegistry::resolve("casual"));
    writer.add_deck(Deck::from_content("File", "Body"));
    writer.write_to_file(&path).unwrap();

    let file = std::fs::File::open(&path).unwrap();
    let mut archive = ZipArchive::new(file).unwrap();
    assert!(archive.by_name("ppt/slides/slide2.xml").is_ok());
}

#[test]
fn control_characters_dropped_from_slides() {
    let bytes = build("Deck\u{0b}Title", "intro\u{0c}\n## Agenda\u{1}\na\u{0b}b\n");
    let mut archive = ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();

    let names: Vec<String> = archive.file_names().map(String::from).collect();
    for name in names {
        let xml = read_part(&mut archive, &name);
        assert!(xml.chars().all(is_xml_char), "{name} contains a character XML forbids");
        assert_well_formed(&xml);
    }

    let xml = read_part(&mut archive, "ppt/slides/slide3.xml");
    assert_eq!(slide_texts(&xml), vec!["Agenda", "ab"]);
}
