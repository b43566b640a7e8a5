//! Plain text of a `.docx` upload: the paragraphs of `word/document.xml`,
//! one per line.

use std::io::{Cursor, Read};

use anyhow::{Context, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

const DOCUMENT_PART: &str = "word/document.xml";

pub fn extract_text_from_docx(bytes: &[u8]) -> Result<String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).context("not a zip archive")?;
    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .with_context(|| format!("missing {DOCUMENT_PART}"))?
        .read_to_string(&mut xml)
        .with_context(|| format!("unreadable {DOCUMENT_PART}"))?;

    paragraphs_text(&xml)
}

/// Joins the text runs (`w:t`) of every paragraph (`w:p`), including those
/// nested in tables. Tabs and line breaks inside a run are kept.
fn paragraphs_text(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_run_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.local_name().as_ref() == b"t" => in_run_text = true,
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_run_text = false,
                b"p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"tab" => current.push('\t'),
                b"br" | b"cr" => current.push('\n'),
                b"p" => paragraphs.push(String::new()),
                _ => {}
            },
            Event::Text(t) if in_run_text => current.push_str(&t.unescape()?),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs.join("\n"))
}

#[cfg(test)]
pub(crate) mod tests {
    use std::io::Write;

    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    use super::*;

    /// A minimal `.docx` whose document body is `body`.
    pub(crate) fn docx_with(body: &str) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file(DOCUMENT_PART, SimpleFileOptions::default())
            .unwrap();
        write!(
            writer,
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
        )
        .unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_paragraphs_become_lines() {
        let bytes = docx_with(
            "<w:p><w:r><w:t>Experience</w:t></w:r></w:p>\
             <w:p><w:r><w:t xml:space=\"preserve\">Built </w:t></w:r><w:r><w:t>Rust services</w:t></w:r></w:p>",
        );
        assert_eq!(
            extract_text_from_docx(&bytes).unwrap(),
            "Experience\nBuilt Rust services"
        );
    }

    #[test]
    fn test_tabs_breaks_and_entities() {
        let bytes = docx_with(
            "<w:p><w:r><w:t>R&amp;D</w:t><w:tab/><w:t>2019</w:t><w:br/><w:t>Lead</w:t></w:r></w:p>\
             <w:p/>\
             <w:tbl><w:tr><w:tc><w:p><w:r><w:t>Python</w:t></w:r></w:p></w:tc></w:tr></w:tbl>",
        );
        assert_eq!(
            extract_text_from_docx(&bytes).unwrap(),
            "R&D\t2019\nLead\n\nPython"
        );
    }

    #[test]
    fn test_text_outside_runs_is_ignored() {
        let bytes = docx_with(
            "<w:p><w:pPr><w:pStyle w:val=\"Heading1\"/></w:pPr><w:r><w:t>Skills</w:t></w:r></w:p>",
        );
        assert_eq!(extract_text_from_docx(&bytes).unwrap(), "Skills");
    }

    #[test]
    fn test_not_a_zip_is_an_error() {
        assert!(extract_text_from_docx(b"PK\x03\x04").is_err());
    }

    #[test]
    fn test_zip_without_document_is_an_error() {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/styles.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<w:styles/>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let err = extract_text_from_docx(&bytes).unwrap_err();
        assert!(err.to_string().contains(DOCUMENT_PART));
    }
}
