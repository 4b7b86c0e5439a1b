// Matroska chapter XML rendering.
use std::io::Cursor;
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::Result;
use crate::parser::Chapter;

/// Render the full chapter document into bytes: XML declaration, then
/// `<Chapters>` holding one `<EditionEntry>` with one `<ChapterAtom>` per
/// record. Time strings and titles pass through verbatim (XML-escaped).
pub fn render(chapters: &[Chapter]) -> Result<Vec<u8>> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new("Chapters")))?;
    writer.write_event(Event::Start(BytesStart::new("EditionEntry")))?;

    for chapter in chapters {
        write_atom(&mut writer, chapter)?;
    }

    writer.write_event(Event::End(BytesEnd::new("EditionEntry")))?;
    writer.write_event(Event::End(BytesEnd::new("Chapters")))?;

    Ok(writer.into_inner().into_inner())
}

/// Write the rendered document in a single call, so a failure anywhere
/// earlier in the run never leaves a truncated file behind.
pub fn write_file(path: &Path, xml: &[u8]) -> Result<()> {
    std::fs::write(path, xml)?;
    Ok(())
}

fn write_atom<W: std::io::Write>(writer: &mut Writer<W>, chapter: &Chapter) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("ChapterAtom")))?;

    write_text_element(writer, "ChapterTimeStart", &chapter.time_start)?;
    write_text_element(writer, "ChapterTimeEnd", &chapter.time_end)?;

    writer.write_event(Event::Start(BytesStart::new("ChapterDisplay")))?;
    write_text_element(writer, "ChapterString", &chapter.title)?;
    write_text_element(writer, "ChapterLanguage", "eng")?;
    writer.write_event(Event::End(BytesEnd::new("ChapterDisplay")))?;

    writer.write_event(Event::End(BytesEnd::new("ChapterAtom")))?;
    Ok(())
}

fn write_text_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Chapter> {
        vec![
            Chapter {
                time_start: "0:00".to_string(),
                time_end: "0:04".to_string(),
                title: "Wii Menu".to_string(),
            },
            Chapter {
                time_start: "0:04".to_string(),
                time_end: "02:15:24".to_string(),
                title: "Star Festival".to_string(),
            },
        ]
    }

    #[test]
    fn test_render_structure() {
        let xml = String::from_utf8(render(&sample()).unwrap()).unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<Chapters>"));
        assert!(xml.contains("<EditionEntry>"));
        assert_eq!(xml.matches("<ChapterAtom>").count(), 2);
        assert!(xml.contains("<ChapterTimeStart>0:00</ChapterTimeStart>"));
        assert!(xml.contains("<ChapterTimeEnd>02:15:24</ChapterTimeEnd>"));
        assert!(xml.contains("<ChapterString>Wii Menu</ChapterString>"));
        assert!(xml.contains("<ChapterLanguage>eng</ChapterLanguage>"));
        assert!(xml.ends_with("</Chapters>"));
    }

    #[test]
    fn test_render_escapes_titles() {
        let chapters = vec![Chapter {
            time_start: "0:00".to_string(),
            time_end: "1:00".to_string(),
            title: "Bits & <Pieces>".to_string(),
        }];

        let xml = String::from_utf8(render(&chapters).unwrap()).unwrap();
        assert!(xml.contains("Bits &amp; &lt;Pieces&gt;"));
    }

    #[test]
    fn test_render_empty_edition() {
        let xml = String::from_utf8(render(&[]).unwrap()).unwrap();
        assert!(xml.contains("<EditionEntry>"));
        assert!(!xml.contains("<ChapterAtom>"));
    }
}
