//! Minimal .pptx writer for tests
//!
//! Each slide gets its own layout part holding the slide's layout shapes.
//! Only the parts read by [`crate::PptxDocument`] are written.

use std::io::{Cursor, Write};

use shared_types::SlideContent;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::error::PptxError;

const NAMESPACES: &str = r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#;
const PACKAGE_RELS_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const SLIDE_REL_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
const LAYOUT_REL_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn shape_tree(texts: &[String]) -> String {
    let shapes: String = texts
        .iter()
        .map(|text| {
            let paragraphs: String = text
                .split('\n')
                .map(|line| format!("<a:p><a:r><a:t>{}</a:t></a:r></a:p>", escape(line)))
                .collect();
            format!("<p:sp><p:nvSpPr/><p:txBody><a:bodyPr/>{}</p:txBody></p:sp>", paragraphs)
        })
        .collect();
    format!("<p:cSld><p:spTree>{}</p:spTree></p:cSld>", shapes)
}

fn relationships(entries: &[(String, &str, String)]) -> String {
    let body: String = entries
        .iter()
        .map(|(id, kind, target)| {
            format!(r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#, id, kind, target)
        })
        .collect();
    format!(r#"<?xml version="1.0" encoding="UTF-8"?><Relationships xmlns="{}">{}</Relationships>"#, PACKAGE_RELS_NS, body)
}

/// Build a .pptx archive whose slides carry the given text frames.
pub fn build_pptx(slides: &[SlideContent]) -> Result<Vec<u8>, PptxError> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    let slide_ids: String = (1..=slides.len())
        .map(|n| format!(r#"<p:sldId id="{}" r:id="rId{}"/>"#, 255 + n, n))
        .collect();
    zip.start_file("ppt/presentation.xml", options)?;
    zip.write_all(
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?><p:presentation {}><p:sldIdLst>{}</p:sldIdLst></p:presentation>"#,
            NAMESPACES, slide_ids
        )
        .as_bytes(),
    )?;

    let presentation_rels: Vec<(String, &str, String)> = (1..=slides.len())
        .map(|n| (format!("rId{}", n), SLIDE_REL_TYPE, format!("slides/slide{}.xml", n)))
        .collect();
    zip.start_file("ppt/_rels/presentation.xml.rels", options)?;
    zip.write_all(relationships(&presentation_rels).as_bytes())?;

    for (i, slide) in slides.iter().enumerate() {
        let n = i + 1;

        zip.start_file(format!("ppt/slides/slide{}.xml", n), options)?;
        zip.write_all(
            format!(
                r#"<?xml version="1.0" encoding="UTF-8"?><p:sld {}>{}</p:sld>"#,
                NAMESPACES,
                shape_tree(&slide.shapes)
            )
            .as_bytes(),
        )?;

        zip.start_file(format!("ppt/slides/_rels/slide{}.xml.rels", n), options)?;
        zip.write_all(
            relationships(&[(
                "rId1".to_string(),
                LAYOUT_REL_TYPE,
                format!("../slideLayouts/slideLayout{}.xml", n),
            )])
            .as_bytes(),
        )?;

        zip.start_file(format!("ppt/slideLayouts/slideLayout{}.xml", n), options)?;
        zip.write_all(
            format!(
                r#"<?xml version="1.0" encoding="UTF-8"?><p:sldLayout {}>{}</p:sldLayout>"#,
                NAMESPACES,
                shape_tree(&slide.layout_shapes)
            )
            .as_bytes(),
        )?;
    }

    Ok(zip.finish()?.into_inner())
}
