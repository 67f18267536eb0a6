//! PPTX parsing using zip + roxmltree

use std::collections::HashMap;
use std::io::{Cursor, Read, Seek};

use roxmltree::{Document, Node};
use shared_types::SlideContent;
use tracing::debug;
use zip::result::ZipError;
use zip::ZipArchive;

use crate::error::PptxError;

const PRESENTATION_PART: &str = "ppt/presentation.xml";
const RELATIONSHIPS_NS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const SLIDE_LAYOUT_REL_SUFFIX: &str = "/slideLayout";

/// Slides of a presentation, in presentation order
#[derive(Debug, Clone)]
pub struct PptxDocument {
    slides: Vec<SlideContent>,
}

impl PptxDocument {
    /// Load a presentation from raw .pptx bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PptxError> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))?;

        let presentation = read_part(&mut archive, PRESENTATION_PART)?;
        let slide_ids = slide_relationship_ids(&presentation)?;
        let relationships = read_relationships(&mut archive, PRESENTATION_PART)?;

        let mut slides = Vec::with_capacity(slide_ids.len());
        for rel_id in slide_ids {
            let target = relationships
                .get(&rel_id)
                .ok_or_else(|| PptxError::MissingPart(format!("relationship {}", rel_id)))?;
            let slide_part = resolve_target(PRESENTATION_PART, &target.target);
            slides.push(read_slide(&mut archive, &slide_part)?);
        }

        debug!(slides = slides.len(), "parsed presentation");
        Ok(Self { slides })
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[SlideContent] {
        &self.slides
    }

    pub fn into_slides(self) -> Vec<SlideContent> {
        self.slides
    }
}

#[derive(Debug, Clone)]
struct Relationship {
    kind: String,
    target: String,
}

fn read_part<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<String, PptxError> {
    let mut file = archive.by_name(name).map_err(|e| match e {
        ZipError::FileNotFound => PptxError::MissingPart(name.to_string()),
        other => PptxError::Archive(other),
    })?;
    let mut xml = String::new();
    file.read_to_string(&mut xml)?;
    Ok(xml)
}

fn parse_xml<'a>(part: &str, xml: &'a str) -> Result<Document<'a>, PptxError> {
    Document::parse(xml).map_err(|e| PptxError::Xml {
        part: part.to_string(),
        message: e.to_string(),
    })
}

/// `ppt/slides/slide1.xml` -> `ppt/slides/_rels/slide1.xml.rels`
fn relationships_part(part: &str) -> String {
    match part.rsplit_once('/') {
        Some((dir, file)) => format!("{}/_rels/{}.rels", dir, file),
        None => format!("_rels/{}.rels", part),
    }
}

/// Resolve a relationship target relative to the part that owns it
fn resolve_target(source_part: &str, target: &str) -> String {
    if let Some(absolute) = target.strip_prefix('/') {
        return absolute.to_string();
    }

    let mut segments: Vec<&str> = source_part.split('/').collect();
    segments.pop();
    for segment in target.split('/') {
        match segment {
            ".." => {
                segments.pop();
            }
            "." | "" => {}
            other => segments.push(other),
        }
    }
    segments.join("/")
}

fn read_relationships<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    source_part: &str,
) -> Result<HashMap<String, Relationship>, PptxError> {
    let rels_part = relationships_part(source_part);
    let xml = match read_part(archive, &rels_part) {
        Ok(xml) => xml,
        Err(PptxError::MissingPart(_)) => return Ok(HashMap::new()),
        Err(e) => return Err(e),
    };
    let doc = parse_xml(&rels_part, &xml)?;

    Ok(doc
        .descendants()
        .filter(|n| n.has_tag_name("Relationship"))
        .filter_map(|n| {
            let id = n.attribute("Id")?;
            let relationship = Relationship {
                kind: n.attribute("Type").unwrap_or_default().to_string(),
                target: n.attribute("Target")?.to_string(),
            };
            Some((id.to_string(), relationship))
        })
        .collect())
}

/// Relationship ids of the slides listed in `p:sldIdLst`, in order
fn slide_relationship_ids(presentation_xml: &str) -> Result<Vec<String>, PptxError> {
    let doc = parse_xml(PRESENTATION_PART, presentation_xml)?;
    Ok(doc
        .descendants()
        .filter(|n| n.tag_name().name() == "sldId")
        .filter_map(|n| n.attribute((RELATIONSHIPS_NS, "id")))
        .map(str::to_string)
        .collect())
}

fn read_slide<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    slide_part: &str,
) -> Result<SlideContent, PptxError> {
    let xml = read_part(archive, slide_part)?;
    let shapes = shape_texts(slide_part, &xml)?;

    let layout_part = read_relationships(archive, slide_part)?
        .into_values()
        .find(|rel| rel.kind.ends_with(SLIDE_LAYOUT_REL_SUFFIX))
        .map(|rel| resolve_target(slide_part, &rel.target));

    let layout_shapes = match layout_part {
        Some(part) => {
            let layout_xml = read_part(archive, &part)?;
            shape_texts(&part, &layout_xml)?
        }
        None => Vec::new(),
    };

    Ok(SlideContent {
        shapes,
        layout_shapes,
    })
}

/// Text of every top-level shape with a text body in the shape tree
fn shape_texts(part: &str, xml: &str) -> Result<Vec<String>, PptxError> {
    let doc = parse_xml(part, xml)?;
    let Some(tree) = doc.descendants().find(|n| n.tag_name().name() == "spTree") else {
        return Ok(Vec::new());
    };

    Ok(tree
        .children()
        .filter(|n| n.tag_name().name() == "sp")
        .filter_map(|shape| child(shape, "txBody"))
        .map(text_frame_text)
        .collect())
}

fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.tag_name().name() == name)
}

/// Paragraphs joined by newlines; line breaks become newlines too
fn text_frame_text(body: Node<'_, '_>) -> String {
    body.children()
        .filter(|n| n.tag_name().name() == "p")
        .map(|paragraph| {
            let mut text = String::new();
            for run in paragraph.children() {
                match run.tag_name().name() {
                    "r" | "fld" => {
                        if let Some(t) = child(run, "t").and_then(|t| t.text()) {
                            text.push_str(t);
                        }
                    }
                    "br" => text.push('\n'),
                    _ => {}
                }
            }
            text
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::build_pptx;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reads_slides_in_order_with_layout_text() {
        let slides = vec![
            SlideContent::new(["Welcome", "22 May 2022"]),
            SlideContent::new(["Family Prayer"])
                .with_layout(["Today\u{2019}s order of service\nOpening Song – Behold Our God"]),
        ];
        let bytes = build_pptx(&slides).unwrap();

        let doc = PptxDocument::from_bytes(&bytes).unwrap();
        assert_eq!(doc.slide_count(), 2);
        assert_eq!(doc.slides(), slides.as_slice());
    }

    #[test]
    fn test_escaped_text_round_trips() {
        let slides = vec![SlideContent::new(["#11 Confession of Sin (Slide 17 & 18) <b>"])];
        let doc = PptxDocument::from_bytes(&build_pptx(&slides).unwrap()).unwrap();
        assert_eq!(doc.slides()[0].shapes[0], "#11 Confession of Sin (Slide 17 & 18) <b>");
    }

    #[test]
    fn test_rejects_non_zip_bytes() {
        let err = PptxDocument::from_bytes(b"not a presentation").unwrap_err();
        assert!(matches!(err, PptxError::Archive(_)));
    }

    #[test]
    fn test_line_breaks_become_newlines() {
        let xml = r#"<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
            <p:cSld><p:spTree>
                <p:sp><p:txBody><a:p><a:r><a:t>Line one</a:t></a:r><a:br/><a:r><a:t>Line two</a:t></a:r></a:p></p:txBody></p:sp>
                <p:pic/>
                <p:sp><p:nvSpPr/></p:sp>
            </p:spTree></p:cSld>
        </p:sld>"#;
        assert_eq!(shape_texts("slide.xml", xml).unwrap(), vec!["Line one\nLine two"]);
    }

    #[test]
    fn test_resolve_target() {
        assert_eq!(
            resolve_target("ppt/presentation.xml", "slides/slide1.xml"),
            "ppt/slides/slide1.xml"
        );
        assert_eq!(
            resolve_target("ppt/slides/slide1.xml", "../slideLayouts/slideLayout2.xml"),
            "ppt/slideLayouts/slideLayout2.xml"
        );
        assert_eq!(
            resolve_target("ppt/slides/slide1.xml", "/ppt/slideLayouts/slideLayout2.xml"),
            "ppt/slideLayouts/slideLayout2.xml"
        );
    }

    #[test]
    fn test_relationships_part() {
        assert_eq!(
            relationships_part("ppt/slides/slide3.xml"),
            "ppt/slides/_rels/slide3.xml.rels"
        );
    }
}
