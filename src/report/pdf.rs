//! PDF writer for laid-out report documents
//!
//! Builds the document object graph with `lopdf` and serializes it in one
//! pass: standard-14 Helvetica fonts, one content stream per page, shared
//! resources dictionary.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};

use super::document::{
    Page, ReportDocument, BODY_SIZE, FOOTER_BASELINE, FOOTER_SIZE, HEADER_BASELINE, MARGIN,
    PAGE_HEIGHT, PAGE_WIDTH, REPORT_TITLE, TITLE_SIZE,
};
use super::document::BlockKind;
use super::metrics;

const FONT_BODY: &[u8] = b"F1";
const FONT_BOLD: &[u8] = b"F2";
const FONT_OBLIQUE: &[u8] = b"F3";

/// Renders a [`ReportDocument`] into PDF bytes
pub struct PdfRenderer {
    document: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
}

impl PdfRenderer {
    /// Serialize the whole report into an in-memory PDF
    pub fn render(report: &ReportDocument) -> Result<Vec<u8>, lopdf::Error> {
        let mut renderer = Self::new();
        renderer.begin_document();
        for page in &report.pages {
            renderer.render_page(page)?;
        }
        renderer.finalize()
    }

    fn new() -> Self {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();
        let resources_id = document.new_object_id();

        Self {
            document,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
        }
    }

    fn begin_document(&mut self) {
        let regular = self.add_font("Helvetica");
        let bold = self.add_font("Helvetica-Bold");
        let oblique = self.add_font("Helvetica-Oblique");

        // Central resources dictionary shared by every page.
        let resources_dict = dictionary! {
            "Font" => dictionary! {
                "F1" => regular,
                "F2" => bold,
                "F3" => oblique,
            },
        };
        self.document
            .objects
            .insert(self.resources_id, Object::Dictionary(resources_dict));

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![],
            "Count" => 0,
        };
        self.document
            .objects
            .insert(self.pages_id, Object::Dictionary(pages_dict));

        let catalog_dict = dictionary! { "Type" => "Catalog", "Pages" => self.pages_id };
        let catalog_id = self.document.add_object(catalog_dict);
        self.document.trailer.set("Root", catalog_id);
    }

    fn add_font(&mut self, base_font: &str) -> ObjectId {
        self.document.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => base_font,
        })
    }

    fn render_page(&mut self, page: &Page) -> Result<(), lopdf::Error> {
        let mut content = Content { operations: vec![] };

        draw_centered(&mut content, REPORT_TITLE, FONT_BOLD, TITLE_SIZE, HEADER_BASELINE);

        for block in &page.blocks {
            match &block.kind {
                BlockKind::SectionTitle(text) => {
                    draw_text(&mut content, text, FONT_BOLD, TITLE_SIZE, MARGIN, block.y);
                }
                BlockKind::Line(text) => {
                    draw_text(&mut content, text, FONT_BODY, BODY_SIZE, MARGIN, block.y);
                }
            }
        }

        let footer = format!("Page {}", page.number);
        draw_centered(&mut content, &footer, FONT_OBLIQUE, FOOTER_SIZE, FOOTER_BASELINE);

        let content_stream = Stream::new(dictionary! {}, content.encode()?);
        let content_id = self.document.add_object(content_stream);

        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        };
        let page_id = self.document.add_object(page_dict);
        self.page_ids.push(page_id);

        Ok(())
    }

    fn finalize(mut self) -> Result<Vec<u8>, lopdf::Error> {
        if let Some(Object::Dictionary(pages_dict)) = self.document.objects.get_mut(&self.pages_id)
        {
            let kids: Vec<Object> = self.page_ids.iter().map(|id| Object::from(*id)).collect();
            pages_dict.set("Kids", kids);
            pages_dict.set("Count", self.page_ids.len() as i32);
        }

        let mut bytes = Vec::new();
        self.document.save_to(&mut bytes)?;
        Ok(bytes)
    }
}

/// Draw one line of text; `y_from_top` is the baseline measured from the
/// top edge of the page.
fn draw_text(content: &mut Content, text: &str, font: &[u8], size: f32, x: f32, y_from_top: f32) {
    if text.is_empty() {
        return;
    }
    let pdf_y = PAGE_HEIGHT - y_from_top;
    content.operations.push(Operation::new("BT", vec![]));
    content.operations.push(Operation::new(
        "Tf",
        vec![Object::Name(font.to_vec()), size.into()],
    ));
    content
        .operations
        .push(Operation::new("Td", vec![x.into(), pdf_y.into()]));
    content
        .operations
        .push(Operation::new("Tj", vec![Object::string_literal(text)]));
    content.operations.push(Operation::new("ET", vec![]));
}

fn draw_centered(content: &mut Content, text: &str, font: &[u8], size: f32, y_from_top: f32) {
    let x = metrics::centered_x(text, size, PAGE_WIDTH);
    draw_text(content, text, font, size, x, y_from_top);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::document::paginate;
    use crate::report::section::{Content as SectionContent, Section};
    use indexmap::indexmap;

    fn sample_report() -> ReportDocument {
        let sections = vec![
            Section::new(
                "Summary",
                SectionContent::Map(indexmap! {
                    "Total Entries".to_string() => "3".to_string(),
                }),
            ),
            Section::new("Missing Values", SectionContent::Scalar("none".into())),
        ];
        paginate(&sections)
    }

    #[test]
    fn test_output_is_a_pdf() {
        let bytes = PdfRenderer::render(&sample_report()).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(bytes.ends_with(b"%%EOF\n") || bytes.windows(5).any(|w| w == b"%%EOF"));
    }

    #[test]
    fn test_header_footer_and_lines_are_embedded() {
        // Content streams are uncompressed, so page text is directly
        // visible in the byte stream.
        let bytes = PdfRenderer::render(&sample_report()).unwrap();
        let text = String::from_utf8_lossy(&bytes);

        assert!(text.contains("Data Analysis Report"));
        assert!(text.contains("Page 1"));
        assert!(text.contains("Total Entries: 3"));
        assert!(text.contains("none"));
    }

    #[test]
    fn test_one_page_object_per_page() {
        let sections = vec![Section::new(
            "Long",
            SectionContent::List((0..80).map(|i| i.to_string()).collect()),
        )];
        let report = paginate(&sections);
        let bytes = PdfRenderer::render(&report).unwrap();
        let text = String::from_utf8_lossy(&bytes);

        for page in &report.pages {
            assert!(text.contains(&format!("Page {}", page.number)));
        }
    }

    #[test]
    fn test_empty_text_draws_nothing() {
        let mut content = Content { operations: vec![] };
        draw_text(&mut content, "", FONT_BODY, BODY_SIZE, MARGIN, 100.0);
        assert!(content.operations.is_empty());
    }
}
