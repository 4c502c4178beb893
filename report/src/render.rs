//! PDF document assembly.
//!
//! DESIGN
//! ======
//! One top-down pass: a project header block (title, source system, PM,
//! status, generation timestamp), an overview heading, then per screen a
//! bold title line plus the screenshot. A section that starts past the
//! page-break threshold opens a fresh page first. A screenshot that fails to
//! decode renders a textual placeholder instead of aborting the export, so
//! one bad capture cannot sink the whole report.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use printpdf::{
    BuiltinFont, Image, ImageTransform, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
};

use crate::ReportError;
use crate::layout::{self, PageCursor};
use crate::raster;

/// Text shown when a screenshot exists but could not be fetched or decoded.
pub const FAILED_IMAGE_PLACEHOLDER: &str = "(Image failed to load)";
/// Text shown for a blank screen with no screenshot.
pub const NO_IMAGE_PLACEHOLDER: &str = "(No image)";

/// Project header fields for the report.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportMeta {
    pub title: String,
    pub system: String,
    pub pm_name: String,
    pub status: String,
    /// Preformatted generation timestamp; the caller owns the clock.
    pub generated_at: String,
}

/// One canvas node, in canvas order, with its fetched screenshot bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScreenSection {
    pub title: String,
    /// Encoded image bytes; `None` for a blank screen or a failed fetch.
    pub image: Option<Vec<u8>>,
}

/// Render the full report to PDF bytes.
///
/// # Errors
///
/// Returns [`ReportError::Pdf`] when font registration or document
/// serialization fails. Per-screenshot decode failures do not error; those
/// sections render [`FAILED_IMAGE_PLACEHOLDER`] instead.
pub fn render_report(meta: &ReportMeta, sections: &[ScreenSection]) -> Result<Vec<u8>, ReportError> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        meta.title.as_str(),
        Mm(layout::PAGE_WIDTH_MM as f32),
        Mm(layout::PAGE_HEIGHT_MM as f32),
        "content",
    );
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut cursor = PageCursor::new();
    let left = Mm(layout::MARGIN_LEFT_MM as f32);

    // Project header block.
    layer.use_text(meta.title.as_str(), 18.0, left, baseline(&cursor), &regular);
    cursor.advance(layout::LINE_HEIGHT_MM + 2.0);
    layer.use_text(
        format!("Source System: {}", meta.system),
        12.0,
        left,
        baseline(&cursor),
        &regular,
    );
    cursor.advance(layout::LINE_HEIGHT_MM);
    layer.use_text(format!("PM: {}", meta.pm_name), 12.0, left, baseline(&cursor), &regular);
    cursor.advance(layout::LINE_HEIGHT_MM);
    layer.use_text(format!("Status: {}", meta.status), 12.0, left, baseline(&cursor), &regular);
    cursor.advance(layout::LINE_HEIGHT_MM);
    layer.use_text(
        format!("Generated: {}", meta.generated_at),
        12.0,
        left,
        baseline(&cursor),
        &regular,
    );
    cursor.advance(layout::LINE_HEIGHT_MM * 2.0);
    layer.use_text("Workflow Overview", 15.0, left, baseline(&cursor), &regular);
    cursor.advance(layout::LINE_HEIGHT_MM * 1.5);
    layer.use_text("Screens:", 13.0, left, baseline(&cursor), &regular);
    cursor.advance(layout::LINE_HEIGHT_MM);

    // One section per screen, in canvas order.
    for section in sections {
        if cursor.break_if_exhausted() {
            layer = fresh_page(&doc);
        }
        let title = if section.title.is_empty() { "Untitled" } else { section.title.as_str() };
        layer.use_text(title, 13.0, left, baseline(&cursor), &bold);
        cursor.advance(layout::LINE_HEIGHT_MM);

        match &section.image {
            Some(bytes) => match raster::prepare_screenshot(bytes) {
                Ok(prepared) => {
                    place_screenshot(&layer, &prepared, cursor.y_mm());
                    cursor.advance(prepared.height_mm + 4.0);
                }
                Err(_) => {
                    layer.use_text(FAILED_IMAGE_PLACEHOLDER, 11.0, left, baseline(&cursor), &regular);
                    cursor.advance(layout::LINE_HEIGHT_MM);
                }
            },
            None => {
                layer.use_text(NO_IMAGE_PLACEHOLDER, 11.0, left, baseline(&cursor), &regular);
                cursor.advance(layout::LINE_HEIGHT_MM);
            }
        }
        cursor.advance(2.0);
    }

    Ok(doc.save_to_bytes()?)
}

fn baseline(cursor: &PageCursor) -> Mm {
    Mm(layout::from_top(cursor.y_mm()) as f32)
}

fn fresh_page(doc: &PdfDocumentReference) -> PdfLayerReference {
    let (page, layer) =
        doc.add_page(Mm(layout::PAGE_WIDTH_MM as f32), Mm(layout::PAGE_HEIGHT_MM as f32), "content");
    doc.get_page(page).get_layer(layer)
}

/// Place a prepared screenshot with its top edge at `top_mm` from the page top.
fn place_screenshot(layer: &PdfLayerReference, prepared: &raster::PreparedImage, top_mm: f64) {
    let image = Image::from_dynamic_image(&prepared.image);
    let transform = ImageTransform {
        translate_x: Some(Mm(layout::MARGIN_LEFT_MM as f32)),
        translate_y: Some(Mm(layout::from_top(top_mm + prepared.height_mm) as f32)),
        dpi: Some(prepared.embed_dpi() as f32),
        ..ImageTransform::default()
    };
    image.add_to_layer(layer.clone(), transform);
}
