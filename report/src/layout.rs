//! Fixed A4 layout math for the exported report.
//!
//! DESIGN
//! ======
//! The report uses a single portrait layout: 15 mm left margin, 8 mm text
//! line height, and a page break once the cursor passes 250 mm. Images are
//! placed into a 180 x 60 mm box at their natural 96 px/inch size, scaled
//! down to fit with aspect ratio preserved, never scaled up. Keeping the
//! cursor arithmetic here, away from the PDF writer, makes pagination
//! natively testable.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

/// A4 portrait page width.
pub const PAGE_WIDTH_MM: f64 = 210.0;
/// A4 portrait page height.
pub const PAGE_HEIGHT_MM: f64 = 297.0;
/// Left margin for all text and images.
pub const MARGIN_LEFT_MM: f64 = 15.0;
/// First baseline offset from the top of a fresh page.
pub const TOP_START_MM: f64 = 15.0;
/// Vertical advance per text line.
pub const LINE_HEIGHT_MM: f64 = 8.0;
/// Cursor depth past which the next section starts on a new page.
pub const PAGE_BREAK_MM: f64 = 250.0;
/// Widest an embedded screenshot may render.
pub const MAX_IMAGE_WIDTH_MM: f64 = PAGE_WIDTH_MM - 2.0 * MARGIN_LEFT_MM;
/// Tallest an embedded screenshot may render.
pub const MAX_IMAGE_HEIGHT_MM: f64 = 60.0;

/// Assumed natural density of screenshot pixels.
const PX_PER_INCH: f64 = 96.0;
const MM_PER_INCH: f64 = 25.4;

/// Vertical text cursor, measured in millimeters from the top of the page.
///
/// PDF coordinates grow upward from the bottom-left corner; the report is
/// written top-down, so the cursor tracks depth-from-top and [`from_top`]
/// converts at placement time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageCursor {
    y_mm: f64,
    pages: usize,
}

impl PageCursor {
    /// Cursor at the first line of page one.
    #[must_use]
    pub fn new() -> Self {
        Self { y_mm: TOP_START_MM, pages: 1 }
    }

    /// Current depth from the top of the page.
    #[must_use]
    pub fn y_mm(self) -> f64 {
        self.y_mm
    }

    /// Number of pages the document spans so far.
    #[must_use]
    pub fn page_count(self) -> usize {
        self.pages
    }

    /// Move the cursor down by `dy_mm`.
    pub fn advance(&mut self, dy_mm: f64) {
        self.y_mm += dy_mm;
    }

    /// Start a new page if the cursor has passed [`PAGE_BREAK_MM`].
    ///
    /// Returns `true` when a page break happened, so the caller can ask the
    /// document writer for a fresh page.
    pub fn break_if_exhausted(&mut self) -> bool {
        if self.y_mm > PAGE_BREAK_MM {
            self.y_mm = TOP_START_MM;
            self.pages += 1;
            true
        } else {
            false
        }
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new()
    }
}

/// Depth-from-top converted to the PDF's bottom-up axis.
#[must_use]
pub fn from_top(y_mm: f64) -> f64 {
    PAGE_HEIGHT_MM - y_mm
}

/// Natural extent of a pixel run in millimeters at the assumed density.
#[must_use]
pub fn px_to_mm(px: u32) -> f64 {
    f64::from(px) * MM_PER_INCH / PX_PER_INCH
}

/// Fit pixel dimensions into the report's image box.
///
/// Returns the rendered (width, height) in millimeters: aspect ratio
/// preserved, bounded by [`MAX_IMAGE_WIDTH_MM`] x [`MAX_IMAGE_HEIGHT_MM`],
/// and never larger than the image's natural size.
#[must_use]
pub fn fit_image_mm(width_px: u32, height_px: u32) -> (f64, f64) {
    let natural_w = px_to_mm(width_px);
    let natural_h = px_to_mm(height_px);
    let scale = (MAX_IMAGE_WIDTH_MM / natural_w)
        .min(MAX_IMAGE_HEIGHT_MM / natural_h)
        .min(1.0);
    (natural_w * scale, natural_h * scale)
}

/// Derive the download filename for a project's report.
///
/// Whitespace runs in the title collapse to single underscores; an empty or
/// all-whitespace title falls back to the bare suffix.
#[must_use]
pub fn artifact_filename(title: &str) -> String {
    let stem = title.split_whitespace().collect::<Vec<_>>().join("_");
    if stem.is_empty() {
        "workflow.pdf".to_owned()
    } else {
        format!("{stem}_workflow.pdf")
    }
}
