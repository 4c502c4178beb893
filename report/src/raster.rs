//! Screenshot preparation for PDF embedding.
//!
//! Screenshots arrive as raw encoded bytes (PNG or JPEG from the object
//! store). They are decoded, normalized to 8-bit RGB (alpha does not survive
//! the trip into a PDF image object), and downscaled to the rendered size so
//! full-resolution EMR captures do not bloat the document.

#[cfg(test)]
#[path = "raster_test.rs"]
mod raster_test;

use printpdf::image_crate::imageops::FilterType;
use printpdf::image_crate::{DynamicImage, GenericImageView};

use crate::ReportError;
use crate::layout;

/// Pixel density screenshots are resampled to before embedding.
const EMBED_PX_PER_INCH: f64 = 150.0;
const MM_PER_INCH: f64 = 25.4;

/// A decoded screenshot ready for placement.
#[derive(Clone, Debug)]
pub struct PreparedImage {
    /// Normalized RGB pixels, at most the embed density for the rendered size.
    pub image: DynamicImage,
    /// Rendered width on the page.
    pub width_mm: f64,
    /// Rendered height on the page.
    pub height_mm: f64,
}

impl PreparedImage {
    /// Density to embed at so the pixel data maps onto `width_mm`.
    #[must_use]
    pub fn embed_dpi(&self) -> f64 {
        let (width_px, _) = self.image.dimensions();
        f64::from(width_px) * MM_PER_INCH / self.width_mm
    }
}

/// Decode, normalize, and downscale screenshot bytes.
///
/// # Errors
///
/// Returns [`ReportError::Image`] when the bytes are not a decodable image
/// and [`ReportError::EmptyImage`] when the decoded image has a zero
/// dimension.
pub fn prepare_screenshot(bytes: &[u8]) -> Result<PreparedImage, ReportError> {
    let decoded = printpdf::image_crate::load_from_memory(bytes)?;
    let (width_px, height_px) = decoded.dimensions();
    if width_px == 0 || height_px == 0 {
        return Err(ReportError::EmptyImage);
    }

    let (width_mm, height_mm) = layout::fit_image_mm(width_px, height_px);
    let target_w = embed_px(width_mm);
    let target_h = embed_px(height_mm);
    let resized = if width_px > target_w || height_px > target_h {
        decoded.resize(target_w, target_h, FilterType::Triangle)
    } else {
        decoded
    };
    let image = DynamicImage::ImageRgb8(resized.to_rgb8());

    Ok(PreparedImage { image, width_mm, height_mm })
}

/// Pixel extent of a millimeter run at the embed density.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn embed_px(mm: f64) -> u32 {
    (mm / MM_PER_INCH * EMBED_PX_PER_INCH).round().max(1.0) as u32
}
