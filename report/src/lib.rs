//! Workflow report assembly for ScreenFlow Capture projects.
//!
//! This crate owns the exported PDF artifact: a fixed A4 portrait layout with
//! a project header block followed by one section per captured screen. The
//! caller hands over project metadata and raw screenshot bytes; the crate
//! returns finished PDF bytes. Nothing in here touches the browser, so the
//! whole pipeline is natively testable.
//!
//! | Module   | Responsibility                                      |
//! |----------|-----------------------------------------------------|
//! | `layout` | A4 constants, cursor and page-break math, image fit |
//! | `raster` | screenshot decode, RGB normalization, downscale     |
//! | `render` | document assembly from metadata and screen sections |

pub mod layout;
pub mod raster;
pub mod render;

pub use layout::artifact_filename;
pub use render::{ReportMeta, ScreenSection, render_report};

/// Error raised while preparing screenshots or assembling the document.
///
/// Per-screenshot decode failures are tolerated by [`render_report`] (the
/// section gets a textual placeholder instead); the `Image` variants escape
/// only through [`raster::prepare_screenshot`] directly.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The screenshot bytes could not be decoded as an image.
    #[error("failed to decode screenshot: {0}")]
    Image(#[from] printpdf::image_crate::ImageError),
    /// The screenshot decoded to zero width or height.
    #[error("screenshot has empty pixel dimensions")]
    EmptyImage,
    /// The PDF document could not be assembled or serialized.
    #[error("failed to assemble report: {0}")]
    Pdf(#[from] printpdf::Error),
}
