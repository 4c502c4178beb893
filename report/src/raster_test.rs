use std::io::Cursor;

use printpdf::image_crate::{
    DynamicImage, GenericImageView, ImageOutputFormat, Rgb, RgbImage, Rgba, RgbaImage,
};

use super::*;

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let pixels = RgbImage::from_pixel(width, height, Rgb([120, 180, 200]));
    let mut out = Vec::new();
    DynamicImage::ImageRgb8(pixels)
        .write_to(&mut Cursor::new(&mut out), ImageOutputFormat::Png)
        .expect("png encode");
    out
}

// =============================================================================
// DECODE + FIT
// =============================================================================

#[test]
fn small_screenshot_keeps_natural_size() {
    // 96x96 px at the assumed 96 dpi is one inch square.
    let prepared = prepare_screenshot(&png_bytes(96, 96)).expect("prepare");
    assert!((prepared.width_mm - 25.4).abs() < 1e-9);
    assert!((prepared.height_mm - 25.4).abs() < 1e-9);
    assert_eq!(prepared.image.dimensions(), (96, 96));
}

#[test]
fn oversized_screenshot_is_fit_and_downscaled() {
    let prepared = prepare_screenshot(&png_bytes(2000, 500)).expect("prepare");
    // Width capped at the 180 mm box, aspect 4:1 kept.
    assert!((prepared.width_mm - layout::MAX_IMAGE_WIDTH_MM).abs() < 1e-9);
    assert!((prepared.height_mm - layout::MAX_IMAGE_WIDTH_MM / 4.0).abs() < 1e-9);
    // Pixels resampled down below the capture resolution.
    let (w, h) = prepared.image.dimensions();
    assert!(w < 2000);
    assert!(h < 500);
    // Embed density lands near the resample target.
    assert!((prepared.embed_dpi() - 150.0).abs() < 5.0);
}

#[test]
fn alpha_channel_is_stripped() {
    let pixels = RgbaImage::from_pixel(10, 10, Rgba([10, 20, 30, 0]));
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(pixels)
        .write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)
        .expect("png encode");

    let prepared = prepare_screenshot(&bytes).expect("prepare");
    assert!(matches!(prepared.image, DynamicImage::ImageRgb8(_)));
}

// =============================================================================
// FAILURES
// =============================================================================

#[test]
fn garbage_bytes_fail_with_image_error() {
    let err = prepare_screenshot(b"definitely not an image").expect_err("must fail");
    assert!(matches!(err, ReportError::Image(_)));
}

#[test]
fn empty_bytes_fail_with_image_error() {
    let err = prepare_screenshot(&[]).expect_err("must fail");
    assert!(matches!(err, ReportError::Image(_)));
}
