use super::*;

// =============================================================================
// CURSOR
// =============================================================================

#[test]
fn cursor_starts_at_top_of_page_one() {
    let cursor = PageCursor::new();
    assert!((cursor.y_mm() - TOP_START_MM).abs() < f64::EPSILON);
    assert_eq!(cursor.page_count(), 1);
}

#[test]
fn advance_moves_cursor_down() {
    let mut cursor = PageCursor::new();
    cursor.advance(LINE_HEIGHT_MM);
    cursor.advance(LINE_HEIGHT_MM);
    assert!((cursor.y_mm() - (TOP_START_MM + 2.0 * LINE_HEIGHT_MM)).abs() < f64::EPSILON);
}

#[test]
fn no_break_at_threshold_exactly() {
    let mut cursor = PageCursor::new();
    cursor.advance(PAGE_BREAK_MM - cursor.y_mm());
    assert!(!cursor.break_if_exhausted());
    assert_eq!(cursor.page_count(), 1);
}

#[test]
fn break_past_threshold_resets_to_top_of_next_page() {
    let mut cursor = PageCursor::new();
    cursor.advance(PAGE_BREAK_MM);
    assert!(cursor.break_if_exhausted());
    assert_eq!(cursor.page_count(), 2);
    assert!((cursor.y_mm() - TOP_START_MM).abs() < f64::EPSILON);
}

#[test]
fn repeated_breaks_accumulate_pages() {
    let mut cursor = PageCursor::new();
    for _ in 0..3 {
        cursor.advance(PAGE_BREAK_MM + 1.0);
        assert!(cursor.break_if_exhausted());
    }
    assert_eq!(cursor.page_count(), 4);
}

// =============================================================================
// COORDINATES
// =============================================================================

#[test]
fn from_top_flips_onto_pdf_axis() {
    assert!((from_top(0.0) - PAGE_HEIGHT_MM).abs() < f64::EPSILON);
    assert!((from_top(TOP_START_MM) - (PAGE_HEIGHT_MM - TOP_START_MM)).abs() < f64::EPSILON);
}

// =============================================================================
// IMAGE FIT
// =============================================================================

#[test]
fn wide_image_is_bounded_by_box_width() {
    // 4000x1000 px is far wider than 180 mm at 96 dpi.
    let (w, h) = fit_image_mm(4000, 1000);
    assert!((w - MAX_IMAGE_WIDTH_MM).abs() < 1e-9);
    // Aspect 4:1 preserved.
    assert!((h - MAX_IMAGE_WIDTH_MM / 4.0) < 1e-9);
    assert!(h <= MAX_IMAGE_HEIGHT_MM);
}

#[test]
fn tall_image_is_bounded_by_box_height() {
    let (w, h) = fit_image_mm(1000, 4000);
    assert!((h - MAX_IMAGE_HEIGHT_MM).abs() < 1e-9);
    assert!((w - MAX_IMAGE_HEIGHT_MM / 4.0) < 1e-9);
    assert!(w <= MAX_IMAGE_WIDTH_MM);
}

#[test]
fn small_image_keeps_natural_size() {
    // 96 px at 96 dpi is exactly one inch.
    let (w, h) = fit_image_mm(96, 96);
    assert!((w - 25.4).abs() < 1e-9);
    assert!((h - 25.4).abs() < 1e-9);
}

#[test]
fn fit_preserves_aspect_ratio() {
    let (w, h) = fit_image_mm(1920, 1080);
    assert!((w / h - 1920.0 / 1080.0).abs() < 1e-9);
}

// =============================================================================
// FILENAME
// =============================================================================

#[test]
fn filename_joins_words_with_underscores() {
    assert_eq!(artifact_filename("Griffin OBGYN"), "Griffin_OBGYN_workflow.pdf");
}

#[test]
fn filename_collapses_whitespace_runs() {
    assert_eq!(
        artifact_filename("  Epic   intake \t flow "),
        "Epic_intake_flow_workflow.pdf"
    );
}

#[test]
fn filename_for_empty_title_is_bare_suffix() {
    assert_eq!(artifact_filename(""), "workflow.pdf");
    assert_eq!(artifact_filename("   "), "workflow.pdf");
}
