use super::*;

// =============================================================
// Dates
// =============================================================

#[test]
fn short_date_strips_leading_zeros() {
    assert_eq!(short_date("2025-06-01T10:00:00Z"), "6/1/2025");
}

#[test]
fn short_date_handles_date_only_input() {
    assert_eq!(short_date("2025-12-31"), "12/31/2025");
}

#[test]
fn short_date_passes_garbage_through() {
    assert_eq!(short_date("yesterday"), "yesterday");
    assert_eq!(short_date(""), "");
}

#[test]
fn short_date_rejects_out_of_range_components() {
    assert_eq!(short_date("2025-13-01"), "2025-13-01");
}

// =============================================================
// Date-times
// =============================================================

#[test]
fn short_datetime_includes_the_clock() {
    assert_eq!(short_datetime("2025-06-01T09:05:33.000Z"), "6/1/2025, 09:05");
}

#[test]
fn short_datetime_without_time_is_just_the_date() {
    assert_eq!(short_datetime("2025-06-01"), "6/1/2025");
}

#[test]
fn short_datetime_with_mangled_clock_drops_it() {
    assert_eq!(short_datetime("2025-06-01Tnoon"), "6/1/2025");
}
