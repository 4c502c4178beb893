use super::*;

// =============================================================
// Slot positions
// =============================================================

#[test]
fn slot_zero_sits_at_the_base_offset() {
    assert_eq!(slot_position(0), (100.0, 100.0));
}

#[test]
fn slots_advance_horizontally_only() {
    assert_eq!(slot_position(1), (160.0, 100.0));
    assert_eq!(slot_position(5), (400.0, 100.0));
}

// =============================================================
// Batch planning
// =============================================================

#[test]
fn files_come_before_blanks() {
    let planned = plan_screens(&["login.png".to_owned(), "chart.png".to_owned()], 1, 0);
    assert_eq!(planned.len(), 3);
    assert_eq!(planned[0].title, "login.png");
    assert_eq!(planned[1].title, "chart.png");
    assert_eq!(planned[2].title, "Blank Screen 3");
}

#[test]
fn slots_continue_from_existing_nodes() {
    let planned = plan_screens(&["a.png".to_owned()], 1, 4);
    assert_eq!((planned[0].x, planned[0].y), slot_position(4));
    assert_eq!(planned[0].order, 5);
    assert_eq!(planned[1].title, "Blank Screen 6");
    assert_eq!((planned[1].x, planned[1].y), slot_position(5));
    assert_eq!(planned[1].order, 6);
}

#[test]
fn blanks_alone_number_from_the_node_count() {
    let planned = plan_screens(&[], 2, 3);
    assert_eq!(planned[0].title, "Blank Screen 4");
    assert_eq!(planned[1].title, "Blank Screen 5");
}

#[test]
fn empty_batch_plans_nothing() {
    assert!(plan_screens(&[], 0, 7).is_empty());
}
