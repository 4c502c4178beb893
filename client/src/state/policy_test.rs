use super::*;

// =============================================================
// Policy table
// =============================================================

#[test]
fn position_and_delete_are_optimistic() {
    assert_eq!(CanvasOp::MoveNode.write_policy(), WritePolicy::Optimistic);
    assert_eq!(CanvasOp::DeleteNode.write_policy(), WritePolicy::Optimistic);
}

#[test]
fn structural_changes_are_pessimistic() {
    assert_eq!(CanvasOp::CreateEdge.write_policy(), WritePolicy::Pessimistic);
    assert_eq!(CanvasOp::DeleteEdge.write_policy(), WritePolicy::Pessimistic);
    assert_eq!(CanvasOp::RenameNode.write_policy(), WritePolicy::Pessimistic);
    assert_eq!(CanvasOp::ChangeStatus.write_policy(), WritePolicy::Pessimistic);
    assert_eq!(CanvasOp::AddScreen.write_policy(), WritePolicy::Pessimistic);
}

// =============================================================
// Failure notices
// =============================================================

#[test]
fn optimistic_failure_warns_about_divergence() {
    let text = CanvasOp::MoveNode.failure_notice("server returned 500: boom");
    assert!(text.contains("move screen"));
    assert!(text.contains("out of sync"));
}

#[test]
fn pessimistic_failure_promises_no_change() {
    let text = CanvasOp::CreateEdge.failure_notice("server returned 409: duplicate");
    assert!(text.contains("create connection"));
    assert!(text.contains("Nothing was changed"));
}
