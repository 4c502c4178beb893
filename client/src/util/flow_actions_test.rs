use super::*;
use crate::net::types::{Page, Project, SourceSystem, Workflow};

fn sample_project(status: ProjectStatus) -> Project {
    Project {
        id: "p1".to_owned(),
        title: "Ambulatory Intake".to_owned(),
        created_by: "u1".to_owned(),
        system: SourceSystem::Epic,
        status,
        description: None,
        created_at: "2025-06-01T10:00:00Z".to_owned(),
    }
}

fn sample_page(id: &str) -> Page {
    Page {
        id: id.to_owned(),
        project_id: "p1".to_owned(),
        title: format!("Screen {id}"),
        screenshot_path: None,
        position_x: 100.0,
        position_y: 100.0,
        order: 1,
    }
}

fn connected_state() -> CanvasState {
    let mut state = CanvasState::default();
    state.begin_load();
    state.apply_snapshot(
        sample_project(ProjectStatus::Working),
        vec![sample_page("a"), sample_page("b"), sample_page("c")],
        vec![Workflow {
            id: "e1".to_owned(),
            from_page_id: "a".to_owned(),
            to_page_id: "b".to_owned(),
            label: None,
        }],
    );
    state
}

// =============================================================
// Connection validation
// =============================================================

#[test]
fn connection_between_distinct_nodes_is_allowed() {
    let state = connected_state();
    assert!(validate_connect(&state, "b", "c").is_ok());
}

#[test]
fn self_loop_is_rejected() {
    let state = connected_state();
    let rejected = validate_connect(&state, "a", "a");
    assert!(rejected.is_err());
}

#[test]
fn connection_to_a_missing_node_is_rejected() {
    let state = connected_state();
    assert!(validate_connect(&state, "a", "ghost").is_err());
    assert!(validate_connect(&state, "ghost", "a").is_err());
}

#[test]
fn duplicate_connection_in_the_same_direction_is_rejected() {
    let state = connected_state();
    assert!(validate_connect(&state, "a", "b").is_err());
}

#[test]
fn reverse_direction_is_a_distinct_connection() {
    let state = connected_state();
    assert!(validate_connect(&state, "b", "a").is_ok());
}

// =============================================================
// Rename commit guard
// =============================================================

#[test]
fn changed_draft_is_committed_trimmed() {
    assert_eq!(
        rename_commit_needed("Screen a", "  Login Screen  "),
        Some("Login Screen".to_owned())
    );
}

#[test]
fn blank_draft_sends_nothing() {
    assert_eq!(rename_commit_needed("Screen a", ""), None);
    assert_eq!(rename_commit_needed("Screen a", "   "), None);
}

#[test]
fn unchanged_draft_sends_nothing() {
    assert_eq!(rename_commit_needed("Screen a", "Screen a"), None);
    assert_eq!(rename_commit_needed("Screen a", "  Screen a  "), None);
}

// =============================================================
// Status change guard
// =============================================================

#[test]
fn matching_status_needs_no_write() {
    let state = connected_state();
    assert!(!status_change_needed(&state, ProjectStatus::Working));
}

#[test]
fn different_status_needs_a_write() {
    let state = connected_state();
    assert!(status_change_needed(&state, ProjectStatus::Review));
    assert!(status_change_needed(&state, ProjectStatus::Ready));
}

#[test]
fn status_change_without_a_loaded_project_is_ignored() {
    let state = CanvasState::default();
    assert!(!status_change_needed(&state, ProjectStatus::Ready));
}
