use super::*;
use crate::net::types::SourceSystem;

fn sample_project() -> Project {
    Project {
        id: "p1".to_owned(),
        title: "Ambulatory Intake".to_owned(),
        created_by: "u1".to_owned(),
        system: SourceSystem::Epic,
        status: ProjectStatus::Working,
        description: None,
        created_at: "2025-06-01T10:00:00Z".to_owned(),
    }
}

fn sample_page(id: &str, x: f64, y: f64) -> Page {
    Page {
        id: id.to_owned(),
        project_id: "p1".to_owned(),
        title: format!("Screen {id}"),
        screenshot_path: Some(format!("https://cdn.example.com/{id}.png")),
        position_x: x,
        position_y: y,
        order: 1,
    }
}

fn sample_workflow(id: &str, from: &str, to: &str) -> Workflow {
    Workflow {
        id: id.to_owned(),
        from_page_id: from.to_owned(),
        to_page_id: to.to_owned(),
        label: Some("submits to".to_owned()),
    }
}

fn loaded_state() -> CanvasState {
    let mut state = CanvasState::default();
    state.begin_load();
    state.apply_snapshot(
        sample_project(),
        vec![sample_page("a", 100.0, 100.0), sample_page("b", 260.0, 100.0)],
        vec![sample_workflow("e1", "a", "b")],
    );
    state
}

// =============================================================
// View lifecycle
// =============================================================

#[test]
fn default_state_is_loading_and_empty() {
    let state = CanvasState::default();
    assert!(state.loading);
    assert!(state.project.is_none());
    assert!(state.nodes.is_empty());
    assert!(state.edges.is_empty());
    assert_eq!(state.epoch, 0);
}

#[test]
fn begin_load_bumps_epoch_and_resets_everything() {
    let mut state = loaded_state();
    let previous_epoch = state.epoch;
    let epoch = state.begin_load();
    assert_eq!(epoch, previous_epoch + 1);
    assert!(state.loading);
    assert!(state.project.is_none());
    assert!(state.nodes.is_empty());
    assert!(state.edges.is_empty());
    assert!(state.is_current(epoch));
}

#[test]
fn invalidate_rejects_results_from_the_old_view() {
    let mut state = CanvasState::default();
    let epoch = state.begin_load();
    state.invalidate();
    assert!(!state.is_current(epoch));
}

#[test]
fn invalidate_drops_pending_position_writes() {
    let mut state = loaded_state();
    let generation = state.positions.push("a", 1.0, 2.0);
    state.invalidate();
    assert_eq!(state.positions.settle("a", generation), None);
}

#[test]
fn snapshot_installs_nodes_edges_and_ends_loading() {
    let state = loaded_state();
    assert!(!state.loading);
    assert_eq!(state.nodes.len(), 2);
    assert_eq!(state.edges.len(), 1);
    assert_eq!(state.nodes[0].screenshot_url.as_deref(), Some("https://cdn.example.com/a.png"));
    assert_eq!(state.edges[0].from, "a");
    assert_eq!(state.edges[0].to, "b");
}

#[test]
fn failed_load_keeps_the_loading_state() {
    let mut state = CanvasState::default();
    state.begin_load();
    state.fail_load("server returned 500: boom".to_owned());
    assert!(state.loading);
    assert!(state.load_error.is_some());
    assert!(state.nodes.is_empty());
}

// =============================================================
// Optimistic mutations
// =============================================================

#[test]
fn move_node_applies_immediately() {
    let mut state = loaded_state();
    state.move_node("a", 300.0, 240.0);
    let node = state.node("a").unwrap();
    assert_eq!((node.x, node.y), (300.0, 240.0));
}

#[test]
fn move_unknown_node_is_a_no_op() {
    let mut state = loaded_state();
    state.move_node("ghost", 1.0, 1.0);
    assert_eq!(state.nodes.len(), 2);
}

#[test]
fn remove_node_is_immediate_and_detaches_edges() {
    let mut state = loaded_state();
    let detached = state.remove_node("a");
    assert!(state.node("a").is_none());
    assert!(state.edges.is_empty());
    assert_eq!(detached.len(), 1);
    assert_eq!(detached[0].id, "e1");
}

#[test]
fn remove_node_without_edges_detaches_nothing() {
    let mut state = loaded_state();
    state.remove_edge("e1");
    let detached = state.remove_node("b");
    assert!(detached.is_empty());
    assert_eq!(state.nodes.len(), 1);
}

#[test]
fn remove_node_clears_its_interaction_overlays() {
    let mut state = loaded_state();
    state.drag = Some(DragState { node_id: "a".to_owned(), grab_dx: 4.0, grab_dy: 4.0 });
    state.pending_connect = Some("a".to_owned());
    state.remove_node("a");
    assert!(state.drag.is_none());
    assert!(state.pending_connect.is_none());
}

// =============================================================
// Pessimistic mutations (applied post-confirmation)
// =============================================================

#[test]
fn insert_edge_reflects_confirmed_connection() {
    let mut state = loaded_state();
    state.insert_edge(FlowEdge {
        id: "e2".to_owned(),
        from: "b".to_owned(),
        to: "a".to_owned(),
        label: None,
    });
    assert_eq!(state.edges.len(), 2);
    assert!(state.has_edge("b", "a"));
}

#[test]
fn remove_edge_drops_only_the_confirmed_edge() {
    let mut state = loaded_state();
    state.remove_edge("e1");
    assert!(state.edges.is_empty());
    assert_eq!(state.nodes.len(), 2);
}

#[test]
fn commit_title_replaces_the_committed_label() {
    let mut state = loaded_state();
    state.commit_title("a", "Login Screen".to_owned());
    assert_eq!(state.node("a").unwrap().title, "Login Screen");
}

#[test]
fn append_node_adds_each_confirmed_batch_item() {
    let mut state = loaded_state();
    state.append_node(PageNode {
        id: "c".to_owned(),
        title: "Blank Screen 1".to_owned(),
        screenshot_url: None,
        x: 220.0,
        y: 100.0,
        order: 3,
    });
    assert_eq!(state.nodes.len(), 3);
    assert!(state.node("c").unwrap().screenshot_url.is_none());
}

#[test]
fn set_status_updates_the_loaded_project() {
    let mut state = loaded_state();
    state.set_status(ProjectStatus::Ready);
    assert_eq!(state.project_status(), Some(ProjectStatus::Ready));
}

// =============================================================
// Queries
// =============================================================

#[test]
fn has_edge_is_directional() {
    let state = loaded_state();
    assert!(state.has_edge("a", "b"));
    assert!(!state.has_edge("b", "a"));
}
