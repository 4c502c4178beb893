//! Canvas gesture actions: connect, disconnect, drag, rename, delete,
//! add screens, and status changes.
//!
//! Every action follows the same lifecycle:
//!
//! 1. **Validate**: pure checks (self-loops, duplicates, no-op renames and
//!    status changes) run before any remote call and short-circuit with a
//!    notice or silently.
//! 2. **Mutate**: the store changes on the side of the remote write that
//!    the operation's [`WritePolicy`](crate::state::policy::WritePolicy)
//!    dictates: position moves and node deletes land first, structural
//!    changes land only after the server confirms.
//! 3. **Report**: success and failure both surface as transient notices;
//!    failures are terminal for the attempt, retry is the user's gesture.
//!
//! Async results are stamped with the view epoch captured at dispatch time
//! and dropped if the canvas has moved on, so a stale response can never
//! mutate a view that no longer shows its project.

#[cfg(test)]
#[path = "flow_actions_test.rs"]
mod flow_actions_test;

use leptos::prelude::*;

use crate::net::error::ValidationError;
use crate::net::types::ProjectStatus;
use crate::state::canvas::CanvasState;

#[cfg(feature = "hydrate")]
use crate::net::api::Api;
#[cfg(feature = "hydrate")]
use crate::net::upload;
#[cfg(feature = "hydrate")]
use crate::state::canvas::{FlowEdge, PageNode};
#[cfg(feature = "hydrate")]
use crate::state::policy::CanvasOp;
#[cfg(feature = "hydrate")]
use crate::state::session::SessionState;
#[cfg(feature = "hydrate")]
use crate::state::ui::UiState;
#[cfg(feature = "hydrate")]
use crate::util::debounce::POSITION_DEBOUNCE_MS;
#[cfg(feature = "hydrate")]
use crate::util::layout;

/// One file picked in the add-screens dialog. The browser handle only
/// exists on hydrate builds; the name is always available for planning.
#[derive(Clone, Debug)]
pub struct SelectedFile {
    pub name: String,
    #[cfg(feature = "hydrate")]
    pub handle: web_sys::File,
}

/// API client bound to the current session's bearer token.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn session_api(session: RwSignal<SessionState>) -> Api {
    Api::new(session.with_untracked(|s| s.token.clone()))
}

// =============================================================================
// PURE CHECKS
// =============================================================================

/// Check a requested connection before any remote call. Self-loops and
/// already-present same-direction edges are rejected; the reverse direction
/// is a distinct transition and stays allowed.
pub fn validate_connect(state: &CanvasState, from: &str, to: &str) -> Result<(), ValidationError> {
    if from == to {
        return Err(ValidationError("A screen cannot connect to itself.".to_owned()));
    }
    if state.node(from).is_none() || state.node(to).is_none() {
        return Err(ValidationError("Both screens must be on the canvas.".to_owned()));
    }
    if state.has_edge(from, to) {
        return Err(ValidationError("These screens are already connected.".to_owned()));
    }
    Ok(())
}

/// Title to persist for a confirmed rename, after trimming. `None` means
/// there is nothing to send: the draft is blank or matches the committed
/// title, and no remote call may be made.
#[must_use]
pub fn rename_commit_needed(committed: &str, draft: &str) -> Option<String> {
    let trimmed = draft.trim();
    if trimmed.is_empty() || trimmed == committed {
        return None;
    }
    Some(trimmed.to_owned())
}

/// Whether a status-change request needs a remote write. Requests matching
/// the current status are a no-op by contract.
#[must_use]
pub fn status_change_needed(state: &CanvasState, requested: ProjectStatus) -> bool {
    state.project_status().is_some_and(|current| current != requested)
}

// =============================================================================
// VIEW LIFECYCLE
// =============================================================================

/// Start loading a project's canvas: project metadata, pages, and workflows
/// fetched concurrently, applied only if all three succeed. The PM name
/// resolves in a follow-up lookup that falls back to the raw creator id.
#[cfg(feature = "hydrate")]
pub fn load_canvas(canvas: RwSignal<CanvasState>, ui: RwSignal<UiState>, api: Api, project_id: String) {
    let Some(epoch) = canvas.try_update(CanvasState::begin_load) else {
        return;
    };
    leptos::task::spawn_local(async move {
        let loaded = futures::future::try_join3(
            api.fetch_project(&project_id),
            api.fetch_pages(&project_id),
            api.fetch_workflows(&project_id),
        )
        .await;
        match loaded {
            Ok((project, pages, workflows)) => {
                let created_by = project.created_by.clone();
                canvas.update(|c| {
                    if c.is_current(epoch) {
                        c.apply_snapshot(project, pages, workflows);
                    }
                });
                if created_by.is_empty() {
                    return;
                }
                let pm_name = match api.fetch_user(&created_by).await {
                    Ok(user) => user.display_name().to_owned(),
                    Err(_) => created_by.clone(),
                };
                canvas.update(|c| {
                    if c.is_current(epoch) {
                        c.set_pm_name(pm_name);
                    }
                });
            }
            Err(err) => {
                canvas.update(|c| {
                    if c.is_current(epoch) {
                        c.fail_load(err.detail());
                    }
                });
                ui.update(|u| {
                    u.push_error(format!("Failed to load project: {}", err.detail()));
                });
            }
        }
    });
}

/// Invalidate the view's epoch and drop pending position writes. Called
/// from `on_cleanup` when the canvas view unmounts.
pub fn close_canvas(canvas: RwSignal<CanvasState>) {
    canvas.update(CanvasState::invalidate);
}

// =============================================================================
// NODE ACTIONS
// =============================================================================

/// Apply a drag position immediately and funnel the write through the
/// per-node debounce channel. Each event supersedes the node's earlier
/// pending write; only the last position per quiet period reaches the API.
#[cfg(feature = "hydrate")]
pub fn move_node_live(
    canvas: RwSignal<CanvasState>,
    ui: RwSignal<UiState>,
    api: Api,
    node_id: String,
    x: f64,
    y: f64,
) {
    let Some(generation) = canvas.try_update(|c| {
        c.move_node(&node_id, x, y);
        c.positions.push(&node_id, x, y)
    }) else {
        return;
    };
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(POSITION_DEBOUNCE_MS).await;
        let settled = canvas.try_update(|c| c.positions.settle(&node_id, generation)).flatten();
        if let Some((x, y)) = settled {
            if let Err(err) = api.update_page_position(&node_id, x, y).await {
                ui.update(|u| {
                    u.push_error(CanvasOp::MoveNode.failure_notice(&err.detail()));
                });
            }
        }
    });
}

/// Remove a node locally, then delete it remotely. The local removal is
/// never rolled back; detached edges are cleaned up remotely best-effort
/// once the page delete succeeds.
#[cfg(feature = "hydrate")]
pub fn delete_node(canvas: RwSignal<CanvasState>, ui: RwSignal<UiState>, api: Api, node_id: String) {
    let Some(detached) = canvas.try_update(|c| c.remove_node(&node_id)) else {
        return;
    };
    leptos::task::spawn_local(async move {
        match api.delete_page(&node_id).await {
            Ok(()) => {
                for edge in &detached {
                    if let Err(err) = api.delete_workflow(&edge.id).await {
                        log::warn!("connection {} left dangling after page delete: {}", edge.id, err.detail());
                    }
                }
                ui.update(|u| {
                    u.push_success("Page deleted!");
                });
            }
            Err(err) => {
                ui.update(|u| {
                    u.push_error(CanvasOp::DeleteNode.failure_notice(&err.detail()));
                });
            }
        }
    });
}

/// Persist a confirmed rename, updating the committed title only after the
/// server accepts it. No-op drafts never reach the API.
#[cfg(feature = "hydrate")]
pub fn commit_rename(canvas: RwSignal<CanvasState>, ui: RwSignal<UiState>, api: Api, node_id: String, draft: String) {
    let state = canvas.get_untracked();
    let Some(node) = state.node(&node_id) else {
        return;
    };
    let Some(title) = rename_commit_needed(&node.title, &draft) else {
        return;
    };
    let epoch = state.epoch;
    leptos::task::spawn_local(async move {
        match api.update_page_title(&node_id, &title).await {
            Ok(page) => {
                canvas.update(|c| {
                    if c.is_current(epoch) {
                        c.commit_title(&node_id, page.title);
                    }
                });
                ui.update(|u| {
                    u.push_success("Page renamed!");
                });
            }
            Err(err) => {
                ui.update(|u| {
                    u.push_error(CanvasOp::RenameNode.failure_notice(&err.detail()));
                });
            }
        }
    });
}

/// Upload-and-create each picked file in order, then create each blank
/// placeholder. New pages join the canvas one by one as the server confirms
/// them; the first failure aborts the remainder and reports once, leaving
/// the already-created pages in place.
#[cfg(feature = "hydrate")]
pub fn add_screens(
    canvas: RwSignal<CanvasState>,
    ui: RwSignal<UiState>,
    api: Api,
    files: Vec<SelectedFile>,
    blank_count: usize,
) {
    let state = canvas.get_untracked();
    let Some(project) = state.project else {
        return;
    };
    if files.is_empty() && blank_count == 0 {
        return;
    }
    let project_id = project.id;
    let epoch = state.epoch;
    let names: Vec<String> = files.iter().map(|f| f.name.clone()).collect();
    let planned = layout::plan_screens(&names, blank_count, state.nodes.len());

    leptos::task::spawn_local(async move {
        let mut failure: Option<String> = None;
        for (index, plan) in planned.iter().enumerate() {
            let created = if let Some(file) = files.get(index) {
                match upload::upload_screenshot(&file.handle).await {
                    Ok(url) => api
                        .create_page(&project_id, &plan.title, Some(&url), plan.order)
                        .await
                        .map_err(|e| e.detail()),
                    Err(err) => Err(err.to_string()),
                }
            } else {
                api.create_page(&project_id, &plan.title, None, plan.order)
                    .await
                    .map_err(|e| e.detail())
            };
            match created {
                Ok(page) => {
                    canvas.update(|c| {
                        if c.is_current(epoch) {
                            let mut node = PageNode::from_remote(page);
                            node.x = plan.x;
                            node.y = plan.y;
                            c.append_node(node);
                        }
                    });
                }
                Err(detail) => {
                    failure = Some(detail);
                    break;
                }
            }
        }
        ui.update(|u| match failure {
            None => {
                u.push_success("Screens added!");
            }
            Some(detail) => {
                u.push_error(CanvasOp::AddScreen.failure_notice(&detail));
            }
        });
    });
}

// =============================================================================
// EDGE ACTIONS
// =============================================================================

/// Create a connection remotely; the edge appears locally only once the
/// server confirms it. Rejected gestures surface as a notice without any
/// remote traffic.
#[cfg(feature = "hydrate")]
pub fn connect_nodes(canvas: RwSignal<CanvasState>, ui: RwSignal<UiState>, api: Api, from: String, to: String) {
    let state = canvas.get_untracked();
    if let Err(rejected) = validate_connect(&state, &from, &to) {
        ui.update(|u| {
            u.push_error(rejected.0);
        });
        return;
    }
    let epoch = state.epoch;
    leptos::task::spawn_local(async move {
        match api.create_workflow(&from, &to, None).await {
            Ok(workflow) => {
                canvas.update(|c| {
                    if c.is_current(epoch) {
                        c.insert_edge(FlowEdge::from_remote(workflow));
                    }
                });
                ui.update(|u| {
                    u.push_success("Connection created!");
                });
            }
            Err(err) => {
                ui.update(|u| {
                    u.push_error(CanvasOp::CreateEdge.failure_notice(&err.detail()));
                });
            }
        }
    });
}

/// Delete a connection remotely; it leaves the canvas only once the server
/// confirms.
#[cfg(feature = "hydrate")]
pub fn disconnect_edge(canvas: RwSignal<CanvasState>, ui: RwSignal<UiState>, api: Api, edge_id: String) {
    let epoch = canvas.get_untracked().epoch;
    leptos::task::spawn_local(async move {
        match api.delete_workflow(&edge_id).await {
            Ok(()) => {
                canvas.update(|c| {
                    if c.is_current(epoch) {
                        c.remove_edge(&edge_id);
                    }
                });
                ui.update(|u| {
                    u.push_success("Connection deleted!");
                });
            }
            Err(err) => {
                ui.update(|u| {
                    u.push_error(CanvasOp::DeleteEdge.failure_notice(&err.detail()));
                });
            }
        }
    });
}

// =============================================================================
// PROJECT ACTIONS
// =============================================================================

/// Persist a status change, reflecting it locally only after the server
/// accepts it. Requests matching the current status make zero remote calls.
#[cfg(feature = "hydrate")]
pub fn change_status(canvas: RwSignal<CanvasState>, ui: RwSignal<UiState>, api: Api, requested: ProjectStatus) {
    let state = canvas.get_untracked();
    if !status_change_needed(&state, requested) {
        return;
    }
    let Some(project) = state.project else {
        return;
    };
    let project_id = project.id;
    let epoch = state.epoch;
    leptos::task::spawn_local(async move {
        match api.update_project_status(&project_id, requested).await {
            Ok(_) => {
                canvas.update(|c| {
                    if c.is_current(epoch) {
                        c.set_status(requested);
                    }
                });
                ui.update(|u| {
                    u.push_success("Project status updated!");
                });
            }
            Err(err) => {
                ui.update(|u| {
                    u.push_error(CanvasOp::ChangeStatus.failure_notice(&err.detail()));
                });
            }
        }
    });
}
