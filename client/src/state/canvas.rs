//! Canvas-session state for the active project's workflow view.
//!
//! SYSTEM CONTEXT
//! ==============
//! This model stores the local projection of one project's canvas: its page
//! nodes, workflow edges, and transient interaction bookkeeping. It is the
//! authoritative in-memory copy while the view is open; the REST API is only
//! consulted at load time and on explicit mutations.
//!
//! DESIGN
//! ======
//! Mutations here are pure and synchronous. Which side of a remote call they
//! run on is the caller's concern: position moves and node deletes land
//! before the request goes out, while edge, title, and status changes land
//! only after the server confirms (see `state::policy`). A monotonically
//! increasing epoch stamps each view lifetime so async results that outlive
//! their view can be recognized and dropped.

#[cfg(test)]
#[path = "canvas_test.rs"]
mod canvas_test;

use crate::net::types::{Page, Project, ProjectStatus, Workflow};
use crate::util::debounce::PositionDebouncer;

/// A captured screen rendered as a draggable canvas node.
#[derive(Clone, Debug, PartialEq)]
pub struct PageNode {
    pub id: String,
    pub title: String,
    /// Public screenshot URL, or `None` for a blank placeholder.
    pub screenshot_url: Option<String>,
    pub x: f64,
    pub y: f64,
    pub order: i64,
}

impl PageNode {
    /// Project a wire page into its canvas representation.
    #[must_use]
    pub fn from_remote(page: Page) -> Self {
        Self {
            id: page.id,
            title: page.title,
            screenshot_url: page.screenshot_path,
            x: page.position_x,
            y: page.position_y,
            order: page.order,
        }
    }
}

/// A directed, optionally labeled connection between two page nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowEdge {
    pub id: String,
    pub from: String,
    pub to: String,
    pub label: Option<String>,
}

impl FlowEdge {
    /// Project a wire workflow into its canvas representation.
    #[must_use]
    pub fn from_remote(workflow: Workflow) -> Self {
        Self {
            id: workflow.id,
            from: workflow.from_page_id,
            to: workflow.to_page_id,
            label: workflow.label,
        }
    }
}

/// In-progress node drag: which node, and where inside it the pointer
/// grabbed, so the node does not jump to the cursor on the first move.
#[derive(Clone, Debug, PartialEq)]
pub struct DragState {
    pub node_id: String,
    pub grab_dx: f64,
    pub grab_dy: f64,
}

/// Canvas-level state: project metadata, the node/edge working set, and
/// transient interaction overlays.
#[derive(Clone, Debug)]
pub struct CanvasState {
    pub project: Option<Project>,
    /// Resolved PM display name; arrives from a follow-up user lookup.
    pub pm_name: Option<String>,
    pub nodes: Vec<PageNode>,
    pub edges: Vec<FlowEdge>,
    /// True from view open until the initial snapshot lands. Stays true when
    /// the load fails; there is no partial canvas.
    pub loading: bool,
    pub load_error: Option<String>,
    /// View lifetime stamp; bumped on every load and on teardown.
    pub epoch: u64,
    pub drag: Option<DragState>,
    /// Source node of a half-drawn connection awaiting its target.
    pub pending_connect: Option<String>,
    /// Coalesced per-node position writes awaiting their quiet period.
    pub positions: PositionDebouncer,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            project: None,
            pm_name: None,
            nodes: Vec::new(),
            edges: Vec::new(),
            loading: true,
            load_error: None,
            epoch: 0,
            drag: None,
            pending_connect: None,
            positions: PositionDebouncer::default(),
        }
    }
}

impl CanvasState {
    // -------------------------------------------------------------------------
    // View lifecycle
    // -------------------------------------------------------------------------

    /// Reset to a fresh loading state for a new view and return the epoch
    /// that async load results must present to be accepted.
    pub fn begin_load(&mut self) -> u64 {
        let epoch = self.epoch + 1;
        *self = Self { epoch, ..Self::default() };
        epoch
    }

    /// Invalidate the current epoch so in-flight results are dropped.
    /// Called on view teardown.
    pub fn invalidate(&mut self) {
        self.epoch += 1;
        self.positions.clear();
    }

    /// Whether a result stamped with `epoch` still belongs to this view.
    #[must_use]
    pub fn is_current(&self, epoch: u64) -> bool {
        self.epoch == epoch
    }

    /// Install the initial snapshot once all three fetches have resolved.
    pub fn apply_snapshot(&mut self, project: Project, pages: Vec<Page>, workflows: Vec<Workflow>) {
        self.project = Some(project);
        self.nodes = pages.into_iter().map(PageNode::from_remote).collect();
        self.edges = workflows.into_iter().map(FlowEdge::from_remote).collect();
        self.loading = false;
        self.load_error = None;
    }

    /// Record a failed initialization. The loading state persists; no
    /// partial canvas is shown.
    pub fn fail_load(&mut self, message: String) {
        self.load_error = Some(message);
    }

    pub fn set_pm_name(&mut self, name: String) {
        self.pm_name = Some(name);
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn node(&self, node_id: &str) -> Option<&PageNode> {
        self.nodes.iter().find(|n| n.id == node_id)
    }

    /// Whether an edge from `from` to `to` already exists in this direction.
    #[must_use]
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.edges.iter().any(|e| e.from == from && e.to == to)
    }

    #[must_use]
    pub fn project_status(&self) -> Option<ProjectStatus> {
        self.project.as_ref().map(|p| p.status)
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Move a node locally. Applied before the remote write; the debounced
    /// persistence path catches up later.
    pub fn move_node(&mut self, node_id: &str, x: f64, y: f64) {
        if let Some(node) = self.nodes.iter_mut().find(|n| n.id == node_id) {
            node.x = x;
            node.y = y;
        }
    }

    /// Remove a node locally and detach every edge referencing it. Returns
    /// the detached edges so the caller can delete them remotely. Applied
    /// before the remote delete and never rolled back.
    pub fn remove_node(&mut self, node_id: &str) -> Vec<FlowEdge> {
        self.nodes.retain(|n| n.id != node_id);
        let (detached, kept): (Vec<FlowEdge>, Vec<FlowEdge>) = self
            .edges
            .drain(..)
            .partition(|e| e.from == node_id || e.to == node_id);
        self.edges = kept;
        if self.drag.as_ref().is_some_and(|d| d.node_id == node_id) {
            self.drag = None;
        }
        if self.pending_connect.as_deref() == Some(node_id) {
            self.pending_connect = None;
        }
        detached
    }

    /// Reflect a server-confirmed edge into local state.
    pub fn insert_edge(&mut self, edge: FlowEdge) {
        self.edges.push(edge);
    }

    /// Drop a server-deleted edge from local state.
    pub fn remove_edge(&mut self, edge_id: &str) {
        self.edges.retain(|e| e.id != edge_id);
    }

    /// Install a server-confirmed title on the committed node.
    pub fn commit_title(&mut self, node_id: &str, title: String) {
        if let Some(node) = self.nodes.iter_mut().find(|n| n.id == node_id) {
            node.title = title;
        }
    }

    /// Append a server-created page to the canvas. Batch creation calls this
    /// once per confirmed item, so a partially failed batch still shows the
    /// pages that made it.
    pub fn append_node(&mut self, node: PageNode) {
        self.nodes.push(node);
    }

    /// Install a server-confirmed project status.
    pub fn set_status(&mut self, status: ProjectStatus) {
        if let Some(project) = self.project.as_mut() {
            project.status = status;
        }
    }
}
