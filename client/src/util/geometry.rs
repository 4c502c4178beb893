//! Pure canvas geometry: pointer mapping, node anchors, and edge paths.
//!
//! DESIGN
//! ======
//! All coordinates are in canvas-surface space, origin at the surface's
//! top-left. Pointer events arrive in client space and are translated by the
//! surface's bounding rect before any of this math runs, which keeps every
//! function here free of DOM types and natively testable.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// Rendered node width. Matches the node card's fixed CSS size.
pub const NODE_WIDTH: f64 = 220.0;

/// Rendered node height. Matches the node card's fixed CSS size.
pub const NODE_HEIGHT: f64 = 120.0;

/// Minimum horizontal reach of an edge's control points.
const EDGE_MIN_CONTROL: f64 = 40.0;

/// Translate a client-space pointer into surface space.
#[must_use]
pub fn surface_point(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> (f64, f64) {
    (client_x - rect_left, client_y - rect_top)
}

/// Where inside the node the pointer grabbed it, so a drag keeps the grab
/// point under the cursor instead of snapping the corner to it.
#[must_use]
pub fn grab_offset(pointer_x: f64, pointer_y: f64, node_x: f64, node_y: f64) -> (f64, f64) {
    (pointer_x - node_x, pointer_y - node_y)
}

/// Node position for the current pointer given the grab offset.
#[must_use]
pub fn dragged_position(pointer_x: f64, pointer_y: f64, grab_dx: f64, grab_dy: f64) -> (f64, f64) {
    (pointer_x - grab_dx, pointer_y - grab_dy)
}

/// Outgoing connection handle: middle of the node's right edge.
#[must_use]
pub fn source_anchor(node_x: f64, node_y: f64) -> (f64, f64) {
    (node_x + NODE_WIDTH, node_y + NODE_HEIGHT / 2.0)
}

/// Incoming connection handle: middle of the node's left edge.
#[must_use]
pub fn target_anchor(node_x: f64, node_y: f64) -> (f64, f64) {
    (node_x, node_y + NODE_HEIGHT / 2.0)
}

/// SVG path for an edge: a horizontal-tangent cubic from the source anchor
/// to the target anchor.
#[must_use]
pub fn edge_path(sx: f64, sy: f64, tx: f64, ty: f64) -> String {
    let reach = ((tx - sx).abs() / 2.0).max(EDGE_MIN_CONTROL);
    format!("M {sx},{sy} C {c1},{sy} {c2},{ty} {tx},{ty}", c1 = sx + reach, c2 = tx - reach)
}

/// Point to hang an edge's label on. For the horizontal-tangent cubic above
/// the curve's midpoint is the plain average of the endpoints.
#[must_use]
pub fn label_anchor(sx: f64, sy: f64, tx: f64, ty: f64) -> (f64, f64) {
    ((sx + tx) / 2.0, (sy + ty) / 2.0)
}
