//! Client-side state models shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module owns one concern: `session` the signed-in user, `projects`
//! the dashboard inventory, `canvas` the active workflow view, `policy` the
//! optimistic/pessimistic write split, and `ui` transient notices. All state
//! here is plain data mutated inside `RwSignal` updates; async orchestration
//! lives in `util::flow_actions` and the page components.

pub mod canvas;
pub mod policy;
pub mod projects;
pub mod session;
pub mod ui;
