//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render canvas chrome and interaction surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod comments_dialog;
pub mod flow_canvas;
pub mod notice_host;
pub mod page_node;
pub mod project_card;
