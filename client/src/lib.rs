//! ScreenFlow Capture: a browser client for documenting legacy EMR screen
//! workflows before a data migration.
//!
//! The crate compiles to WebAssembly and runs as a single-page app against
//! the platform REST API. Project managers capture screenshots of the system
//! being retired, arrange them on a flow canvas, annotate each screen, and
//! export the finished workflow as a PDF for client review.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Root component: shared contexts, session restore, router |
//! | [`pages`] | Route-level screens (landing, auth, dashboard, workflow) |
//! | [`components`] | Reusable view pieces (cards, canvas nodes, dialogs) |
//! | [`net`] | REST gateway, upload gateway, DTOs, and error taxonomy |
//! | [`state`] | Shared stores handed around as context signals |
//! | [`util`] | Controllers and pure helpers (auth, gestures, PDF export) |

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks, then mount the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
