//! Client glue for the PDF export.
//!
//! Gathers the loaded canvas into [`report`] inputs, fetches each
//! screenshot's bytes over HTTP, renders the document natively, and hands
//! the finished bytes to the browser as a named download. Per-image fetch
//! failures degrade to the report's textual placeholder rather than
//! aborting the export.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use report::{ReportMeta, ScreenSection};

use crate::state::canvas::CanvasState;

#[cfg(feature = "hydrate")]
use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

#[cfg(feature = "hydrate")]
use crate::state::ui::UiState;

/// Title shown for a node whose committed title is empty.
pub const UNTITLED_SECTION: &str = "Untitled";

/// One planned report section: the node's title plus the screenshot URL to
/// fetch, `None` for blank screens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannedSection {
    pub title: String,
    pub screenshot_url: Option<String>,
}

/// Header fields for the current canvas, or `None` before a project loads.
/// The PM line prefers the resolved display name over the raw creator id.
#[must_use]
pub fn report_meta(state: &CanvasState, generated_at: String) -> Option<ReportMeta> {
    let project = state.project.as_ref()?;
    Some(ReportMeta {
        title: project.title.clone(),
        system: project.system.as_str().to_owned(),
        pm_name: state.pm_name.clone().unwrap_or_else(|| project.created_by.clone()),
        status: project.status.as_str().to_owned(),
        generated_at,
    })
}

/// Report sections in canvas store order, before any bytes are fetched.
#[must_use]
pub fn plan_sections(state: &CanvasState) -> Vec<PlannedSection> {
    state
        .nodes
        .iter()
        .map(|node| PlannedSection {
            title: if node.title.is_empty() {
                UNTITLED_SECTION.to_owned()
            } else {
                node.title.clone()
            },
            screenshot_url: node.screenshot_url.clone(),
        })
        .collect()
}

/// Render the loaded canvas to a PDF and start a browser download of it.
/// Does nothing before the project has loaded.
#[cfg(feature = "hydrate")]
pub fn export_pdf(canvas: RwSignal<CanvasState>, ui: RwSignal<UiState>) {
    let state = canvas.get_untracked();
    let generated_at = String::from(
        js_sys::Date::new_0().to_locale_string("en-US", &wasm_bindgen::JsValue::UNDEFINED),
    );
    let Some(meta) = report_meta(&state, generated_at) else {
        return;
    };
    let planned = plan_sections(&state);
    leptos::task::spawn_local(async move {
        let mut sections = Vec::with_capacity(planned.len());
        for plan in planned {
            // A failed fetch keeps the section with undecodable bytes so the
            // report prints its failed-image placeholder, not the blank-screen
            // one reserved for sections that never had a screenshot.
            let image = match plan.screenshot_url {
                Some(url) => Some(fetch_image(&url).await.unwrap_or_default()),
                None => None,
            };
            sections.push(ScreenSection { title: plan.title, image });
        }
        match report::render_report(&meta, &sections) {
            Ok(bytes) => {
                let filename = report::artifact_filename(&meta.title);
                if trigger_download(&bytes, &filename).is_none() {
                    ui.update(|u| {
                        u.push_error("Could not start the PDF download.");
                    });
                }
            }
            Err(err) => {
                ui.update(|u| {
                    u.push_error(format!("Failed to export PDF: {err}"));
                });
            }
        }
    });
}

/// Fetch one screenshot's bytes; `None` on any transport or status failure.
#[cfg(feature = "hydrate")]
async fn fetch_image(url: &str) -> Option<Vec<u8>> {
    let response = gloo_net::http::Request::get(url).send().await.ok()?;
    if !response.ok() {
        return None;
    }
    response.binary().await.ok()
}

/// Hand the PDF bytes to the browser as a named download through a
/// short-lived object URL.
#[cfg(feature = "hydrate")]
fn trigger_download(bytes: &[u8], filename: &str) -> Option<()> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes).into());
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/pdf");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).ok()?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).ok()?;
    let document = web_sys::window()?.document()?;
    let anchor: web_sys::HtmlAnchorElement = document.create_element("a").ok()?.dyn_into().ok()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();
    let _ = web_sys::Url::revoke_object_url(&url);
    Some(())
}
