//! Workflow builder page: the interactive canvas route.
//!
//! ARCHITECTURE
//! ============
//! This component is the route-level coordinator between URL project
//! identity and local `CanvasState` lifecycle: it loads the snapshot when
//! the route id settles, invalidates the view epoch on unmount, and hosts
//! the toolbar actions (status changes, PDF export, add screens) that sit
//! above the canvas itself.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::flow_canvas::FlowCanvas;
use crate::net::types::ProjectStatus;
use crate::state::canvas::CanvasState;
use crate::state::session::SessionState;
#[cfg(feature = "hydrate")]
use crate::state::ui::UiState;
use crate::util::auth;
use crate::util::flow_actions;
#[cfg(feature = "hydrate")]
use crate::util::flow_actions::{SelectedFile, session_api};
#[cfg(feature = "hydrate")]
use crate::util::export;

/// Workflow page: toolbar, canvas, and the add-screens dialog. Reads the
/// project id from the route parameter and loads the canvas snapshot once
/// the session restore settles.
#[component]
pub fn WorkflowPage() -> impl IntoView {
    let canvas = expect_context::<RwSignal<CanvasState>>();
    let session = expect_context::<RwSignal<SessionState>>();
    #[cfg(feature = "hydrate")]
    let ui = expect_context::<RwSignal<UiState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    auth::install_unauth_redirect(session, navigate);

    // Project id from the route.
    let project_id = move || params.read().get("id");

    // Load once per route id, after the session restore settles so the
    // bearer token is attached. A changed id mid-view reloads.
    let last_loaded_id = RwSignal::new(None::<String>);
    Effect::new(move || {
        let state = session.get();
        if state.loading || !state.is_authenticated() {
            return;
        }
        let next_id = project_id();
        if last_loaded_id.get_untracked() == next_id {
            return;
        }
        last_loaded_id.set(next_id.clone());
        let Some(id) = next_id else {
            return;
        };
        #[cfg(feature = "hydrate")]
        flow_actions::load_canvas(canvas, ui, session_api(session), id);
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    on_cleanup(move || flow_actions::close_canvas(canvas));

    let show_add = RwSignal::new(false);
    let on_add_screens = move |_| show_add.set(true);
    let on_add_cancel = Callback::new(move |()| show_add.set(false));

    let on_export = {
        #[cfg(feature = "hydrate")]
        {
            move |_ev: leptos::ev::MouseEvent| {
                export::export_pdf(canvas, ui);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_status = {
        #[cfg(feature = "hydrate")]
        {
            move |requested: ProjectStatus| {
                flow_actions::change_status(canvas, ui, session_api(session), requested);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_requested: ProjectStatus| {}
        }
    };

    let status_is = move |status: ProjectStatus| canvas.get().project_status() == Some(status);

    let meta_line = move || {
        canvas.with(|state| {
            state
                .project
                .as_ref()
                .map(|project| {
                    let pm = state.pm_name.clone().unwrap_or_else(|| project.created_by.clone());
                    format!("{} • PM: {} •", project.system.as_str(), pm)
                })
                .unwrap_or_default()
        })
    };

    view! {
        <Show
            when=move || !canvas.get().loading
            fallback=move || {
                view! {
                    <div class="workflow-page__loading">
                        {move || match canvas.get().load_error {
                            Some(detail) => format!("Failed to load project: {detail}"),
                            None => "Loading project...".to_owned(),
                        }}
                    </div>
                }
            }
        >
            <div class="workflow-page">
                <header class="workflow-page__toolbar toolbar">
                    <a class="toolbar__back" href="/dashboard">
                        "← Back to Dashboard"
                    </a>
                    <h1 class="toolbar__title">
                        {move || canvas.get().project.map(|p| p.title).unwrap_or_default()}
                    </h1>
                    <span class="toolbar__status-tag">
                        {move || canvas.get().project_status().map(ProjectStatus::as_str).unwrap_or_default()}
                    </span>
                    <span class="toolbar__meta">{meta_line}</span>

                    <span class="toolbar__spacer"></span>

                    <button class="btn toolbar__export" on:click=on_export>
                        "Export PDF"
                    </button>
                    {ProjectStatus::SELECTABLE
                        .into_iter()
                        .map(|option| {
                            view! {
                                <button
                                    class="btn toolbar__status"
                                    class:toolbar__status--ready=option == ProjectStatus::Ready
                                    class:toolbar__status--current=move || status_is(option)
                                    on:click=move |_| on_status(option)
                                >
                                    {option.as_str()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                    <button class="btn btn--primary toolbar__add" on:click=on_add_screens>
                        "Add Screens"
                    </button>
                </header>

                <div class="workflow-page__canvas">
                    <FlowCanvas />
                </div>

                <Show when=move || show_add.get()>
                    <AddScreensDialog on_cancel=on_add_cancel />
                </Show>
            </div>
        </Show>
    }
}

/// Read the chosen files out of the picker input.
#[cfg(feature = "hydrate")]
fn collect_selected_files(file_input: NodeRef<leptos::html::Input>) -> Vec<SelectedFile> {
    let Some(input) = file_input.get_untracked() else {
        return Vec::new();
    };
    let Some(list) = input.files() else {
        return Vec::new();
    };
    let mut files = Vec::new();
    for index in 0..list.length() {
        if let Some(handle) = list.get(index) {
            files.push(SelectedFile { name: handle.name(), handle });
        }
    }
    files
}

/// Modal dialog for uploading screenshots or queuing blank placeholder
/// screens.
#[component]
fn AddScreensDialog(on_cancel: Callback<()>) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let canvas = expect_context::<RwSignal<CanvasState>>();
    #[cfg(feature = "hydrate")]
    let ui = expect_context::<RwSignal<UiState>>();
    #[cfg(feature = "hydrate")]
    let session = expect_context::<RwSignal<SessionState>>();

    let file_input = NodeRef::<leptos::html::Input>::new();
    let selected_count = RwSignal::new(0_usize);
    let blank_count = RwSignal::new(0_usize);

    let on_files_change = move |_ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let count = file_input
                .get_untracked()
                .and_then(|input| input.files())
                .map_or(0, |files| files.length() as usize);
            selected_count.set(count);
        }
    };

    let on_add = {
        #[cfg(feature = "hydrate")]
        {
            move |_ev: leptos::ev::MouseEvent| {
                let files = collect_selected_files(file_input);
                let blanks = blank_count.get_untracked();
                flow_actions::add_screens(canvas, ui, session_api(session), files, blanks);
                if let Some(input) = file_input.get_untracked() {
                    input.set_value("");
                }
                selected_count.set(0);
                blank_count.set(0);
                on_cancel.run(());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>"Add Screens to Workflow"</h2>
                <p class="dialog__hint">
                    "Upload healthcare screenshots or create blank placeholder screens for your workflow."
                </p>
                <label class="dialog__label dialog__upload">
                    "Drop screenshots here or click to browse"
                    <input
                        node_ref=file_input
                        class="dialog__file-input"
                        type="file"
                        multiple=true
                        accept="image/png,image/jpeg"
                        on:change=on_files_change
                    />
                    <span class="dialog__hint">"PNG, JPG up to 10MB each • Supports batch upload"</span>
                </label>
                <Show when=move || (selected_count.get() > 0)>
                    <p class="dialog__hint">
                        {move || format!("{} file(s) selected", selected_count.get())}
                    </p>
                </Show>
                <div class="dialog__blank-row">
                    <button class="btn" on:click=move |_| blank_count.update(|n| *n += 1)>
                        "+ Add Blank Screen"
                    </button>
                    <Show when=move || (blank_count.get() > 0)>
                        <span class="dialog__hint">
                            {move || format!("{} blank screen(s) to add", blank_count.get())}
                        </span>
                    </Show>
                </div>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=on_add>
                        "Add"
                    </button>
                </div>
            </div>
        </div>
    }
}
