//! Dashboard page listing capture projects with create and open actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It fetches the project inventory
//! once per visit, resolves PM display names with a second round of per-user
//! lookups, and hosts the create-project dialog.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::project_card::ProjectCard;
#[cfg(feature = "hydrate")]
use crate::net::api::Api;
use crate::net::types::SourceSystem;
use crate::state::projects::ProjectsState;
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::auth;
#[cfg(feature = "hydrate")]
use crate::util::flow_actions::session_api;

/// Validated create-project form values `(title, pm, system)`, or the notice
/// text for the first missing field.
fn validate_new_project(
    title: &str,
    pm: &str,
    system: &str,
) -> Result<(String, String, SourceSystem), &'static str> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Please enter a project name");
    }
    if pm.is_empty() {
        return Err("Please select a PM");
    }
    let Some(system) = SourceSystem::parse(system) else {
        return Err("Please select a system");
    };
    Ok((title.to_owned(), pm.to_owned(), system))
}

/// Dashboard page: stats row, project cards, and the create-project dialog.
/// Unauthenticated visitors are bounced to `/login`.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let projects = expect_context::<RwSignal<ProjectsState>>();
    let navigate = use_navigate();

    auth::install_unauth_redirect(session, navigate);

    // Fetch the inventory once per visit, after the session restore settles
    // so the bearer token is attached.
    let requested_list = RwSignal::new(false);
    Effect::new(move || {
        if requested_list.get() {
            return;
        }
        let state = session.get();
        if state.loading || !state.is_authenticated() {
            return;
        }
        requested_list.set(true);
        projects.update(|s| s.loading = true);
        #[cfg(feature = "hydrate")]
        load_projects(projects, session_api(session));
    });

    let show_create = RwSignal::new(false);
    let on_new_project = move |_| show_create.set(true);
    let on_create_cancel = Callback::new(move |()| show_create.set(false));

    view! {
        <Show
            when=move || !session.get().loading && session.get().is_authenticated()
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>{move || if session.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <header class="dashboard-page__header">
                    <h1>"ScreenFlow Capture"</h1>
                    <button class="btn btn--primary" on:click=on_new_project>
                        "+ New Project"
                    </button>
                </header>

                <Show when=move || projects.get().error.is_some()>
                    <p class="dashboard-page__error">
                        {move || projects.get().error.unwrap_or_default()}
                    </p>
                </Show>

                <Show
                    when=move || !projects.get().loading
                    fallback=move || view! { <p class="dashboard-page__loading">"Loading projects..."</p> }
                >
                    <div class="dashboard-page__stats">
                        {move || {
                            let counts = projects.get().status_counts();
                            view! {
                                <div class="stat-card">
                                    <span class="stat-card__label">"Total Projects"</span>
                                    <b class="stat-card__value">{counts.total}</b>
                                </div>
                                <div class="stat-card">
                                    <span class="stat-card__label">"Working"</span>
                                    <b class="stat-card__value">{counts.working}</b>
                                </div>
                                <div class="stat-card">
                                    <span class="stat-card__label">"Client Review"</span>
                                    <b class="stat-card__value">{counts.review}</b>
                                </div>
                                <div class="stat-card">
                                    <span class="stat-card__label">"Developer Ready"</span>
                                    <b class="stat-card__value">{counts.developer_ready}</b>
                                </div>
                            }
                        }}
                    </div>
                    <div class="dashboard-page__cards">
                        {move || {
                            let state = projects.get();
                            state
                                .items
                                .iter()
                                .map(|project| {
                                    view! {
                                        <ProjectCard
                                            id=project.id.clone()
                                            title=project.title.clone()
                                            system=project.system
                                            status=project.status
                                            created_at=project.created_at.clone()
                                            pm=state.pm_label(project)
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>

                <Show when=move || show_create.get()>
                    <CreateProjectDialog on_cancel=on_create_cancel />
                </Show>
            </div>
        </Show>
    }
}

/// Fetch the project list, then resolve PM names before clearing the loading
/// flag so cards never render with raw user ids.
#[cfg(feature = "hydrate")]
fn load_projects(projects: RwSignal<ProjectsState>, api: Api) {
    leptos::task::spawn_local(async move {
        match api.fetch_projects().await {
            Ok(items) => {
                projects.update(|s| {
                    s.items = items;
                    s.error = None;
                });
                resolve_pm_names(projects, &api).await;
                projects.update(|s| s.loading = false);
            }
            Err(err) => {
                projects.update(|s| {
                    s.error = Some(err.detail());
                    s.loading = false;
                });
            }
        }
    });
}

/// One lookup per distinct unresolved `CreatedBy` id. Failed lookups fall
/// back to the raw id so the card never blanks.
#[cfg(feature = "hydrate")]
async fn resolve_pm_names(projects: RwSignal<ProjectsState>, api: &Api) {
    let ids = projects.with_untracked(ProjectsState::unresolved_pm_ids);
    let lookups = ids.iter().map(|id| api.fetch_user(id));
    let resolved = futures::future::join_all(lookups).await;
    projects.update(|s| {
        for (id, result) in ids.into_iter().zip(resolved) {
            let name = match result {
                Ok(user) => user.display_name().to_owned(),
                Err(_) => id.clone(),
            };
            s.pm_names.insert(id, name);
        }
    });
}

/// Modal dialog for creating a new workflow project.
#[component]
fn CreateProjectDialog(on_cancel: Callback<()>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let projects = expect_context::<RwSignal<ProjectsState>>();
    #[cfg(feature = "hydrate")]
    let session = expect_context::<RwSignal<SessionState>>();

    let title = RwSignal::new(String::new());
    let pm = RwSignal::new(String::new());
    let system = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    // PM picker options, `(user id, display label)` per account.
    let pm_options = RwSignal::new(Vec::<(String, String)>::new());
    let options_loading = RwSignal::new(true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match session_api(session).fetch_project_managers().await {
            Ok(users) => {
                pm_options.set(
                    users
                        .into_iter()
                        .map(|user| {
                            let label = user.display_name().to_owned();
                            (user.id, label)
                        })
                        .collect(),
                );
            }
            Err(err) => {
                log::warn!("PM lookup failed: {}", err.detail());
            }
        }
        options_loading.set(false);
    });

    let submit = Callback::new(move |()| {
        if submitting.get() {
            return;
        }
        let validated = match validate_new_project(&title.get(), &pm.get(), &system.get()) {
            Ok(values) => values,
            Err(notice) => {
                ui.update(|u| {
                    u.push_error(notice);
                });
                return;
            }
        };
        submitting.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let (title_value, pm_value, system_value) = validated;
            match session_api(session).create_project(&title_value, &pm_value, system_value).await {
                Ok(project) => {
                    projects.update(|s| s.push_created(project));
                    ui.update(|u| {
                        u.push_success("Project created!");
                    });
                }
                Err(err) => {
                    ui.update(|u| {
                        u.push_error(err.notice_text("Failed to create project"));
                    });
                }
            }
            submitting.set(false);
            on_cancel.run(());
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = validated;
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create New Workflow Project"</h2>
                <label class="dialog__label">
                    "Project Name"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="e.g., Griffin OBGYN athenahealth Migration"
                        prop:value=move || title.get()
                        on:input=move |ev| {
                            title.set(event_target_value(&ev));
                        }
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Assigned PM"
                    <Show
                        when=move || !options_loading.get()
                        fallback=move || view! { <p class="dialog__hint">"Loading PMs..."</p> }
                    >
                        <select
                            class="dialog__input"
                            prop:value=move || pm.get()
                            on:change=move |ev| pm.set(event_target_value(&ev))
                        >
                            <option value="">"Select PM"</option>
                            {move || {
                                pm_options
                                    .get()
                                    .into_iter()
                                    .map(|(id, label)| {
                                        view! { <option value=id>{label}</option> }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </Show>
                </label>
                <label class="dialog__label">
                    "Source System"
                    <select
                        class="dialog__input"
                        prop:value=move || system.get()
                        on:change=move |ev| system.set(event_target_value(&ev))
                    >
                        <option value="">"Select system"</option>
                        {SourceSystem::ALL
                            .into_iter()
                            .map(|sys| {
                                view! { <option value=sys.as_str()>{sys.as_str()}</option> }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || submitting.get()
                        on:click=move |_| submit.run(())
                    >
                        "Create Project"
                    </button>
                </div>
            </div>
        </div>
    }
}
