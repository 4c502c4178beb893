//! Reusable card component for project list items on the dashboard.

use leptos::prelude::*;

use crate::net::types::{ProjectStatus, SourceSystem};
use crate::util::format;

/// A dashboard card summarizing one capture project.
#[component]
pub fn ProjectCard(
    id: String,
    title: String,
    system: SourceSystem,
    status: ProjectStatus,
    created_at: String,
    pm: String,
) -> impl IntoView {
    let href = format!("/project/{id}");
    let created = format::short_date(&created_at);

    view! {
        <div class="project-card">
            <div class="project-card__head">
                <span class="project-card__title">{title}</span>
                <span class=format!("project-card__status {}", status_class(status))>
                    {status.as_str()}
                </span>
            </div>
            <div class="project-card__meta">
                <span class="project-card__system">{system.as_str()}</span>
                <span class="project-card__created">{created}</span>
            </div>
            <div class="project-card__pm">"PM: " {pm}</div>
            <a class="btn btn--primary project-card__open" href=href>
                "Open Workflow"
            </a>
        </div>
    }
}

fn status_class(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Working => "project-card__status--working",
        ProjectStatus::Review => "project-card__status--review",
        ProjectStatus::Ready | ProjectStatus::DeveloperReady => "project-card__status--ready",
    }
}
