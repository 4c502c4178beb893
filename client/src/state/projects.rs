//! Project-list state for the dashboard view.
//!
//! DESIGN
//! ======
//! Separating list state from active-canvas state avoids accidental coupling
//! between navigation inventory and in-canvas editing data. PM display names
//! arrive from a second round of per-user lookups, so they live in a side map
//! keyed by user ID rather than on the project rows themselves.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use std::collections::HashMap;

use crate::net::types::{Project, ProjectStatus};

/// Dashboard project inventory plus resolved PM names.
#[derive(Clone, Debug, Default)]
pub struct ProjectsState {
    pub items: Vec<Project>,
    /// PM display name per `CreatedBy` user ID. Lookup failures fall back to
    /// the raw ID at render time.
    pub pm_names: HashMap<String, String>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Aggregate counts for the dashboard stats row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: usize,
    pub working: usize,
    pub review: usize,
    pub developer_ready: usize,
}

impl ProjectsState {
    /// Count projects per status bucket for the stats row.
    #[must_use]
    pub fn status_counts(&self) -> StatusCounts {
        let mut counts = StatusCounts { total: self.items.len(), ..StatusCounts::default() };
        for project in &self.items {
            match project.status {
                ProjectStatus::Working => counts.working += 1,
                ProjectStatus::Review => counts.review += 1,
                // Both spellings mean the same lifecycle stage.
                ProjectStatus::Ready | ProjectStatus::DeveloperReady => counts.developer_ready += 1,
            }
        }
        counts
    }

    /// Append a freshly created project to the inventory.
    pub fn push_created(&mut self, project: Project) {
        self.items.push(project);
    }

    /// Distinct `CreatedBy` IDs still missing a resolved PM name.
    #[must_use]
    pub fn unresolved_pm_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = Vec::new();
        for project in &self.items {
            if project.created_by.is_empty() || self.pm_names.contains_key(&project.created_by) {
                continue;
            }
            if !ids.contains(&project.created_by) {
                ids.push(project.created_by.clone());
            }
        }
        ids
    }

    /// Name to show for a project's PM, falling back to the raw ID until the
    /// lookup resolves.
    #[must_use]
    pub fn pm_label(&self, project: &Project) -> String {
        self.pm_names
            .get(&project.created_by)
            .cloned()
            .unwrap_or_else(|| project.created_by.clone())
    }
}
