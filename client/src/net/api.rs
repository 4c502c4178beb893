//! Remote Data Gateway for the ScreenFlow REST API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Native builds get
//! stubs that fail with a transport error, since the gateway is only
//! meaningful in the browser; pure endpoint/payload helpers stay compiled so
//! they remain natively testable.
//!
//! ERROR HANDLING
//! ==============
//! Every method is a single at-most-once call returning
//! `Result<_, RemoteError>`. Non-2xx responses carry the status plus the
//! server's `{"error": …}` detail when the body has one; transport failures
//! carry the underlying cause. No retries and no timeouts; the user repeats
//! the action to retry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::RemoteError;
use super::types::{AuthSession, Comment, Page, Project, ProjectStatus, SourceSystem, User, Workflow};
#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

/// Base path of the REST API behind the static host's proxy.
pub const API_BASE: &str = "/api";

/// Handle for issuing REST calls with an optional bearer token.
///
/// Built per call site from the session context, so no component reads the
/// token out of ambient storage.
#[derive(Clone, Debug, Default)]
pub struct Api {
    token: Option<String>,
}

// =============================================================================
// ENDPOINTS + PAYLOADS (pure, natively testable)
// =============================================================================

#[cfg(any(test, feature = "hydrate"))]
fn users_endpoint() -> String {
    format!("{API_BASE}/auth/users")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_by_id_endpoint(user_id: &str) -> String {
    format!("{API_BASE}/auth/users?id={user_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn project_endpoint(project_id: &str) -> String {
    format!("{API_BASE}/projects/{project_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn pages_by_project_endpoint(project_id: &str) -> String {
    format!("{API_BASE}/pages?projectId={project_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn page_endpoint(page_id: &str) -> String {
    format!("{API_BASE}/pages/{page_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn workflows_by_project_endpoint(project_id: &str) -> String {
    format!("{API_BASE}/workflows?projectId={project_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn workflow_endpoint(workflow_id: &str) -> String {
    format!("{API_BASE}/workflows/{workflow_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn comments_by_page_endpoint(page_id: &str) -> String {
    format!("{API_BASE}/comments?pageId={page_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Body for `POST /projects`. This endpoint takes PascalCase, unlike the
/// page/workflow/comment creates.
#[cfg(any(test, feature = "hydrate"))]
fn create_project_payload(title: &str, created_by: &str, system: SourceSystem) -> serde_json::Value {
    serde_json::json!({
        "Title": title,
        "CreatedBy": created_by,
        "System": system.as_str(),
    })
}

#[cfg(any(test, feature = "hydrate"))]
fn create_page_payload(
    project_id: &str,
    title: &str,
    screenshot_path: Option<&str>,
    order: i64,
) -> serde_json::Value {
    serde_json::json!({
        "projectId": project_id,
        "title": title,
        // Blank screens persist an empty path rather than omitting the field.
        "screenshotPath": screenshot_path.unwrap_or(""),
        "order": order,
    })
}

#[cfg(any(test, feature = "hydrate"))]
fn create_workflow_payload(from_page_id: &str, to_page_id: &str, label: Option<&str>) -> serde_json::Value {
    serde_json::json!({
        "fromPageId": from_page_id,
        "toPageId": to_page_id,
        "label": label,
    })
}

/// Body for `PUT /pages/:id` position updates; this endpoint takes PascalCase.
#[cfg(any(test, feature = "hydrate"))]
fn position_payload(x: f64, y: f64) -> serde_json::Value {
    serde_json::json!({ "PositionX": x, "PositionY": y })
}

// =============================================================================
// RESPONSE ENVELOPES
// =============================================================================

#[cfg(feature = "hydrate")]
#[derive(serde::Deserialize)]
struct ProjectsBody {
    projects: Vec<Project>,
}

#[cfg(feature = "hydrate")]
#[derive(serde::Deserialize)]
struct ProjectBody {
    project: Project,
}

#[cfg(feature = "hydrate")]
#[derive(serde::Deserialize)]
struct PagesBody {
    pages: Vec<Page>,
}

#[cfg(feature = "hydrate")]
#[derive(serde::Deserialize)]
struct PageBody {
    page: Page,
}

#[cfg(feature = "hydrate")]
#[derive(serde::Deserialize)]
struct WorkflowsBody {
    workflows: Vec<Workflow>,
}

#[cfg(feature = "hydrate")]
#[derive(serde::Deserialize)]
struct WorkflowBody {
    workflow: Workflow,
}

#[cfg(feature = "hydrate")]
#[derive(serde::Deserialize)]
struct CommentsBody {
    comments: Vec<Comment>,
}

#[cfg(feature = "hydrate")]
#[derive(serde::Deserialize)]
struct CommentBody {
    comment: Comment,
}

#[cfg(feature = "hydrate")]
#[derive(serde::Deserialize)]
struct UsersBody {
    users: Vec<User>,
}

#[cfg(feature = "hydrate")]
#[derive(serde::Deserialize)]
struct UserBody {
    user: User,
}

#[cfg(feature = "hydrate")]
#[derive(serde::Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

// =============================================================================
// REQUEST MACHINERY
// =============================================================================

#[cfg(feature = "hydrate")]
impl Api {
    fn apply_auth(&self, builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &bearer_header_value(token)),
            None => builder,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, RemoteError> {
        let resp = self
            .apply_auth(gloo_net::http::Request::get(url))
            .send()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;
        read_json(resp).await
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        builder: gloo_net::http::RequestBuilder,
        payload: &serde_json::Value,
    ) -> Result<T, RemoteError> {
        let resp = self
            .apply_auth(builder)
            .json(payload)
            .map_err(|e| RemoteError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;
        read_json(resp).await
    }

    async fn delete(&self, url: &str) -> Result<(), RemoteError> {
        let resp = self
            .apply_auth(gloo_net::http::Request::delete(url))
            .send()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;
        if resp.ok() {
            Ok(())
        } else {
            Err(error_from_response(resp).await)
        }
    }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, RemoteError> {
    if !resp.ok() {
        return Err(error_from_response(resp).await);
    }
    resp.json::<T>().await.map_err(|e| RemoteError::Transport(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn error_from_response(resp: gloo_net::http::Response) -> RemoteError {
    let status = resp.status();
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => None,
    };
    RemoteError::Status { status, message }
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> RemoteError {
    RemoteError::Transport("not available outside the browser".to_owned())
}

// =============================================================================
// OPERATIONS
// =============================================================================

impl Api {
    /// Gateway bound to the given bearer token, when one exists.
    #[must_use]
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }

    // --- auth ----------------------------------------------------------------

    /// `POST /auth/register`.
    ///
    /// # Errors
    ///
    /// Fails with [`RemoteError`] if the request does not succeed.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: &str,
    ) -> Result<AuthSession, RemoteError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({
                "name": name,
                "email": email,
                "password": password,
                "role": role,
            });
            self.send_json(
                gloo_net::http::Request::post(&format!("{API_BASE}/auth/register")),
                &payload,
            )
            .await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name, email, password, role);
            Err(unavailable())
        }
    }

    /// `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Fails with [`RemoteError`] if the credentials are rejected or the
    /// request does not succeed.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, RemoteError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({ "email": email, "password": password });
            self.send_json(gloo_net::http::Request::post(&format!("{API_BASE}/auth/login")), &payload)
                .await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(unavailable())
        }
    }

    /// `GET /auth/users`, listing the accounts offered in the PM picker.
    ///
    /// # Errors
    ///
    /// Fails with [`RemoteError`] if the request does not succeed.
    pub async fn fetch_project_managers(&self) -> Result<Vec<User>, RemoteError> {
        #[cfg(feature = "hydrate")]
        {
            let body: UsersBody = self.get_json(&users_endpoint()).await?;
            Ok(body.users)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(unavailable())
        }
    }

    /// `GET /auth/users?id=`, resolving one account for PM display names.
    ///
    /// # Errors
    ///
    /// Fails with [`RemoteError`] if the account cannot be fetched.
    pub async fn fetch_user(&self, user_id: &str) -> Result<User, RemoteError> {
        #[cfg(feature = "hydrate")]
        {
            let body: UserBody = self.get_json(&user_by_id_endpoint(user_id)).await?;
            Ok(body.user)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user_id;
            Err(unavailable())
        }
    }

    // --- projects ------------------------------------------------------------

    /// `GET /projects`.
    ///
    /// # Errors
    ///
    /// Fails with [`RemoteError`] if the request does not succeed.
    pub async fn fetch_projects(&self) -> Result<Vec<Project>, RemoteError> {
        #[cfg(feature = "hydrate")]
        {
            let body: ProjectsBody = self.get_json(&format!("{API_BASE}/projects")).await?;
            Ok(body.projects)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(unavailable())
        }
    }

    /// `GET /projects/:id`.
    ///
    /// # Errors
    ///
    /// Fails with [`RemoteError`] if the project cannot be fetched.
    pub async fn fetch_project(&self, project_id: &str) -> Result<Project, RemoteError> {
        #[cfg(feature = "hydrate")]
        {
            let body: ProjectBody = self.get_json(&project_endpoint(project_id)).await?;
            Ok(body.project)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = project_id;
            Err(unavailable())
        }
    }

    /// `POST /projects`.
    ///
    /// # Errors
    ///
    /// Fails with [`RemoteError`] if the project is not created.
    pub async fn create_project(
        &self,
        title: &str,
        created_by: &str,
        system: SourceSystem,
    ) -> Result<Project, RemoteError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = create_project_payload(title, created_by, system);
            let body: ProjectBody = self
                .send_json(gloo_net::http::Request::post(&format!("{API_BASE}/projects")), &payload)
                .await?;
            Ok(body.project)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (title, created_by, system);
            Err(unavailable())
        }
    }

    /// `PUT /projects/:id` with a new status.
    ///
    /// # Errors
    ///
    /// Fails with [`RemoteError`] if the update is rejected; local state must
    /// not change in that case.
    pub async fn update_project_status(
        &self,
        project_id: &str,
        status: ProjectStatus,
    ) -> Result<Project, RemoteError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({ "status": status.as_str() });
            let body: ProjectBody = self
                .send_json(gloo_net::http::Request::put(&project_endpoint(project_id)), &payload)
                .await?;
            Ok(body.project)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (project_id, status);
            Err(unavailable())
        }
    }

    // --- pages ---------------------------------------------------------------

    /// `GET /pages?projectId=`.
    ///
    /// # Errors
    ///
    /// Fails with [`RemoteError`] if the request does not succeed.
    pub async fn fetch_pages(&self, project_id: &str) -> Result<Vec<Page>, RemoteError> {
        #[cfg(feature = "hydrate")]
        {
            let body: PagesBody = self.get_json(&pages_by_project_endpoint(project_id)).await?;
            Ok(body.pages)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = project_id;
            Err(unavailable())
        }
    }

    /// `POST /pages`.
    ///
    /// # Errors
    ///
    /// Fails with [`RemoteError`] if the page is not created.
    pub async fn create_page(
        &self,
        project_id: &str,
        title: &str,
        screenshot_path: Option<&str>,
        order: i64,
    ) -> Result<Page, RemoteError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = create_page_payload(project_id, title, screenshot_path, order);
            let body: PageBody = self
                .send_json(gloo_net::http::Request::post(&format!("{API_BASE}/pages")), &payload)
                .await?;
            Ok(body.page)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (project_id, title, screenshot_path, order);
            Err(unavailable())
        }
    }

    /// `PUT /pages/:id` with new canvas coordinates.
    ///
    /// Fire-and-forget from the caller's point of view: the node has already
    /// moved locally by the time this is sent.
    ///
    /// # Errors
    ///
    /// Fails with [`RemoteError`] if the update is rejected.
    pub async fn update_page_position(&self, page_id: &str, x: f64, y: f64) -> Result<(), RemoteError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = position_payload(x, y);
            let _body: PageBody = self
                .send_json(gloo_net::http::Request::put(&page_endpoint(page_id)), &payload)
                .await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (page_id, x, y);
            Err(unavailable())
        }
    }

    /// `PUT /pages/:id` with a new title.
    ///
    /// # Errors
    ///
    /// Fails with [`RemoteError`] if the rename is rejected; the committed
    /// title must not change in that case.
    pub async fn update_page_title(&self, page_id: &str, title: &str) -> Result<Page, RemoteError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({ "title": title });
            let body: PageBody = self
                .send_json(gloo_net::http::Request::put(&page_endpoint(page_id)), &payload)
                .await?;
            Ok(body.page)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (page_id, title);
            Err(unavailable())
        }
    }

    /// `DELETE /pages/:id`.
    ///
    /// # Errors
    ///
    /// Fails with [`RemoteError`]; the optimistic local removal stands
    /// regardless.
    pub async fn delete_page(&self, page_id: &str) -> Result<(), RemoteError> {
        #[cfg(feature = "hydrate")]
        {
            self.delete(&page_endpoint(page_id)).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = page_id;
            Err(unavailable())
        }
    }

    // --- workflows -----------------------------------------------------------

    /// `GET /workflows?projectId=`.
    ///
    /// # Errors
    ///
    /// Fails with [`RemoteError`] if the request does not succeed.
    pub async fn fetch_workflows(&self, project_id: &str) -> Result<Vec<Workflow>, RemoteError> {
        #[cfg(feature = "hydrate")]
        {
            let body: WorkflowsBody = self.get_json(&workflows_by_project_endpoint(project_id)).await?;
            Ok(body.workflows)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = project_id;
            Err(unavailable())
        }
    }

    /// `POST /workflows`.
    ///
    /// # Errors
    ///
    /// Fails with [`RemoteError`]; no edge may appear locally in that case.
    pub async fn create_workflow(
        &self,
        from_page_id: &str,
        to_page_id: &str,
        label: Option<&str>,
    ) -> Result<Workflow, RemoteError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = create_workflow_payload(from_page_id, to_page_id, label);
            let body: WorkflowBody = self
                .send_json(gloo_net::http::Request::post(&format!("{API_BASE}/workflows")), &payload)
                .await?;
            Ok(body.workflow)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (from_page_id, to_page_id, label);
            Err(unavailable())
        }
    }

    /// `DELETE /workflows/:id`.
    ///
    /// # Errors
    ///
    /// Fails with [`RemoteError`]; the edge stays on the canvas in that case.
    pub async fn delete_workflow(&self, workflow_id: &str) -> Result<(), RemoteError> {
        #[cfg(feature = "hydrate")]
        {
            self.delete(&workflow_endpoint(workflow_id)).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = workflow_id;
            Err(unavailable())
        }
    }

    // --- comments ------------------------------------------------------------

    /// `GET /comments?pageId=`.
    ///
    /// # Errors
    ///
    /// Fails with [`RemoteError`] if the request does not succeed.
    pub async fn fetch_comments(&self, page_id: &str) -> Result<Vec<Comment>, RemoteError> {
        #[cfg(feature = "hydrate")]
        {
            let body: CommentsBody = self.get_json(&comments_by_page_endpoint(page_id)).await?;
            Ok(body.comments)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = page_id;
            Err(unavailable())
        }
    }

    /// `POST /comments`. Comments are append-only; there is no edit or delete.
    ///
    /// # Errors
    ///
    /// Fails with [`RemoteError`] if the comment is not stored.
    pub async fn create_comment(&self, page_id: &str, content: &str) -> Result<Comment, RemoteError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({ "pageId": page_id, "content": content });
            let body: CommentBody = self
                .send_json(gloo_net::http::Request::post(&format!("{API_BASE}/comments")), &payload)
                .await?;
            Ok(body.comment)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (page_id, content);
            Err(unavailable())
        }
    }
}
