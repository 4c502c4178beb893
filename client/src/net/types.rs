//! Wire DTOs for the ScreenFlow REST API.
//!
//! DESIGN
//! ======
//! The remote schema is PascalCase with `ID`-suffixed identifiers, so every
//! field carries an explicit rename and the Rust side stays snake_case.
//! Identifier columns arrive as strings or numbers depending on the backing
//! table; `deserialize_id` normalizes both to `String`. Missing positions
//! default to zero, a missing or empty page title to "Untitled", and empty
//! screenshot paths collapse to `None`, which is what the canvas expects.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Source EMR a project documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceSystem {
    Epic,
    Cerner,
    #[serde(rename = "athenahealth")]
    Athenahealth,
}

impl SourceSystem {
    /// Every selectable system, in display order.
    pub const ALL: [Self; 3] = [Self::Epic, Self::Cerner, Self::Athenahealth];

    /// Wire and display spelling (athenahealth brands itself lowercase).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Epic => "Epic",
            Self::Cerner => "Cerner",
            Self::Athenahealth => "athenahealth",
        }
    }

    /// Parse the wire spelling back into a variant.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|system| system.as_str() == value)
    }
}

impl std::fmt::Display for SourceSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Review lifecycle of a project.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Working,
    Review,
    Ready,
    /// Legacy spelling still present on older rows.
    #[serde(rename = "Developer Ready")]
    DeveloperReady,
}

impl ProjectStatus {
    /// Statuses offered by the builder's status buttons.
    pub const SELECTABLE: [Self; 3] = [Self::Working, Self::Review, Self::Ready];

    /// Wire and display spelling.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Working => "Working",
            Self::Review => "Review",
            Self::Ready => "Ready",
            Self::DeveloperReady => "Developer Ready",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A migration-documentation project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "ProjectID", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    /// User id of the creating PM.
    #[serde(rename = "CreatedBy", default, deserialize_with = "deserialize_id")]
    pub created_by: String,
    #[serde(rename = "System")]
    pub system: SourceSystem,
    #[serde(rename = "Status")]
    pub status: ProjectStatus,
    #[serde(rename = "Description", default, deserialize_with = "deserialize_optional_text")]
    pub description: Option<String>,
    /// ISO 8601 creation timestamp as sent by the server.
    #[serde(rename = "CreatedAt", default)]
    pub created_at: String,
}

/// One captured screen belonging to a project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(rename = "PageID", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(rename = "ProjectID", default, deserialize_with = "deserialize_id")]
    pub project_id: String,
    #[serde(
        rename = "Title",
        default = "default_page_title",
        deserialize_with = "deserialize_page_title"
    )]
    pub title: String,
    /// Public screenshot URL; `None` for blank placeholder screens.
    #[serde(rename = "ScreenshotPath", default, deserialize_with = "deserialize_optional_text")]
    pub screenshot_path: Option<String>,
    #[serde(rename = "PositionX", default, deserialize_with = "deserialize_coordinate")]
    pub position_x: f64,
    #[serde(rename = "PositionY", default, deserialize_with = "deserialize_coordinate")]
    pub position_y: f64,
    #[serde(rename = "Order", default, deserialize_with = "deserialize_i64_from_number")]
    pub order: i64,
}

/// A directed navigation transition between two pages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    #[serde(rename = "WorkflowID", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(rename = "FromPageID", deserialize_with = "deserialize_id")]
    pub from_page_id: String,
    #[serde(rename = "ToPageID", deserialize_with = "deserialize_id")]
    pub to_page_id: String,
    #[serde(rename = "Label", default, deserialize_with = "deserialize_optional_text")]
    pub label: Option<String>,
}

/// A note left on one page. Append-only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "CommentID", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(rename = "PageID", default, deserialize_with = "deserialize_id")]
    pub page_id: String,
    /// Author display name as resolved by the server, when it joins users.
    #[serde(rename = "UserName", default, deserialize_with = "deserialize_optional_text")]
    pub user_name: Option<String>,
    #[serde(rename = "Content", default)]
    pub content: String,
    #[serde(rename = "CreatedAt", default)]
    pub created_at: String,
}

/// An account as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "UserID", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(rename = "Name", default, deserialize_with = "deserialize_optional_text")]
    pub name: Option<String>,
    #[serde(rename = "Email", default)]
    pub email: String,
    /// `"PM"` or `"Developer"`.
    #[serde(rename = "Role", default, deserialize_with = "deserialize_optional_text")]
    pub role: Option<String>,
}

impl User {
    /// Name when present, otherwise the email address.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match &self.name {
            Some(name) => name.as_str(),
            None => self.email.as_str(),
        }
    }
}

/// Login/register response: the account plus its bearer token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
}

fn default_page_title() -> String {
    "Untitled".to_owned()
}

fn deserialize_page_title<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(match value {
        Some(title) if !title.is_empty() => title,
        _ => default_page_title(),
    })
}

/// Accepts string or integer identifier columns; both normalize to `String`.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(id) => Ok(id.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        _ => Err(D::Error::custom("expected string or number identifier")),
    }
}

/// `null` and `""` both mean "absent" for optional text columns.
fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|text| !text.is_empty()))
}

/// Position columns may be `null` on rows created before drag persistence.
fn deserialize_coordinate<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.unwrap_or(0.0))
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        serde_json::Value::Null => Ok(0),
        _ => Err(D::Error::custom("expected number")),
    }
}
