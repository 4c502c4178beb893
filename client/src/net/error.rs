//! Error taxonomy for remote interaction.
//!
//! ERROR HANDLING
//! ==============
//! Three failure families, one per outward surface: REST calls
//! (`RemoteError`), object-storage uploads (`UploadError`), and form or
//! gesture validation caught before any network traffic
//! (`ValidationError`). Callers surface all of them as transient notices;
//! nothing here retries, times out, or compensates.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single REST call. At-most-once semantics; retry is manual.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("server returned {status}: {detail}", detail = .message.as_deref().unwrap_or("no detail"))]
    Status { status: u16, message: Option<String> },
}

impl RemoteError {
    /// Short human-readable cause for notices, preferring the server message.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Transport(cause) => cause.clone(),
            Self::Status { status, message } => match message {
                Some(message) => message.clone(),
                None => format!("server returned {status}"),
            },
        }
    }

    /// Notice text for a rejected submission: the server's own message when
    /// it sent one, otherwise the given fallback.
    #[must_use]
    pub fn notice_text(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

/// Failure of an object-storage upload.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    /// The upload never reached the storage service.
    #[error("upload failed: {0}")]
    Transport(String),
    /// The storage service rejected the object.
    #[error("storage returned {status}: {detail}", detail = .message.as_deref().unwrap_or("no detail"))]
    Storage { status: u16, message: Option<String> },
}

/// A user action rejected before any remote call was made.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ValidationError(pub String);
