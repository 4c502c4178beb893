//! Object Upload Gateway for screenshot blobs.
//!
//! Screenshots live in external object storage, not behind `/api`. Uploads go
//! straight from the browser to the storage host's REST surface, and the
//! public object URL comes back as the value to persist in `ScreenshotPath`.
//!
//! Object keys are `{upload_ms}_{original_filename}`, which keeps repeated
//! uploads of the same file from colliding while leaving the filename legible
//! in the bucket listing.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

#[cfg(feature = "hydrate")]
use super::error::UploadError;

/// Storage host; deployments point this at their own project.
pub const STORAGE_URL: &str = "https://storage.screenflow.example.com";

/// Bucket holding every uploaded screenshot.
pub const STORAGE_BUCKET: &str = "legacyappdata";

/// Publishable key for the storage REST surface. Grants insert and public
/// read on the screenshot bucket only.
#[cfg(feature = "hydrate")]
const STORAGE_ANON_KEY: &str = "public-anon-key";

/// Object key for a screenshot uploaded at `now_ms` with the given filename.
#[cfg(any(test, feature = "hydrate"))]
fn storage_key(now_ms: u64, filename: &str) -> String {
    format!("{now_ms}_{filename}")
}

#[cfg(any(test, feature = "hydrate"))]
fn object_endpoint(key: &str) -> String {
    format!("{STORAGE_URL}/storage/v1/object/{STORAGE_BUCKET}/{key}")
}

/// Durable, unauthenticated URL for a stored object.
#[cfg(any(test, feature = "hydrate"))]
fn public_url(key: &str) -> String {
    format!("{STORAGE_URL}/storage/v1/object/public/{STORAGE_BUCKET}/{key}")
}

#[cfg(feature = "hydrate")]
#[derive(serde::Deserialize)]
struct StorageErrorBody {
    message: Option<String>,
}

/// Push one screenshot to the bucket and return its public URL.
///
/// One attempt per file; callers deciding what a failed item means for the
/// rest of a batch do so themselves.
///
/// # Errors
///
/// Fails with [`UploadError::Transport`] when the request never completes and
/// [`UploadError::Storage`] when the storage host rejects the object.
#[cfg(feature = "hydrate")]
pub async fn upload_screenshot(file: &web_sys::File) -> Result<String, UploadError> {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let now_ms = js_sys::Date::now() as u64;
    let key = storage_key(now_ms, &file.name());

    let resp = gloo_net::http::Request::post(&object_endpoint(&key))
        .header("Authorization", &format!("Bearer {STORAGE_ANON_KEY}"))
        .header("apikey", STORAGE_ANON_KEY)
        .body(file.clone())
        .map_err(|e| UploadError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| UploadError::Transport(e.to_string()))?;

    if resp.ok() {
        Ok(public_url(&key))
    } else {
        let status = resp.status();
        let message = match resp.json::<StorageErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => None,
        };
        Err(UploadError::Storage { status, message })
    }
}
