use crate::error::HttpBrandError;
use crate::state::AppState;
use axum::{extract::State, Json};
use brander_core::{BrandError, PresignRequest, PresignResponse};
use bytes::Bytes;
use std::sync::Arc;
use std::time::Duration;

/// `POST /presign`: a time-limited PUT URL for uploading `filename` into the bucket.
///
/// The object is stored under the bare filename, which is what the client later sends
/// to `/brand` as `image`.
#[tracing::instrument(skip(state, body))]
pub async fn presign(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<PresignResponse>, HttpBrandError> {
    let request: PresignRequest = if body.is_empty() {
        PresignRequest::default()
    } else {
        serde_json::from_slice(&body).map_err(BrandError::from)?
    };

    let filename = request
        .filename
        .filter(|f| !f.trim().is_empty())
        .ok_or_else(|| BrandError::InvalidRequest("filename is required".to_string()))?;

    let expires_in = Duration::from_secs(state.config.presign_expiry_secs());
    let url = state
        .storage
        .presigned_put_url(&filename, expires_in)
        .await?;

    tracing::info!(
        key = %filename,
        expires_in_secs = expires_in.as_secs(),
        "Issued presigned upload URL"
    );

    Ok(Json(PresignResponse { url }))
}
