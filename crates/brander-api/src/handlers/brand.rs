use crate::error::HttpBrandError;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};
use brander_core::{BrandError, BrandRequest};
use brander_services::render_results_html;
use bytes::Bytes;
use std::sync::Arc;

/// Parse the request body. An empty body is an empty request; missing fields stay `None`.
fn parse_request(body: &[u8]) -> Result<BrandRequest, BrandError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(BrandRequest::default());
    }
    Ok(serde_json::from_slice(body)?)
}

/// `POST /brand`: run the pipeline and answer with the results page.
#[tracing::instrument(skip(state, body), fields(body_bytes = body.len()))]
pub async fn brand(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<impl IntoResponse, HttpBrandError> {
    let request = parse_request(&body)?;
    let payload = state.brand_service.handle(request).await?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html")],
        render_results_html(&payload),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_is_empty_request() {
        let request = parse_request(b"").unwrap();
        assert!(request.source_key.is_none());
        assert!(request.requester_email.is_none());
        assert!(parse_request(b"  \n").unwrap().source_key.is_none());
    }

    #[test]
    fn test_body_fields() {
        let request = parse_request(br#"{"image":"pets.zip","email":"a@b.com"}"#).unwrap();
        assert_eq!(request.source_key.as_deref(), Some("pets.zip"));
        assert_eq!(request.requester_email.as_deref(), Some("a@b.com"));
        assert!(request.is_archive());
    }

    #[test]
    fn test_invalid_json_is_invalid_request() {
        let err = parse_request(b"{nope").unwrap_err();
        assert!(matches!(err, BrandError::InvalidRequest(_)));
    }
}
