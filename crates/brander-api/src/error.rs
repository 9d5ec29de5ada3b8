//! HTTP error response conversion
//!
//! Every failure becomes a 500 whose HTML body echoes the error message.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use brander_core::{BrandError, ErrorMetadata, LogLevel};
use brander_services::{render_error_html, StorageError};

/// Wrapper type for BrandError to implement IntoResponse
/// (orphan rules: both the trait and the error type are foreign to this crate)
#[derive(Debug)]
pub struct HttpBrandError(pub BrandError);

impl From<BrandError> for HttpBrandError {
    fn from(err: BrandError) -> Self {
        HttpBrandError(err)
    }
}

impl From<StorageError> for HttpBrandError {
    fn from(err: StorageError) -> Self {
        HttpBrandError(err.into())
    }
}

/// Log the error at the level its metadata asks for
fn log_error(error: &BrandError) {
    let error_type = error.error_type();
    let error_code = error.error_code();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type, error_code, "Request failed");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type, error_code, "Request failed");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_type, error_code, "Request failed");
        }
    }
}

impl IntoResponse for HttpBrandError {
    fn into_response(self) -> Response {
        let error = &self.0;
        let status = StatusCode::from_u16(error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(error);

        (
            status,
            [(header::CONTENT_TYPE, "text/html")],
            render_error_html(&error.to_string()),
        )
            .into_response()
    }
}
