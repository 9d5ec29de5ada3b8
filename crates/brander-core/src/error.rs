//! Error types module
//!
//! Every failure of the branding pipeline is a `BrandError`. Storage, processing and
//! packaging layers convert their own errors into it; the HTTP layer renders any of
//! them the same way (a 500 with the message echoed), so the metadata below drives
//! logging rather than status codes.

use std::io;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like a bad request body
    Debug,
    /// Warning level - for failures caused by the submitted content
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata describing how an error is reported.
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "STORAGE_NOT_FOUND")
    fn error_code(&self) -> &'static str;

    /// Whether retrying the same request could succeed
    fn is_recoverable(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum BrandError {
    /// The declared filename maps to a media type outside zip/gif/jpeg/png.
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Failed to decode image: {0}")]
    ImageDecode(String),

    #[error("Failed to encode image: {0}")]
    ImageEncode(String),

    #[error("Object not found in storage: {0}")]
    StorageNotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Failed to package processed images: {0}")]
    Packaging(String),

    /// Never surfaces to callers: dispatch failures are logged and swallowed.
    #[error("Failed to send email: {0}")]
    EmailDispatch(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for branding operations
pub type BrandResult<T> = Result<T, BrandError>;

impl From<io::Error> for BrandError {
    fn from(err: io::Error) -> Self {
        BrandError::Internal(format!("IO error: {}", err))
    }
}

impl From<serde_json::Error> for BrandError {
    fn from(err: serde_json::Error) -> Self {
        BrandError::InvalidRequest(format!("JSON parsing error: {}", err))
    }
}

/// Static metadata for each variant: (error_code, recoverable, log_level).
fn brand_error_static_metadata(err: &BrandError) -> (&'static str, bool, LogLevel) {
    match err {
        BrandError::UnsupportedFileType(_) => ("UNSUPPORTED_FILE_TYPE", false, LogLevel::Warn),
        BrandError::ImageDecode(_) => ("IMAGE_DECODE_ERROR", false, LogLevel::Warn),
        BrandError::ImageEncode(_) => ("IMAGE_ENCODE_ERROR", false, LogLevel::Error),
        BrandError::StorageNotFound(_) => ("STORAGE_NOT_FOUND", false, LogLevel::Warn),
        BrandError::Storage(_) => ("STORAGE_ERROR", true, LogLevel::Error),
        BrandError::Packaging(_) => ("PACKAGING_ERROR", true, LogLevel::Error),
        BrandError::EmailDispatch(_) => ("EMAIL_DISPATCH_ERROR", true, LogLevel::Warn),
        BrandError::InvalidRequest(_) => ("INVALID_REQUEST", false, LogLevel::Debug),
        BrandError::Internal(_) => ("INTERNAL_ERROR", true, LogLevel::Error),
    }
}

impl BrandError {
    /// Get the error type name for logs
    pub fn error_type(&self) -> &'static str {
        match self {
            BrandError::UnsupportedFileType(_) => "UnsupportedFileType",
            BrandError::ImageDecode(_) => "ImageDecode",
            BrandError::ImageEncode(_) => "ImageEncode",
            BrandError::StorageNotFound(_) => "StorageNotFound",
            BrandError::Storage(_) => "Storage",
            BrandError::Packaging(_) => "Packaging",
            BrandError::EmailDispatch(_) => "EmailDispatch",
            BrandError::InvalidRequest(_) => "InvalidRequest",
            BrandError::Internal(_) => "Internal",
        }
    }
}

impl ErrorMetadata for BrandError {
    /// There is no per-kind mapping: every failure is a 500.
    fn http_status_code(&self) -> u16 {
        500
    }

    fn error_code(&self) -> &'static str {
        brand_error_static_metadata(self).0
    }

    fn is_recoverable(&self) -> bool {
        brand_error_static_metadata(self).1
    }

    fn log_level(&self) -> LogLevel {
        brand_error_static_metadata(self).2
    }
}
