//! Shared HTTP middleware for Brander services

pub mod cors_headers;
pub mod request_id;

pub use cors_headers::cors_headers_middleware;
pub use request_id::{get_request_id, request_id_middleware, RequestId};
