//! Brander API Library
//!
//! This crate provides the HTTP handlers, error rendering and application setup of
//! the branding service.

pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;

// Re-exports
pub use error::HttpBrandError;
pub use state::AppState;
