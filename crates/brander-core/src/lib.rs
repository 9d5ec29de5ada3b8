//! Brander Core Library
//!
//! This crate provides the domain models, error types and configuration shared by
//! every Brander component: storage, image processing, services and the HTTP API.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod storage_types;

// Re-export commonly used types
pub use config::{BaseConfig, BrandConfig, Config};
pub use error::{BrandError, BrandResult, ErrorMetadata, LogLevel};
pub use models::{
    ArtifactRole, BrandRequest, ExtractedImage, ImageResult, NotificationPayload,
    PresignRequest, PresignResponse, ResizeFit, WatermarkVariant,
};
pub use storage_types::StorageBackend;
