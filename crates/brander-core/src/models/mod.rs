//! Domain models for the branding pipeline.

pub mod artifact;
pub mod brand;
pub mod watermark;

pub use artifact::ArtifactRole;
pub use brand::{
    BrandRequest, ExtractedImage, ImageResult, NotificationPayload, PresignRequest,
    PresignResponse,
};
pub use watermark::{ResizeFit, WatermarkVariant};
