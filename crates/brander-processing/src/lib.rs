//! Brander Processing Library
//!
//! This crate holds the decision logic of the branding pipeline:
//! - Archive extraction and declared media type validation (`archive`, `media_type`)
//! - Resize, watermark selection and compositing (`image`)
//! - The process-wide overlay cache (`overlay_cache`)
//!
//! Decoding and encoding are CPU bound and run on the blocking thread pool.

pub mod archive;
pub mod image;
pub mod media_type;
pub mod overlay_cache;

pub use crate::archive::{extract, ALLOWED_ENTRY_EXTENSIONS};
pub use crate::image::{
    dominant_color, relative_luminance, ImageTransformer, WatermarkSelection, WatermarkSelector,
};
pub use media_type::{media_type_for_filename, ALLOWED_MEDIA_TYPES};
pub use overlay_cache::OverlayCache;
