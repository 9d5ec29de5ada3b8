//! Image processing module
//!
//! This module provides the branding transform:
//! - Fitting into the output box (resize)
//! - Dominant color and luminance (color)
//! - Overlay selection, placement and compositing (watermark)
//! - The resize → watermark chain (transformer)

pub mod codec;
pub mod color;
pub mod resize;
pub mod transformer;
pub mod watermark;

pub use transformer::ImageTransformer;

// Re-export commonly used types
pub use color::{dominant_color, relative_luminance};
pub use resize::{fit_to_bounds, target_dimensions};
pub use watermark::{overlay_offset, WatermarkSelection, WatermarkSelector};
