//! Fixed values of the branding pipeline.

/// Bounding box every branded image is fitted into.
pub const MAX_OUTPUT_WIDTH: u32 = 1400;
pub const MAX_OUTPUT_HEIGHT: u32 = 1400;

/// Default bucket when `BRAND_IMAGE_BUCKET` is unset.
pub const DEFAULT_BUCKET: &str = "p6-dne";

/// Default sender when `EMAIL_SENDER` is unset.
pub const DEFAULT_EMAIL_SENDER: &str = "your-sender-email@example.com";

pub const DEFAULT_REGION: &str = "us-east-1";

/// Overlay read on dark images (white logo).
pub const DEFAULT_WATERMARK_LIGHT_KEY: &str = "processed_LDARBranding-white.png";

/// Overlay read on light images (black logo).
pub const DEFAULT_WATERMARK_DARK_KEY: &str = "processed_LDARBranding-black.png";

pub const EMAIL_SUBJECT: &str = "P6 LDAR Pet Image Branding Results: Success";

/// Filename component of the re-zipped package key.
pub const PACKAGE_FILENAME: &str = "processed_files.zip";

/// Invocation budget of a single branding request.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 14 * 60;
