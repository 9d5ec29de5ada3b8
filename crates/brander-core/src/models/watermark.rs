use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Which of the two fixed overlays is composited onto an image.
///
/// The name describes the background the overlay is designed for: the
/// light-background overlay is a white logo and is used on dark images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WatermarkVariant {
    LightBackground,
    DarkBackground,
}

impl WatermarkVariant {
    /// Luminance threshold below which an image counts as dark.
    pub const DARK_IMAGE_THRESHOLD: f64 = 0.5;

    /// Pick the overlay for an image of the given relative luminance.
    pub fn for_luminance(luminance: f64) -> Self {
        if luminance < Self::DARK_IMAGE_THRESHOLD {
            WatermarkVariant::LightBackground
        } else {
            WatermarkVariant::DarkBackground
        }
    }

    /// Empirical `(left, top)` correction applied on top of the anchored offset.
    pub fn offset_correction(&self) -> (i64, i64) {
        match self {
            WatermarkVariant::LightBackground => (-30, -40),
            WatermarkVariant::DarkBackground => (0, -50),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WatermarkVariant::LightBackground => "light-background",
            WatermarkVariant::DarkBackground => "dark-background",
        }
    }
}

impl Display for WatermarkVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// How an image is fitted into the output bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeFit {
    /// Preserve aspect ratio, never enlarge.
    #[default]
    Inside,
    /// Stretch to the full box, ignoring aspect ratio.
    Fill,
}

impl FromStr for ResizeFit {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inside" => Ok(ResizeFit::Inside),
            "fill" => Ok(ResizeFit::Fill),
            _ => Err(anyhow::anyhow!("Invalid resize fit: {}", s)),
        }
    }
}
