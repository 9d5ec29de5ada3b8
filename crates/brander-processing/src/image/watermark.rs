use crate::image::codec::{decode, dimensions_or_zero, spawn_cpu};
use crate::image::color::{dominant_color, relative_luminance};
use crate::overlay_cache::OverlayCache;
use brander_core::{BrandResult, WatermarkVariant};
use bytes::Bytes;
use image::{imageops, DynamicImage, GenericImageView};
use std::sync::Arc;

/// Horizontal overshoot of the anchored overlay past the right edge.
const ANCHOR_OVERSHOOT_LEFT: i64 = 25;
/// Vertical overshoot of the anchored overlay past the bottom edge.
const ANCHOR_OVERSHOOT_TOP: i64 = 45;

/// Overlay chosen for an image and where its top-left corner goes.
#[derive(Debug, Clone)]
pub struct WatermarkSelection {
    pub variant: WatermarkVariant,
    pub overlay: Bytes,
    pub left: i64,
    pub top: i64,
}

/// Variant for an image, from the luminance of its dominant color.
pub fn variant_for_image(img: &DynamicImage) -> WatermarkVariant {
    WatermarkVariant::for_luminance(relative_luminance(dominant_color(img)))
}

/// Offset of the overlay's top-left corner from the image's top-left corner.
pub fn overlay_offset(
    variant: WatermarkVariant,
    (image_width, image_height): (u32, u32),
    (overlay_width, overlay_height): (u32, u32),
) -> (i64, i64) {
    let left = image_width as i64 - overlay_width as i64 + ANCHOR_OVERSHOOT_LEFT;
    let top = image_height as i64 - overlay_height as i64 + ANCHOR_OVERSHOOT_TOP;
    let (correct_left, correct_top) = variant.offset_correction();
    (left + correct_left, top + correct_top)
}

/// Draw `overlay` onto `base` at `(left, top)`; parts outside the base are clipped.
pub fn composite(base: &DynamicImage, overlay: &DynamicImage, left: i64, top: i64) -> DynamicImage {
    let mut canvas = base.to_rgba8();
    imageops::overlay(&mut canvas, &overlay.to_rgba8(), left, top);
    DynamicImage::ImageRgba8(canvas)
}

/// Picks the overlay for a resized image.
#[derive(Clone)]
pub struct WatermarkSelector {
    overlays: Arc<OverlayCache>,
}

impl WatermarkSelector {
    pub fn new(overlays: Arc<OverlayCache>) -> Self {
        Self { overlays }
    }

    /// Select the overlay and offset for an encoded, already resized image.
    ///
    /// Same bytes always give the same selection. Missing dimensions count as zero.
    pub async fn select(&self, resized: Bytes) -> BrandResult<WatermarkSelection> {
        let (variant, image_dims) = spawn_cpu(move || {
            let img = decode(&resized)?;
            Ok((variant_for_image(&img), img.dimensions()))
        })
        .await?;

        let overlay = self.overlays.get(variant).await?;
        let overlay_dims = dimensions_or_zero(&overlay);
        let (left, top) = overlay_offset(variant, image_dims, overlay_dims);

        tracing::debug!(
            variant = %variant,
            image_width = image_dims.0,
            image_height = image_dims.1,
            overlay_width = overlay_dims.0,
            overlay_height = overlay_dims.1,
            left,
            top,
            "Selected watermark"
        );

        Ok(WatermarkSelection {
            variant,
            overlay,
            left,
            top,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    #[test]
    fn test_light_image_gets_dark_background_variant() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(20, 10, Rgb([240, 240, 240])));
        assert_eq!(variant_for_image(&img), WatermarkVariant::DarkBackground);
    }

    #[test]
    fn test_dark_image_gets_light_background_variant() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(20, 10, Rgb([10, 20, 40])));
        assert_eq!(variant_for_image(&img), WatermarkVariant::LightBackground);
    }

    #[test]
    fn test_offset_for_light_background() {
        // 1400 - 300 + 25 - 30, 700 - 100 + 45 - 40
        assert_eq!(
            overlay_offset(WatermarkVariant::LightBackground, (1400, 700), (300, 100)),
            (1095, 605)
        );
    }

    #[test]
    fn test_offset_for_dark_background() {
        // 1400 - 300 + 25, 700 - 100 + 45 - 50
        assert_eq!(
            overlay_offset(WatermarkVariant::DarkBackground, (1400, 700), (300, 100)),
            (1125, 595)
        );
    }

    #[test]
    fn test_offset_with_missing_dimensions() {
        assert_eq!(
            overlay_offset(WatermarkVariant::DarkBackground, (0, 0), (0, 0)),
            (25, -5)
        );
        assert_eq!(
            overlay_offset(WatermarkVariant::LightBackground, (100, 100), (0, 0)),
            (95, 105)
        );
    }

    #[test]
    fn test_composite_draws_and_clips() {
        let base = DynamicImage::ImageRgb8(RgbImage::from_pixel(10, 10, Rgb([255, 255, 255])));
        let overlay = DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255])));

        let out = composite(&base, &overlay, 8, -2);

        assert_eq!(out.dimensions(), (10, 10));
        assert_eq!(out.get_pixel(9, 0), Rgba([0, 0, 0, 255]));
        assert_eq!(out.get_pixel(9, 2), Rgba([255, 255, 255, 255]));
        assert_eq!(out.get_pixel(7, 0), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_transparent_overlay_pixels_leave_base() {
        let base = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([10, 10, 10])));
        let overlay =
            DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 0])));

        let out = composite(&base, &overlay, 0, 0);
        assert_eq!(out.get_pixel(1, 1), Rgba([10, 10, 10, 255]));
    }
}
