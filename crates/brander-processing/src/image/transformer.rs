//! Image transformer - resize then watermark
//!
//! 1. Decode, fit into the output box and re-encode in the source format
//! 2. Select the overlay from the resized image
//! 3. Composite the overlay and encode again in the source format

use crate::image::codec::{decode, decode_with_format, encode, spawn_cpu};
use crate::image::resize::fit_to_bounds;
use crate::image::watermark::{composite, WatermarkSelection, WatermarkSelector};
use crate::overlay_cache::OverlayCache;
use brander_core::{BrandResult, ResizeFit};
use bytes::Bytes;
use image::ImageFormat;
use std::sync::Arc;

/// Produces the branded version of an image.
#[derive(Clone)]
pub struct ImageTransformer {
    selector: WatermarkSelector,
    fit: ResizeFit,
}

impl ImageTransformer {
    pub fn new(overlays: Arc<OverlayCache>, fit: ResizeFit) -> Self {
        Self {
            selector: WatermarkSelector::new(overlays),
            fit,
        }
    }

    pub fn fit(&self) -> ResizeFit {
        self.fit
    }

    /// Brand one image. Output is encoded in the same format as the input.
    #[tracing::instrument(skip_all, fields(size_bytes = content.len()))]
    pub async fn transform(&self, content: Vec<u8>) -> BrandResult<Vec<u8>> {
        let start = std::time::Instant::now();

        let (resized, format) = self.resize(content).await?;
        let selection = self.selector.select(resized.clone()).await?;
        let variant = selection.variant;
        let branded = Self::apply_watermark(resized, format, selection).await?;

        tracing::info!(
            format = ?format,
            variant = %variant,
            output_bytes = branded.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Image branded"
        );

        Ok(branded)
    }

    /// Fit into the output box, re-encoded in the source format.
    pub async fn resize(&self, content: Vec<u8>) -> BrandResult<(Bytes, ImageFormat)> {
        let fit = self.fit;
        spawn_cpu(move || {
            let (img, format) = decode_with_format(&content)?;
            let resized = fit_to_bounds(img, fit);
            tracing::debug!(
                width = resized.width(),
                height = resized.height(),
                "Resized image"
            );
            Ok((Bytes::from(encode(&resized, format)?), format))
        })
        .await
    }

    async fn apply_watermark(
        resized: Bytes,
        format: ImageFormat,
        selection: WatermarkSelection,
    ) -> BrandResult<Vec<u8>> {
        spawn_cpu(move || {
            let base = decode(&resized)?;
            let overlay = decode(&selection.overlay)?;
            let branded = composite(&base, &overlay, selection.left, selection.top);
            encode(&branded, format)
        })
        .await
    }
}
