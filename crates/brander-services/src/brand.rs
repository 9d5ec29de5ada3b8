//! Request orchestrator
//!
//! Sequences one branding request: download the source object, extract its images,
//! brand and upload every image concurrently, re-zip archive uploads, then notify
//! the requester. The first failure aborts the request; objects already uploaded
//! are left in place.

use crate::email::EmailSender;
use crate::notification::render_results_html;
use crate::packager::create_package;
use brander_core::constants::{EMAIL_SUBJECT, PACKAGE_FILENAME};
use brander_core::{
    ArtifactRole, BrandError, BrandRequest, BrandResult, Config, ExtractedImage, ImageResult,
    NotificationPayload,
};
use brander_processing::image::codec::spawn_cpu;
use brander_processing::{extract, ImageTransformer, OverlayCache};
use brander_storage::traits::content_type_for_key;
use brander_storage::{generate_key, Storage};
use futures::future::try_join_all;
use std::sync::Arc;

/// Placeholder key used when a request names no source object.
const MISSING_SOURCE_KEY: &str = "undefined";

#[derive(Clone)]
pub struct BrandService {
    storage: Arc<dyn Storage>,
    transformer: ImageTransformer,
    email: Arc<dyn EmailSender>,
}

impl BrandService {
    pub fn new(
        storage: Arc<dyn Storage>,
        transformer: ImageTransformer,
        email: Arc<dyn EmailSender>,
    ) -> Self {
        Self {
            storage,
            transformer,
            email,
        }
    }

    /// Wire the service from configuration: overlay keys and resize fit.
    pub fn from_config(
        storage: Arc<dyn Storage>,
        config: &Config,
        email: Arc<dyn EmailSender>,
    ) -> Self {
        let overlays = Arc::new(OverlayCache::from_config(storage.clone(), config));
        let transformer = ImageTransformer::new(overlays, config.resize_fit());
        Self::new(storage, transformer, email)
    }

    pub fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// Run a branding request end to end.
    ///
    /// Email failures are logged and never fail the request.
    #[tracing::instrument(
        skip(self, request),
        fields(source_key = ?request.source_key, archive = request.is_archive())
    )]
    pub async fn handle(&self, request: BrandRequest) -> BrandResult<NotificationPayload> {
        let start = std::time::Instant::now();
        let source_key = request
            .source_key
            .clone()
            .unwrap_or_else(|| MISSING_SOURCE_KEY.to_string());

        let content = self.storage.download(&source_key).await?;

        let extract_key = source_key.clone();
        let images = spawn_cpu(move || extract(content, &extract_key)).await?;
        tracing::info!(image_count = images.len(), "Processing files");

        let results = try_join_all(images.into_iter().map(|image| self.process_image(image))).await?;
        tracing::info!(image_count = results.len(), "Finished processing files");

        let mut payload = NotificationPayload {
            results,
            ..Default::default()
        };

        if request.is_archive() {
            let (package_key, package_url) = self.package(&payload.results).await?;
            payload.package_key = Some(package_key);
            payload.package_url = Some(package_url);
        }

        self.notify(request.requester_email.as_deref(), &payload)
            .await;

        tracing::info!(
            result_count = payload.results.len(),
            packaged = payload.package_key.is_some(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Branding request completed"
        );

        Ok(payload)
    }

    /// Brand one image and store both versions.
    async fn process_image(&self, image: ExtractedImage) -> BrandResult<ImageResult> {
        let ExtractedImage { filename, content } = image;
        tracing::debug!(filename = %filename, "Processing file");

        let processed = self.transformer.transform(content.clone()).await?;

        let original_key = generate_key(&filename, ArtifactRole::Original);
        let processed_key = generate_key(&filename, ArtifactRole::Processed);
        let content_type = content_type_for_key(&filename);

        let original_url = self
            .storage
            .upload_with_key(&original_key, content, content_type)
            .await?;
        let processed_url = self
            .storage
            .upload_with_key(&processed_key, processed, content_type)
            .await?;

        Ok(ImageResult {
            original_url,
            processed_url,
        })
    }

    /// Re-zip the processed images and store the archive. Returns its key and URL.
    async fn package(&self, results: &[ImageResult]) -> BrandResult<(String, String)> {
        let archive = create_package(self.storage.clone(), results).await?;
        let package_key = generate_key(PACKAGE_FILENAME, ArtifactRole::Package);
        let package_url = self
            .storage
            .upload_with_key(&package_key, archive, "application/zip")
            .await?;
        Ok((package_key, package_url))
    }

    async fn notify(&self, requester_email: Option<&str>, payload: &NotificationPayload) {
        let result = match requester_email {
            Some(to) => {
                let html = render_results_html(payload);
                self.email.send_html(to, EMAIL_SUBJECT, &html).await
            }
            None => Err(BrandError::EmailDispatch(
                "No recipient address in request".to_string(),
            )),
        };

        match result {
            Ok(()) => tracing::info!("Email sent successfully"),
            Err(e) => tracing::error!(error = %e, "Failed to send email"),
        }
    }
}
