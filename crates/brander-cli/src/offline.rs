//! Offline branding against a local storage directory.

use anyhow::{Context, Result};
use brander_core::{BrandRequest, Config, WatermarkVariant};
use brander_services::{
    render_results_html, BrandService, DisabledEmailSender, LocalStorage, Storage,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct OfflineJob {
    pub file: PathBuf,
    pub storage_dir: PathBuf,
    /// Directory holding the overlays under their configured key names.
    pub watermarks: Option<PathBuf>,
}

fn file_name(path: &Path) -> Result<String> {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .with_context(|| format!("Not a file path: {}", path.display()))
}

/// Copy the input (and overlays, if given) into the storage directory, run the
/// pipeline with email disabled and return the result page.
pub async fn run(config: &Config, job: OfflineJob) -> Result<String> {
    let base_url = format!("file://{}", job.storage_dir.display());
    let storage: Arc<dyn Storage> = Arc::new(
        LocalStorage::new(&job.storage_dir, base_url)
            .await
            .context("Failed to open storage directory")?,
    );

    if let Some(ref dir) = job.watermarks {
        for variant in [WatermarkVariant::LightBackground, WatermarkVariant::DarkBackground] {
            let key = config.watermark_key(variant);
            let data = tokio::fs::read(dir.join(key))
                .await
                .with_context(|| format!("Failed to read overlay {} from {}", key, dir.display()))?;
            storage.upload_with_key(key, data, "image/png").await?;
        }
    }

    let key = file_name(&job.file)?;
    let data = tokio::fs::read(&job.file)
        .await
        .with_context(|| format!("Failed to read {}", job.file.display()))?;
    storage
        .upload_with_key(&key, data, "application/octet-stream")
        .await?;
    tracing::info!(key = %key, "Source uploaded to local storage");

    let service = BrandService::from_config(storage, config, Arc::new(DisabledEmailSender));
    let payload = service
        .handle(BrandRequest {
            source_key: Some(key),
            requester_email: None,
        })
        .await?;

    Ok(render_results_html(&payload))
}
