//! Storage initialization

use anyhow::{Context, Result};
use brander_core::Config;
use brander_services::{create_storage, Storage};
use std::sync::Arc;

/// Build the configured storage backend
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    let storage = create_storage(config)
        .await
        .context("Failed to initialize storage backend")?;

    tracing::info!(
        backend = ?storage.backend_type(),
        bucket = %storage.bucket(),
        "Storage initialized"
    );

    Ok(storage)
}
