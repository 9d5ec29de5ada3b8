//! Watermark overlay cache
//!
//! The two overlay images live in the asset store. Each is fetched on first use and
//! kept for the life of the process; there is no eviction.

use brander_core::{BrandResult, Config, WatermarkVariant};
use brander_storage::Storage;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

pub struct OverlayCache {
    storage: Arc<dyn Storage>,
    light_key: String,
    dark_key: String,
    entries: RwLock<HashMap<WatermarkVariant, Bytes>>,
}

impl OverlayCache {
    pub fn new(storage: Arc<dyn Storage>, light_key: String, dark_key: String) -> Self {
        Self {
            storage,
            light_key,
            dark_key,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Cache reading the overlay keys configured for this process.
    pub fn from_config(storage: Arc<dyn Storage>, config: &Config) -> Self {
        Self::new(
            storage,
            config.watermark_key(WatermarkVariant::LightBackground).to_string(),
            config.watermark_key(WatermarkVariant::DarkBackground).to_string(),
        )
    }

    /// Storage key of a variant's overlay.
    pub fn key_for(&self, variant: WatermarkVariant) -> &str {
        match variant {
            WatermarkVariant::LightBackground => &self.light_key,
            WatermarkVariant::DarkBackground => &self.dark_key,
        }
    }

    /// Overlay bytes for a variant, fetched from storage on a miss.
    ///
    /// Concurrent misses may both fetch; the later insert wins and both see the same bytes.
    pub async fn get(&self, variant: WatermarkVariant) -> BrandResult<Bytes> {
        if let Some(overlay) = self.entries.read().await.get(&variant) {
            return Ok(overlay.clone());
        }

        let key = self.key_for(variant);
        tracing::debug!(variant = %variant, key = %key, "Overlay cache miss");

        let overlay = Bytes::from(self.storage.download(key).await?);
        self.entries.write().await.insert(variant, overlay.clone());

        tracing::info!(
            variant = %variant,
            key = %key,
            size_bytes = overlay.len(),
            "Cached watermark overlay"
        );

        Ok(overlay)
    }

    /// Number of overlays currently held.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brander_core::BrandError;
    use brander_storage::LocalStorage;
    use tempfile::TempDir;

    async fn cache_with_overlays() -> (TempDir, Arc<LocalStorage>, OverlayCache) {
        let dir = TempDir::new().unwrap();
        let storage = Arc::new(
            LocalStorage::new(dir.path(), "http://localhost:3000/objects".to_string())
                .await
                .unwrap(),
        );
        storage
            .upload_with_key("white.png", b"white".to_vec(), "image/png")
            .await
            .unwrap();
        storage
            .upload_with_key("black.png", b"black".to_vec(), "image/png")
            .await
            .unwrap();

        let cache = OverlayCache::new(
            storage.clone(),
            "white.png".to_string(),
            "black.png".to_string(),
        );
        (dir, storage, cache)
    }

    #[tokio::test]
    async fn test_fetches_each_variant_from_its_key() {
        let (_dir, _storage, cache) = cache_with_overlays().await;

        assert!(cache.is_empty().await);
        assert_eq!(
            cache.get(WatermarkVariant::LightBackground).await.unwrap(),
            Bytes::from_static(b"white")
        );
        assert_eq!(
            cache.get(WatermarkVariant::DarkBackground).await.unwrap(),
            Bytes::from_static(b"black")
        );
        assert_eq!(cache.len().await, 2);
    }

    #[tokio::test]
    async fn test_hit_does_not_touch_storage() {
        let (dir, _storage, cache) = cache_with_overlays().await;

        cache.get(WatermarkVariant::LightBackground).await.unwrap();
        std::fs::remove_file(dir.path().join("white.png")).unwrap();

        assert_eq!(
            cache.get(WatermarkVariant::LightBackground).await.unwrap(),
            Bytes::from_static(b"white")
        );
    }

    #[tokio::test]
    async fn test_missing_overlay_is_not_found() {
        let (dir, _storage, cache) = cache_with_overlays().await;
        std::fs::remove_file(dir.path().join("black.png")).unwrap();

        let err = cache.get(WatermarkVariant::DarkBackground).await.unwrap_err();
        assert!(matches!(err, BrandError::StorageNotFound(_)));
        assert!(cache.is_empty().await);
    }
}
