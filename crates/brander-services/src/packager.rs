use anyhow::{anyhow, Context, Result};
use brander_core::{BrandError, BrandResult, ImageResult};
use brander_storage::Storage;
use std::io::Write;
use std::sync::Arc;

/// Entry name for a stored object: the last path segment of its key.
fn archive_entry_name(storage_key: &str, fallback: &str) -> String {
    storage_key
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty() && *s != "." && *s != "..")
        .unwrap_or(fallback)
        .to_string()
}

/// Re-zip the processed images of a request.
///
/// Each object is fetched back through its processed URL. Any failure aborts the
/// whole package; nothing partial is returned.
pub async fn create_package(
    storage: Arc<dyn Storage>,
    results: &[ImageResult],
) -> BrandResult<Vec<u8>> {
    let buffer = create_zip_archive(storage, results)
        .await
        .map_err(|e| BrandError::Packaging(format!("{:#}", e)))?;

    tracing::info!(
        result_count = results.len(),
        size_bytes = buffer.len(),
        "Created package archive"
    );

    Ok(buffer)
}

/// Fetch every processed object, keyed by entry name.
///
/// A repeated entry name keeps its first position and takes the later content.
async fn collect_entries(
    storage: &Arc<dyn Storage>,
    results: &[ImageResult],
) -> Result<Vec<(String, Vec<u8>)>> {
    let mut entries: Vec<(String, Vec<u8>)> = Vec::with_capacity(results.len());

    for (index, result) in results.iter().enumerate() {
        let storage_key = storage
            .key_from_url(&result.processed_url)
            .ok_or_else(|| anyhow!("Not a stored object URL: {}", result.processed_url))?;

        let file_data = storage
            .download(&storage_key)
            .await
            .with_context(|| format!("Failed to download file: {}", storage_key))?;

        let entry_name = archive_entry_name(&storage_key, &format!("unnamed_{}", index));

        match entries.iter_mut().find(|(name, _)| *name == entry_name) {
            Some(existing) => {
                tracing::debug!(entry = %entry_name, "Replacing package entry with same name");
                existing.1 = file_data;
            }
            None => entries.push((entry_name, file_data)),
        }
    }

    Ok(entries)
}

async fn create_zip_archive(storage: Arc<dyn Storage>, results: &[ImageResult]) -> Result<Vec<u8>> {
    use zip::write::{FileOptions, ZipWriter};
    use zip::CompressionMethod;

    let entries = collect_entries(&storage, results).await?;

    let mut buffer = Vec::new();
    {
        let mut zip = ZipWriter::new(std::io::Cursor::new(&mut buffer));
        let options = FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .unix_permissions(0o644);

        for (entry_name, file_data) in &entries {
            zip.start_file(entry_name.as_str(), options)
                .with_context(|| format!("Failed to add file to ZIP: {}", entry_name))?;
            zip.write_all(file_data)
                .with_context(|| format!("Failed to write file data to ZIP: {}", entry_name))?;
        }

        zip.finish().context("Failed to finalize ZIP archive")?;
    }

    Ok(buffer)
}
