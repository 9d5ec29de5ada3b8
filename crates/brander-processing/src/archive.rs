//! Archive Extractor
//!
//! Turns an uploaded object into the list of images to brand: the object itself, or
//! the image entries of a zip archive.

use crate::media_type::{is_allowed, media_type_for_filename};
use brander_core::{BrandError, BrandResult, ExtractedImage};
use std::io::{Cursor, Read};
use std::path::Path;
use zip::ZipArchive;

/// Entry extensions kept when unpacking an archive.
///
/// Narrower than the declared type check: `.jpeg` entries are skipped.
pub const ALLOWED_ENTRY_EXTENSIONS: [&str; 3] = ["jpg", "gif", "png"];

/// Path marker of the resource-fork folder macOS adds to archives.
const MACOS_METADATA_MARKER: &str = "__MACOSX";

/// Extract the images contained in an uploaded object.
///
/// `filename` is the declared name (the storage key). A name ending in `.zip` is
/// unpacked; anything else is returned as a single image without inspection.
pub fn extract(content: Vec<u8>, filename: &str) -> BrandResult<Vec<ExtractedImage>> {
    let media_type = media_type_for_filename(filename);
    if !is_allowed(media_type) {
        let media_type = media_type.unwrap_or_default();
        tracing::warn!(filename = %filename, media_type = %media_type, "Rejected upload type");
        return Err(BrandError::UnsupportedFileType(media_type.to_string()));
    }

    if !filename.ends_with(".zip") {
        return Ok(vec![ExtractedImage::new(filename, content)]);
    }

    let images = extract_zip(content)?;
    tracing::info!(
        filename = %filename,
        image_count = images.len(),
        "Extracted images from archive"
    );
    Ok(images)
}

fn extract_zip(content: Vec<u8>) -> BrandResult<Vec<ExtractedImage>> {
    let mut archive = ZipArchive::new(Cursor::new(content))
        .map_err(|e| BrandError::InvalidRequest(format!("Failed to open zip archive: {}", e)))?;

    let mut images = Vec::new();
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index).map_err(|e| {
            BrandError::InvalidRequest(format!("Failed to read zip entry {}: {}", index, e))
        })?;

        let name = entry.name().to_string();
        if entry.is_dir() || name.contains(MACOS_METADATA_MARKER) {
            continue;
        }
        if !has_allowed_extension(&name) {
            tracing::debug!(entry = %name, "Skipping non-image archive entry");
            continue;
        }

        let mut buffer = Vec::with_capacity(entry.size() as usize);
        entry.read_to_end(&mut buffer).map_err(|e| {
            BrandError::InvalidRequest(format!("Failed to decompress zip entry {}: {}", name, e))
        })?;

        images.push(ExtractedImage::new(name, buffer));
    }

    Ok(images)
}

fn has_allowed_extension(entry_name: &str) -> bool {
    Path::new(entry_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .is_some_and(|e| ALLOWED_ENTRY_EXTENSIONS.contains(&e.as_str()))
}
