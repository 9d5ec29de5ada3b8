//! Declared media type lookup
//!
//! The type of an upload is decided from its filename alone, before any bytes are
//! inspected. Only a filename whose extension is known and maps to something other
//! than an archive or one of the three web image formats is rejected.

use std::path::Path;

/// Media types the pipeline accepts as a declared upload type.
pub const ALLOWED_MEDIA_TYPES: [&str; 4] = ["application/zip", "image/gif", "image/jpeg", "image/png"];

/// Look up the media type declared by a filename's extension.
///
/// A bare name without a dot or directory (`"pdf"`) is read as an extension.
pub fn media_type_for_filename(filename: &str) -> Option<&'static str> {
    let candidate = format!("x.{}", filename);
    let extension = Path::new(&candidate)
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty())?;

    mime_guess::from_ext(extension).first_raw()
}

/// Whether a declared media type may enter the pipeline.
///
/// Unknown types are let through; they fail later if the bytes do not decode.
pub fn is_allowed(media_type: Option<&str>) -> bool {
    match media_type {
        Some(media_type) => ALLOWED_MEDIA_TYPES.contains(&media_type),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        assert_eq!(media_type_for_filename("cat.png"), Some("image/png"));
        assert_eq!(media_type_for_filename("CAT.JPG"), Some("image/jpeg"));
        assert_eq!(media_type_for_filename("anim.gif"), Some("image/gif"));
        assert_eq!(media_type_for_filename("pets.zip"), Some("application/zip"));
        assert_eq!(media_type_for_filename("dir/doc.pdf"), Some("application/pdf"));
        assert_eq!(media_type_for_filename("style.css"), Some("text/css"));
    }

    #[test]
    fn test_unknown_and_missing_extensions() {
        assert_eq!(media_type_for_filename("photo.nosuchext"), None);
        assert_eq!(media_type_for_filename("dir/noext"), None);
        assert_eq!(media_type_for_filename("trailing."), None);
    }

    #[test]
    fn test_bare_name_is_read_as_extension() {
        assert_eq!(media_type_for_filename("pdf"), Some("application/pdf"));
        assert_eq!(media_type_for_filename("nosuchext"), None);
    }

    #[test]
    fn test_common_non_image_types_are_recognised_and_rejected() {
        for filename in ["script.js", "style.css", "setup.exe", "clip.m4v", "song.mp3", "movie.mp4"] {
            let media_type = media_type_for_filename(filename);
            assert!(media_type.is_some(), "{} should be recognised", filename);
            assert!(!is_allowed(media_type), "{} should be rejected", filename);
        }
    }

    #[test]
    fn test_allowed_types() {
        assert!(is_allowed(Some("image/png")));
        assert!(is_allowed(Some("application/zip")));
        assert!(is_allowed(None));
        assert!(!is_allowed(Some("application/pdf")));
        assert!(!is_allowed(Some("image/webp")));
    }
}
