//! Stored key generation.
//!
//! Key format: `<YYYY-MM-DD>_<HH-MM-SS>_<mmm>Z_<role>_<filename>`, i.e. an ISO-8601 UTC
//! timestamp split on `T` and `.`, with `:` replaced by `-`. The timestamp is taken
//! when the key is generated, so two artifacts of one request get distinct keys
//! unless they are generated within the same millisecond.

use brander_core::ArtifactRole;
use chrono::{DateTime, Utc};

/// Generate a storage key for an artifact, stamped with the current wall-clock time.
pub fn generate_key(filename: &str, role: ArtifactRole) -> String {
    let key = generate_key_at(Utc::now(), filename, role);
    tracing::debug!(key = %key, "Generated key");
    key
}

/// Generate a storage key for an artifact at a fixed instant.
pub fn generate_key_at(at: DateTime<Utc>, filename: &str, role: ArtifactRole) -> String {
    format!(
        "{}_{}_{}",
        at.format("%Y-%m-%d_%H-%M-%S_%3fZ"),
        role,
        filename
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 2).unwrap() + chrono::Duration::milliseconds(45)
    }

    #[test]
    fn test_key_layout() {
        assert_eq!(
            generate_key_at(instant(), "cat.png", ArtifactRole::Original),
            "2024-03-09_07-05-02_045Z_original_cat.png"
        );
    }

    #[test]
    fn test_key_roles() {
        assert_eq!(
            generate_key_at(instant(), "cat.png", ArtifactRole::Processed),
            "2024-03-09_07-05-02_045Z_processed_cat.png"
        );
        assert_eq!(
            generate_key_at(instant(), "processed_files.zip", ArtifactRole::Package),
            "2024-03-09_07-05-02_045Z_package_processed_files.zip"
        );
    }

    #[test]
    fn test_key_keeps_archive_subdirectories() {
        assert_eq!(
            generate_key_at(instant(), "pets/dog.jpg", ArtifactRole::Original),
            "2024-03-09_07-05-02_045Z_original_pets/dog.jpg"
        );
    }

    #[test]
    fn test_generate_key_uses_current_time() {
        let key = generate_key("cat.png", ArtifactRole::Original);
        let today = Utc::now().format("%Y-%m-%d").to_string();
        // Can straddle midnight; accept either day
        let yesterday = (Utc::now() - chrono::Duration::days(1))
            .format("%Y-%m-%d")
            .to_string();
        assert!(key.starts_with(&today) || key.starts_with(&yesterday));
        assert!(key.ends_with("Z_original_cat.png"));
    }
}
