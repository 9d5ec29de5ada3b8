use serde::{Deserialize, Serialize};

/// Body of `POST /brand`.
///
/// Both fields are optional on the wire: an absent field is carried through as `None`
/// and surfaces later as a storage or email failure rather than a validation error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BrandRequest {
    /// Object-storage key of the uploaded image or archive.
    #[serde(rename = "image")]
    pub source_key: Option<String>,
    /// Address the results are mailed to.
    #[serde(rename = "email")]
    pub requester_email: Option<String>,
}

impl BrandRequest {
    pub fn new(source_key: impl Into<String>, requester_email: impl Into<String>) -> Self {
        Self {
            source_key: Some(source_key.into()),
            requester_email: Some(requester_email.into()),
        }
    }

    /// Whether the source was declared as a zip archive.
    pub fn is_archive(&self) -> bool {
        self.source_key
            .as_deref()
            .is_some_and(|key| key.ends_with(".zip"))
    }
}

/// One image found in the uploaded asset.
#[derive(Clone, PartialEq, Eq)]
pub struct ExtractedImage {
    /// Entry path inside the archive, or the uploaded filename for a bare image.
    pub filename: String,
    pub content: Vec<u8>,
}

impl ExtractedImage {
    pub fn new(filename: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content,
        }
    }
}

impl std::fmt::Debug for ExtractedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractedImage")
            .field("filename", &self.filename)
            .field("size_bytes", &self.content.len())
            .finish()
    }
}

/// Where the original and branded copy of one image live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResult {
    pub original_url: String,
    pub processed_url: String,
}

/// Everything the requester is told about a finished request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPayload {
    pub results: Vec<ImageResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_url: Option<String>,
}

/// Body of `POST /presign`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PresignRequest {
    pub filename: Option<String>,
}

/// Response of `POST /presign`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresignResponse {
    pub url: String,
}
