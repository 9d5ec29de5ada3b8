use anyhow::{Context, Result};
use brander_core::{BrandRequest, PresignRequest, PresignResponse};
use reqwest::Client;
use std::time::Duration;

/// Long enough for a large archive; the server gives up first.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(900);

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL from `BRANDER_API_URL` (or `API_URL`), defaulting to a local server.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("BRANDER_API_URL")
            .or_else(|_| std::env::var("API_URL"))
            .unwrap_or_else(|_| "http://localhost:3000".to_string());
        Self::new(base_url)
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Ask the API for an upload URL for `filename`.
    pub async fn presign(&self, filename: &str) -> Result<String> {
        let response = self
            .client
            .post(self.build_url("/presign"))
            .json(&PresignRequest {
                filename: Some(filename.to_string()),
            })
            .send()
            .await
            .context("Failed to send presign request")?;

        let response = check_status(response).await?;
        let body: PresignResponse = response
            .json()
            .await
            .context("Failed to parse presign response as JSON")?;
        Ok(body.url)
    }

    /// PUT the file bytes to a presigned URL.
    pub async fn upload(&self, url: &str, data: Vec<u8>) -> Result<()> {
        let response = self
            .client
            .put(url)
            .body(data)
            .send()
            .await
            .context("Failed to upload file")?;
        check_status(response).await?;
        Ok(())
    }

    /// Run the branding request and return the result page.
    pub async fn brand(&self, request: &BrandRequest) -> Result<String> {
        let response = self
            .client
            .post(self.build_url("/brand"))
            .json(request)
            .send()
            .await
            .context("Failed to send brand request")?;

        let response = check_status(response).await?;
        response
            .text()
            .await
            .context("Failed to read brand response")
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(anyhow::anyhow!(
        "API request failed with status {}: {}",
        status,
        error_text
    ))
}
