//! Test helpers: build the router over local storage for integration tests.
//!
//! Run from workspace root: `cargo test -p brander-api`.

pub mod fixtures;

use async_trait::async_trait;
use axum_test::TestServer;
use brander_api::setup::{routes, services};
use brander_core::{BrandResult, Config, WatermarkVariant};
use brander_services::{EmailSender, LocalStorage, Storage};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

pub const BASE_URL: &str = "http://localhost:3000/objects";

/// Captures every email instead of sending it.
#[derive(Default)]
pub struct RecordingEmailSender {
    pub sent: Mutex<Vec<SentEmail>>,
}

#[derive(Debug, Clone)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

#[async_trait]
impl EmailSender for RecordingEmailSender {
    async fn send_html(&self, to: &str, subject: &str, html: &str) -> BrandResult<()> {
        self.sent.lock().unwrap().push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            html: html.to_string(),
        });
        Ok(())
    }
}

/// Test application: server and owned resources.
pub struct TestApp {
    pub server: TestServer,
    pub storage: Arc<dyn Storage>,
    pub email: Arc<RecordingEmailSender>,
    pub temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    pub fn sent_emails(&self) -> Vec<SentEmail> {
        self.email.sent.lock().unwrap().clone()
    }

    /// Put an object into the bucket as if the browser had uploaded it.
    pub async fn put_object(&self, key: &str, data: Vec<u8>) {
        self.storage
            .upload_with_key(key, data, "application/octet-stream")
            .await
            .expect("Failed to seed object");
    }

    /// Fetch an object back through its public URL.
    pub async fn object_at(&self, url: &str) -> Vec<u8> {
        let key = self
            .storage
            .key_from_url(url)
            .unwrap_or_else(|| panic!("Not a stored URL: {}", url));
        self.storage
            .download(&key)
            .await
            .expect("Failed to read object")
    }

    /// Number of objects in the bucket.
    pub fn object_count(&self) -> usize {
        std::fs::read_dir(self.temp_dir.path())
            .expect("Failed to list storage")
            .count()
    }
}

/// Setup test app with local storage and both watermark overlays in place.
pub async fn setup_test_app() -> TestApp {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage: Arc<dyn Storage> = Arc::new(
        LocalStorage::new(temp_dir.path(), BASE_URL.to_string())
            .await
            .expect("Failed to create local storage"),
    );

    let config = Config::default();
    for (variant, overlay) in [
        (WatermarkVariant::LightBackground, fixtures::light_overlay()),
        (WatermarkVariant::DarkBackground, fixtures::dark_overlay()),
    ] {
        storage
            .upload_with_key(config.watermark_key(variant), overlay, "image/png")
            .await
            .expect("Failed to upload overlay");
    }

    let email = Arc::new(RecordingEmailSender::default());
    let state = services::build_state(&config, storage.clone(), email.clone());
    let app = routes::setup_routes(&config, state);

    let server = TestServer::new(app.into_make_service()).expect("Failed to create test server");

    TestApp {
        server,
        storage,
        email,
        temp_dir,
    }
}
