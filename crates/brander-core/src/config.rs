//! Configuration module
//!
//! All settings come from the process environment (optionally seeded from a `.env`
//! file). Every variable is optional; absence falls back to the defaults below.

use std::env;

use crate::constants::{
    DEFAULT_BUCKET, DEFAULT_EMAIL_SENDER, DEFAULT_REGION, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_WATERMARK_DARK_KEY, DEFAULT_WATERMARK_LIGHT_KEY,
};
use crate::models::{ResizeFit, WatermarkVariant};
use crate::storage_types::StorageBackend;

// Common constants
const SERVER_PORT: u16 = 3000;
const MAX_BODY_SIZE_MB: usize = 10;
const PRESIGN_EXPIRY_SECS: u64 = 15 * 60;
const SMTP_PORT: u16 = 587;

/// Server-level settings
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub environment: String,
    pub request_timeout_secs: u64,
    pub max_body_size_bytes: usize,
    pub log_format: String,
}

/// Branding pipeline settings
#[derive(Clone, Debug)]
pub struct BrandConfig {
    pub base: BaseConfig,
    // Storage configuration
    pub storage_backend: StorageBackend,
    pub bucket: String,
    pub region: String,
    pub s3_endpoint: Option<String>, // Custom endpoint for S3-compatible providers (MinIO, LocalStack, etc.)
    pub local_storage_path: Option<String>,
    pub local_storage_base_url: Option<String>,
    pub presign_expiry_secs: u64,
    // Image processing
    pub resize_fit: ResizeFit,
    pub watermark_light_key: String,
    pub watermark_dark_key: String,
    // Email notifications
    pub email_sender: String,
    pub smtp_host: Option<String>,
    pub smtp_port: u16,
    pub smtp_user: Option<String>,
    pub smtp_password: Option<String>,
    pub smtp_tls: bool,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            base: BaseConfig {
                server_port: SERVER_PORT,
                environment: "development".to_string(),
                request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
                max_body_size_bytes: MAX_BODY_SIZE_MB * 1024 * 1024,
                log_format: "text".to_string(),
            },
            storage_backend: StorageBackend::S3,
            bucket: DEFAULT_BUCKET.to_string(),
            region: DEFAULT_REGION.to_string(),
            s3_endpoint: None,
            local_storage_path: None,
            local_storage_base_url: None,
            presign_expiry_secs: PRESIGN_EXPIRY_SECS,
            resize_fit: ResizeFit::Inside,
            watermark_light_key: DEFAULT_WATERMARK_LIGHT_KEY.to_string(),
            watermark_dark_key: DEFAULT_WATERMARK_DARK_KEY.to_string(),
            email_sender: DEFAULT_EMAIL_SENDER.to_string(),
            smtp_host: None,
            smtp_port: SMTP_PORT,
            smtp_user: None,
            smtp_password: None,
            smtp_tls: true,
        }
    }
}

impl BrandConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_source(|name| env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_source<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        // Empty values count as unset
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let environment = var("ENVIRONMENT")
            .or_else(|| var("APP_ENV"))
            .unwrap_or(defaults.base.environment);

        let server_port = match var("SERVER_PORT") {
            Some(v) => v
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("Invalid SERVER_PORT '{}': {}", v, e))?,
            None => defaults.base.server_port,
        };

        let request_timeout_secs = var("REQUEST_TIMEOUT_SECS")
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(defaults.base.request_timeout_secs)
            .max(1);

        let max_body_size_bytes = var("MAX_BODY_SIZE_MB")
            .and_then(|v| v.parse::<usize>().ok())
            .map(|mb| mb * 1024 * 1024)
            .unwrap_or(defaults.base.max_body_size_bytes);

        let log_format = var("LOG_FORMAT")
            .map(|v| v.to_lowercase())
            .unwrap_or(defaults.base.log_format);

        let storage_backend = match var("STORAGE_BACKEND") {
            Some(v) => v.parse::<StorageBackend>()?,
            None => defaults.storage_backend,
        };

        let resize_fit = match var("RESIZE_FIT") {
            Some(v) => v.parse::<ResizeFit>()?,
            None => defaults.resize_fit,
        };

        let region = var("EMAIL_REGION")
            .or_else(|| var("AWS_REGION"))
            .unwrap_or(defaults.region);

        let smtp_tls = var("SMTP_TLS")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(defaults.smtp_tls);

        Ok(Self {
            base: BaseConfig {
                server_port,
                environment,
                request_timeout_secs,
                max_body_size_bytes,
                log_format,
            },
            storage_backend,
            bucket: var("BRAND_IMAGE_BUCKET").unwrap_or(defaults.bucket),
            region,
            s3_endpoint: var("S3_ENDPOINT"),
            local_storage_path: var("LOCAL_STORAGE_PATH"),
            local_storage_base_url: var("LOCAL_STORAGE_BASE_URL"),
            presign_expiry_secs: var("PRESIGN_EXPIRY_SECS")
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(defaults.presign_expiry_secs),
            resize_fit,
            watermark_light_key: var("WATERMARK_LIGHT_KEY")
                .unwrap_or(defaults.watermark_light_key),
            watermark_dark_key: var("WATERMARK_DARK_KEY").unwrap_or(defaults.watermark_dark_key),
            email_sender: var("EMAIL_SENDER").unwrap_or(defaults.email_sender),
            smtp_host: var("SMTP_HOST"),
            smtp_port: var("SMTP_PORT")
                .and_then(|v| v.parse::<u16>().ok())
                .unwrap_or(defaults.smtp_port),
            smtp_user: var("SMTP_USER"),
            smtp_password: var("SMTP_PASSWORD"),
            smtp_tls,
        })
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.bucket.trim().is_empty() {
            return Err(anyhow::anyhow!("Bucket name cannot be empty"));
        }
        if self.watermark_light_key == self.watermark_dark_key {
            return Err(anyhow::anyhow!(
                "WATERMARK_LIGHT_KEY and WATERMARK_DARK_KEY must name different overlays"
            ));
        }
        if self.storage_backend == StorageBackend::Local
            && (self.local_storage_path.is_none() || self.local_storage_base_url.is_none())
        {
            return Err(anyhow::anyhow!(
                "LOCAL_STORAGE_PATH and LOCAL_STORAGE_BASE_URL must be set for the local storage backend"
            ));
        }
        Ok(())
    }
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config(pub Box<BrandConfig>);

impl Default for Config {
    fn default() -> Self {
        Config(Box::default())
    }
}

impl From<BrandConfig> for Config {
    fn from(config: BrandConfig) -> Self {
        Config(Box::new(config))
    }
}

impl Config {
    fn as_brand(&self) -> &BrandConfig {
        &self.0
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let environment = self.as_brand().base.environment.to_lowercase();
        environment == "production" || environment == "prod"
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        let config = BrandConfig::from_env()?;
        Ok(Config(Box::new(config)))
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.as_brand().validate()
    }

    // Convenience getters for common fields
    pub fn server_port(&self) -> u16 {
        self.as_brand().base.server_port
    }

    pub fn environment(&self) -> &str {
        &self.as_brand().base.environment
    }

    pub fn request_timeout_secs(&self) -> u64 {
        self.as_brand().base.request_timeout_secs
    }

    pub fn max_body_size_bytes(&self) -> usize {
        self.as_brand().base.max_body_size_bytes
    }

    pub fn log_format(&self) -> &str {
        &self.as_brand().base.log_format
    }

    pub fn storage_backend(&self) -> StorageBackend {
        self.as_brand().storage_backend
    }

    pub fn bucket(&self) -> &str {
        &self.as_brand().bucket
    }

    pub fn region(&self) -> &str {
        &self.as_brand().region
    }

    pub fn s3_endpoint(&self) -> Option<&str> {
        self.as_brand().s3_endpoint.as_deref()
    }

    pub fn local_storage_path(&self) -> Option<&str> {
        self.as_brand().local_storage_path.as_deref()
    }

    pub fn local_storage_base_url(&self) -> Option<&str> {
        self.as_brand().local_storage_base_url.as_deref()
    }

    pub fn presign_expiry_secs(&self) -> u64 {
        self.as_brand().presign_expiry_secs
    }

    pub fn resize_fit(&self) -> ResizeFit {
        self.as_brand().resize_fit
    }

    /// Storage key of the overlay for the given variant.
    pub fn watermark_key(&self, variant: WatermarkVariant) -> &str {
        match variant {
            WatermarkVariant::LightBackground => &self.as_brand().watermark_light_key,
            WatermarkVariant::DarkBackground => &self.as_brand().watermark_dark_key,
        }
    }

    pub fn email_sender(&self) -> &str {
        &self.as_brand().email_sender
    }

    pub fn smtp_host(&self) -> Option<&str> {
        self.as_brand().smtp_host.as_deref()
    }

    pub fn smtp_port(&self) -> u16 {
        self.as_brand().smtp_port
    }

    pub fn smtp_user(&self) -> Option<&str> {
        self.as_brand().smtp_user.as_deref()
    }

    pub fn smtp_password(&self) -> Option<&str> {
        self.as_brand().smtp_password.as_deref()
    }

    pub fn smtp_tls(&self) -> bool {
        self.as_brand().smtp_tls
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<BrandConfig, anyhow::Error> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        BrandConfig::from_source(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bucket, "p6-dne");
        assert_eq!(config.email_sender, "your-sender-email@example.com");
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.resize_fit, ResizeFit::Inside);
        assert_eq!(config.storage_backend, StorageBackend::S3);
        assert_eq!(config.watermark_light_key, "processed_LDARBranding-white.png");
        assert_eq!(config.watermark_dark_key, "processed_LDARBranding-black.png");
        assert_eq!(config.base.request_timeout_secs, 840);
        assert!(config.smtp_host.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("BRAND_IMAGE_BUCKET", "brand-bucket"),
            ("EMAIL_SENDER", "brander@example.com"),
            ("EMAIL_REGION", "eu-west-1"),
            ("RESIZE_FIT", "fill"),
            ("SERVER_PORT", "8080"),
            ("SMTP_TLS", "false"),
        ])
        .unwrap();
        assert_eq!(config.bucket, "brand-bucket");
        assert_eq!(config.email_sender, "brander@example.com");
        assert_eq!(config.region, "eu-west-1");
        assert_eq!(config.resize_fit, ResizeFit::Fill);
        assert_eq!(config.base.server_port, 8080);
        assert!(!config.smtp_tls);
    }

    #[test]
    fn test_region_falls_back_to_aws_region() {
        let config = config_from(&[("AWS_REGION", "ap-south-1")]).unwrap();
        assert_eq!(config.region, "ap-south-1");
    }

    #[test]
    fn test_empty_value_counts_as_unset() {
        let config = config_from(&[("BRAND_IMAGE_BUCKET", "  ")]).unwrap();
        assert_eq!(config.bucket, "p6-dne");
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(config_from(&[("RESIZE_FIT", "cover")]).is_err());
        assert!(config_from(&[("STORAGE_BACKEND", "nfs")]).is_err());
        assert!(config_from(&[("SERVER_PORT", "http")]).is_err());
    }

    #[test]
    fn test_validate_local_backend_requires_paths() {
        let config = config_from(&[("STORAGE_BACKEND", "local")]).unwrap();
        assert!(config.validate().is_err());

        let config = config_from(&[
            ("STORAGE_BACKEND", "local"),
            ("LOCAL_STORAGE_PATH", "/tmp/brander"),
            ("LOCAL_STORAGE_BASE_URL", "http://localhost:3000/media"),
        ])
        .unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_watermark_key_by_variant() {
        let config = Config::default();
        assert_eq!(
            config.watermark_key(WatermarkVariant::LightBackground),
            "processed_LDARBranding-white.png"
        );
        assert_eq!(
            config.watermark_key(WatermarkVariant::DarkBackground),
            "processed_LDARBranding-black.png"
        );
    }

    #[test]
    fn test_is_production() {
        let mut config = BrandConfig::default();
        assert!(!Config::from(config.clone()).is_production());
        config.base.environment = "Prod".to_string();
        assert!(Config::from(config).is_production());
    }
}
