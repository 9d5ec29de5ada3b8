//! Brander Services Layer
//!
//! This crate is the **business service layer**: the request orchestrator
//! (`BrandService`) and the collaborators it sequences after the image work,
//! namely packaging, notification rendering and email dispatch. It re-exports the
//! storage and processing API so the HTTP and CLI crates depend on a single facade.

pub mod brand;
pub mod email;
pub mod notification;
pub mod packager;

pub use brand::BrandService;
pub use email::{email_sender_from_config, DisabledEmailSender, EmailSender, SmtpEmailSender};
pub use notification::{render_error_html, render_results_html};
pub use packager::create_package;

pub use brander_processing::{extract, ImageTransformer, OverlayCache};
pub use brander_storage::{
    create_storage, generate_key, LocalStorage, S3Storage, Storage, StorageBackend, StorageError,
    StorageResult,
};
