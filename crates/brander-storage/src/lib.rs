//! Brander Storage Library
//!
//! This crate is the Asset Store Gateway: the `Storage` trait and its S3 and local
//! filesystem implementations.
//!
//! # Storage key format
//!
//! Every artifact the pipeline writes is stored under
//! `<date>_<time>_<fraction>_<role>_<filename>` (see [`keys::generate_key`]).
//! The key is flat: the filename may carry archive subdirectory segments, which
//! become path segments in the bucket.

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use brander_core::StorageBackend;
pub use factory::create_storage;
pub use keys::generate_key;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
