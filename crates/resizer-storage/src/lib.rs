//! Resizer Storage Library
//!
//! This crate provides the object storage abstraction used by the ingest handler.
//! It includes the Storage trait and implementations for S3 and local filesystem.
//!
//! # Addressing
//!
//! Every operation names a container (bucket) and a key within it. S3 keys are passed
//! through as-is; the local backend rejects keys containing `..` or a leading `/`.

pub mod factory;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
pub use resizer_core::{FetchedObject, StorageBackend};
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
