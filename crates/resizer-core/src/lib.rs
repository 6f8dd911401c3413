//! Resizer Core Library
//!
//! This crate provides the configuration, domain models and key derivation rules
//! shared by the storage, metadata, processing and handler crates.

pub mod config;
pub mod constants;
pub mod keys;
pub mod models;
pub mod storage_types;

// Re-export commonly used types
pub use config::IngestConfig;
pub use keys::{decode_event_key, derive_destination_key, object_basename};
pub use models::{ChangeNotification, FetchedObject, MetadataRecord, ObjectReference};
pub use storage_types::{MetadataBackend, StorageBackend};
