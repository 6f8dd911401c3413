//! Resizer Metadata Library
//!
//! This crate provides the metadata store abstraction: one flat row per resized image,
//! keyed by a generated id and never updated. Implementations exist for DynamoDB and
//! (behind the `metadata-postgres` feature) PostgreSQL.

#[cfg(feature = "metadata-dynamodb")]
pub mod dynamodb;
pub mod factory;
#[cfg(feature = "metadata-postgres")]
pub mod postgres;
pub mod traits;

// Re-export commonly used types
#[cfg(feature = "metadata-dynamodb")]
pub use dynamodb::DynamoDbMetadataStore;
pub use factory::create_metadata_store;
#[cfg(feature = "metadata-postgres")]
pub use postgres::PostgresMetadataStore;
pub use resizer_core::{MetadataBackend, MetadataRecord};
pub use traits::{MetadataError, MetadataResult, MetadataStore};
