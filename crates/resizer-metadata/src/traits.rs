use crate::MetadataRecord;
use async_trait::async_trait;
use thiserror::Error;

/// Metadata store errors
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Metadata write failed: {0}")]
    WriteFailed(String),

    #[cfg(feature = "metadata-postgres")]
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for metadata store operations
pub type MetadataResult<T> = Result<T, MetadataError>;

/// Append-only store of metadata records
///
/// Records are inserted once and never read back or updated by the handler. There
/// is no uniqueness check beyond the generated id, so a redelivered notification
/// produces a second record for the same source key.
#[async_trait]
pub trait MetadataStore: Send + Sync {
    /// Insert one record.
    async fn put_record(&self, record: &MetadataRecord) -> MetadataResult<()>;

    /// Short backend name for logs
    fn backend_name(&self) -> &'static str;
}
