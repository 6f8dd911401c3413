use resizer_metadata::MetadataError;
use resizer_processing::ProcessingError;
use resizer_storage::StorageError;
use thiserror::Error;

/// Failure of one ingest step. The first one aborts the whole notification.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Metadata error: {0}")]
    Metadata(#[from] MetadataError),

    #[error("Processing error: {0}")]
    Processing(#[from] ProcessingError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl IngestError {
    /// Whether a redelivery of the same notification could succeed.
    ///
    /// Only reported in logs; nothing here retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            IngestError::Storage(err) => err.is_transient(),
            IngestError::Metadata(err) => !matches!(err, MetadataError::ConfigError(_)),
            IngestError::Processing(_) | IngestError::Config(_) => false,
        }
    }

    /// Short label for log fields
    pub fn kind(&self) -> &'static str {
        match self {
            IngestError::Storage(_) => "storage",
            IngestError::Metadata(_) => "metadata",
            IngestError::Processing(ProcessingError::Encode { .. }) => "encode",
            IngestError::Processing(_) => "decode",
            IngestError::Config(_) => "config",
        }
    }
}

pub type IngestResult<T> = Result<T, IngestError>;
