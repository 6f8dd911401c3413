#[cfg(feature = "storage-local")]
use crate::LocalStorage;
#[cfg(feature = "storage-s3")]
use crate::S3Storage;
use crate::{Storage, StorageBackend, StorageError, StorageResult};
use resizer_core::IngestConfig;
use std::sync::Arc;

/// Create a storage backend based on configuration
///
/// `sdk_config` is required for the S3 backend and ignored otherwise.
pub async fn create_storage(
    config: &IngestConfig,
    sdk_config: Option<&aws_config::SdkConfig>,
) -> StorageResult<Arc<dyn Storage>> {
    match config.storage_backend {
        StorageBackend::S3 => create_s3(config, sdk_config),
        StorageBackend::Local => create_local(config).await,
    }
}

#[cfg(feature = "storage-s3")]
fn create_s3(
    config: &IngestConfig,
    sdk_config: Option<&aws_config::SdkConfig>,
) -> StorageResult<Arc<dyn Storage>> {
    let sdk_config = sdk_config
        .ok_or_else(|| StorageError::ConfigError("AWS configuration not loaded".to_string()))?;
    let storage = S3Storage::new(sdk_config, config.s3_endpoint.clone());
    tracing::info!(endpoint = ?config.s3_endpoint, "Using S3 storage backend");
    Ok(Arc::new(storage))
}

#[cfg(not(feature = "storage-s3"))]
fn create_s3(
    _config: &IngestConfig,
    _sdk_config: Option<&aws_config::SdkConfig>,
) -> StorageResult<Arc<dyn Storage>> {
    Err(StorageError::ConfigError(
        "S3 storage backend not available (storage-s3 feature not enabled)".to_string(),
    ))
}

#[cfg(feature = "storage-local")]
async fn create_local(config: &IngestConfig) -> StorageResult<Arc<dyn Storage>> {
    let base_path = config.local_storage_path.clone().ok_or_else(|| {
        StorageError::ConfigError("LOCAL_STORAGE_PATH not configured".to_string())
    })?;

    let storage = LocalStorage::new(base_path).await?;
    tracing::info!(base_path = %storage.base_path().display(), "Using local storage backend");
    Ok(Arc::new(storage))
}

#[cfg(not(feature = "storage-local"))]
async fn create_local(_config: &IngestConfig) -> StorageResult<Arc<dyn Storage>> {
    Err(StorageError::ConfigError(
        "Local storage backend not available (storage-local feature not enabled)".to_string(),
    ))
}
