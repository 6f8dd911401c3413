use std::sync::Arc;

use resizer_core::IngestConfig;
use resizer_metadata::{create_metadata_store, MetadataStore};
use resizer_storage::{create_storage, Storage};

use crate::error::{IngestError, IngestResult};

/// Clients and settings built once per process and shared by every invocation
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<IngestConfig>,
    pub storage: Arc<dyn Storage>,
    pub metadata: Arc<dyn MetadataStore>,
}

impl AppContext {
    pub fn new(
        config: IngestConfig,
        storage: Arc<dyn Storage>,
        metadata: Arc<dyn MetadataStore>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            storage,
            metadata,
        }
    }

    /// Build the configured storage and metadata backends
    pub async fn build(
        config: IngestConfig,
        sdk_config: Option<&aws_config::SdkConfig>,
    ) -> IngestResult<Self> {
        config
            .validate()
            .map_err(|e| IngestError::Config(e.to_string()))?;

        let storage = create_storage(&config, sdk_config).await?;
        let metadata = create_metadata_store(&config, sdk_config).await?;

        tracing::info!(
            source_bucket = %config.source_bucket,
            dest_bucket = %config.dest_bucket,
            storage_backend = %storage.backend_type(),
            metadata_backend = metadata.backend_name(),
            max_dimension = config.max_dimension,
            quality = config.image_quality,
            "Ingest context ready"
        );

        Ok(Self::new(config, storage, metadata))
    }
}
