use std::sync::Arc;

use crate::traits::{MetadataError, MetadataResult, MetadataStore};
use crate::MetadataBackend;
use resizer_core::IngestConfig;

/// Create the metadata store selected by configuration
///
/// `sdk_config` is required for DynamoDB and ignored by the Postgres backend.
pub async fn create_metadata_store(
    config: &IngestConfig,
    sdk_config: Option<&aws_config::SdkConfig>,
) -> MetadataResult<Arc<dyn MetadataStore>> {
    match config.metadata_backend {
        MetadataBackend::DynamoDb => create_dynamodb(config, sdk_config),
        MetadataBackend::Postgres => create_postgres(config).await,
    }
}

#[cfg(feature = "metadata-dynamodb")]
fn create_dynamodb(
    config: &IngestConfig,
    sdk_config: Option<&aws_config::SdkConfig>,
) -> MetadataResult<Arc<dyn MetadataStore>> {
    let sdk_config = sdk_config
        .ok_or_else(|| MetadataError::ConfigError("AWS configuration not loaded".to_string()))?;
    tracing::info!(table = %config.metadata_table, "Initializing DynamoDB metadata store");
    let store = crate::DynamoDbMetadataStore::new(sdk_config, &config.metadata_table);
    Ok(Arc::new(store))
}

#[cfg(not(feature = "metadata-dynamodb"))]
fn create_dynamodb(
    _config: &IngestConfig,
    _sdk_config: Option<&aws_config::SdkConfig>,
) -> MetadataResult<Arc<dyn MetadataStore>> {
    Err(MetadataError::ConfigError(
        "DynamoDB metadata backend not available (metadata-dynamodb feature not enabled)"
            .to_string(),
    ))
}

#[cfg(feature = "metadata-postgres")]
async fn create_postgres(config: &IngestConfig) -> MetadataResult<Arc<dyn MetadataStore>> {
    let url = config
        .database_url
        .as_deref()
        .ok_or_else(|| MetadataError::ConfigError("DATABASE_URL not configured".to_string()))?;
    tracing::info!("Initializing PostgreSQL metadata store");
    let store = crate::PostgresMetadataStore::connect(url).await?;
    Ok(Arc::new(store))
}

#[cfg(not(feature = "metadata-postgres"))]
async fn create_postgres(_config: &IngestConfig) -> MetadataResult<Arc<dyn MetadataStore>> {
    Err(MetadataError::ConfigError(
        "Postgres metadata backend not available (metadata-postgres feature not enabled)"
            .to_string(),
    ))
}
