use anyhow::Context;
use aws_config::BehaviorVersion;
use lambda_runtime::{run, service_fn, Error};
use resizer_core::{IngestConfig, MetadataBackend, StorageBackend};
use resizer_lambda::{function_handler, telemetry, AppContext};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = IngestConfig::from_env().context("Failed to load configuration")?;
    telemetry::init_telemetry(config.is_development())?;

    let needs_aws = config.storage_backend == StorageBackend::S3
        || config.metadata_backend == MetadataBackend::DynamoDb;
    let sdk_config = if needs_aws {
        Some(aws_config::load_defaults(BehaviorVersion::latest()).await)
    } else {
        None
    };

    let ctx = AppContext::build(config, sdk_config.as_ref()).await?;

    run(service_fn(|event| function_handler(event, &ctx))).await
}
