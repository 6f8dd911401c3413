use std::collections::HashMap;

use crate::traits::{MetadataError, MetadataResult, MetadataStore};
use crate::MetadataRecord;
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

/// Metadata store backed by a DynamoDB table whose partition key is `imageId`.
#[derive(Debug, Clone)]
pub struct DynamoDbMetadataStore {
    client: Client,
    table: String,
}

impl DynamoDbMetadataStore {
    pub fn new(sdk_config: &SdkConfig, table: impl Into<String>) -> Self {
        Self {
            client: Client::new(sdk_config),
            table: table.into(),
        }
    }
}

/// Map a record to its DynamoDB item. `sizeOriginal` is numeric, everything else a string.
pub(crate) fn record_to_item(record: &MetadataRecord) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (
            "imageId".to_string(),
            AttributeValue::S(record.image_id.to_string()),
        ),
        (
            "sourceBucket".to_string(),
            AttributeValue::S(record.source_bucket.clone()),
        ),
        (
            "sourceKey".to_string(),
            AttributeValue::S(record.source_key.clone()),
        ),
        (
            "destBucket".to_string(),
            AttributeValue::S(record.dest_bucket.clone()),
        ),
        (
            "destKey".to_string(),
            AttributeValue::S(record.dest_key.clone()),
        ),
        (
            "contentType".to_string(),
            AttributeValue::S(record.content_type.clone()),
        ),
        (
            "sizeOriginal".to_string(),
            AttributeValue::N(record.size_original.to_string()),
        ),
        (
            "resizedAt".to_string(),
            AttributeValue::S(record.resized_at_iso()),
        ),
    ])
}

#[async_trait]
impl MetadataStore for DynamoDbMetadataStore {
    #[tracing::instrument(skip(self, record), fields(db.table = %self.table, image_id = %record.image_id))]
    async fn put_record(&self, record: &MetadataRecord) -> MetadataResult<()> {
        let start = std::time::Instant::now();

        self.client
            .put_item()
            .table_name(&self.table)
            .set_item(Some(record_to_item(record)))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %DisplayErrorContext(&e),
                    table = %self.table,
                    source_key = %record.source_key,
                    "failed to insert image metadata into DynamoDB"
                );
                MetadataError::WriteFailed(DisplayErrorContext(&e).to_string())
            })?;

        tracing::info!(
            table = %self.table,
            source_key = %record.source_key,
            dest_key = %record.dest_key,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Metadata record written"
        );

        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "dynamodb"
    }
}
