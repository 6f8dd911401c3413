use std::sync::Arc;
use std::time::Instant;

use resizer_core::{
    derive_destination_key, ChangeNotification, IngestConfig, MetadataRecord, ObjectReference,
};
use resizer_metadata::MetadataStore;
use resizer_processing::{ImageTransformer, ShrinkOptions};
use resizer_storage::Storage;

use crate::context::AppContext;
use crate::error::IngestResult;

/// Counters for one notification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub records_seen: usize,
    pub records_skipped: usize,
    pub artifacts_written: usize,
}

/// What happened to a single record
#[derive(Debug, Clone, PartialEq)]
pub enum RecordOutcome {
    /// Container did not match the configured source
    Skipped,
    /// Artifact uploaded and metadata row written
    Written(MetadataRecord),
}

/// Fetch, shrink, upload and record each object of a notification, in order
#[derive(Clone)]
pub struct IngestService {
    config: Arc<IngestConfig>,
    storage: Arc<dyn Storage>,
    metadata: Arc<dyn MetadataStore>,
}

impl IngestService {
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            config: Arc::clone(&ctx.config),
            storage: Arc::clone(&ctx.storage),
            metadata: Arc::clone(&ctx.metadata),
        }
    }

    /// Process every record of `notification`.
    ///
    /// Stops at the first failing record. Side effects of the records before it are kept.
    pub async fn process_notification(
        &self,
        notification: &ChangeNotification,
    ) -> IngestResult<IngestSummary> {
        let mut summary = IngestSummary::default();

        for record in &notification.records {
            summary.records_seen += 1;

            match self.process_record(record).await {
                Ok(RecordOutcome::Skipped) => summary.records_skipped += 1,
                Ok(RecordOutcome::Written(_)) => summary.artifacts_written += 1,
                Err(err) => {
                    tracing::error!(
                        error = %err,
                        error_kind = err.kind(),
                        retryable = err.is_retryable(),
                        bucket = %record.bucket,
                        key = %record.key,
                        "Failed to process record"
                    );
                    return Err(err);
                }
            }
        }

        Ok(summary)
    }

    /// Process a single record
    pub async fn process_record(&self, record: &ObjectReference) -> IngestResult<RecordOutcome> {
        if record.bucket != self.config.source_bucket {
            tracing::debug!(
                bucket = %record.bucket,
                key = %record.key,
                "Skipping record from non-source bucket"
            );
            return Ok(RecordOutcome::Skipped);
        }

        let start = Instant::now();

        let fetched = self.storage.get_object(&record.bucket, &record.key).await?;

        let options = ShrinkOptions {
            max_dimension: self.config.max_dimension,
            quality: self.config.image_quality,
        };
        let transformed = ImageTransformer::shrink(&fetched.data, &options)?;

        let content_type = fetched
            .content_type
            .filter(|ct| !ct.is_empty())
            .unwrap_or_else(|| transformed.mime_type().to_string());

        let dest_key = derive_destination_key(&self.config.dest_key_prefix, &record.key);
        let resized_size = transformed.data.len();

        self.storage
            .put_object(
                &self.config.dest_bucket,
                &dest_key,
                transformed.data,
                &content_type,
            )
            .await?;

        let metadata = MetadataRecord::new(
            record.bucket.as_str(),
            record.key.as_str(),
            self.config.dest_bucket.as_str(),
            dest_key.as_str(),
            content_type,
            fetched.content_length,
        );
        self.metadata.put_record(&metadata).await?;

        tracing::info!(
            image_id = %metadata.image_id,
            bucket = %record.bucket,
            key = %record.key,
            dest_key = %dest_key,
            size_bytes = fetched.content_length,
            resized_bytes = resized_size,
            width = transformed.dimensions.0,
            height = transformed.dimensions.1,
            duration_ms = start.elapsed().as_millis() as u64,
            "Image resized"
        );

        Ok(RecordOutcome::Written(metadata))
    }
}
