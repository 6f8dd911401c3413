use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{Error, LambdaEvent};
use resizer_core::{decode_event_key, ChangeNotification, ObjectReference};
use serde::Serialize;
use std::time::Instant;

use crate::context::AppContext;
use crate::service::IngestService;

/// Fixed invocation response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandlerResponse {
    pub status: &'static str,
}

impl HandlerResponse {
    pub fn done() -> Self {
        Self { status: "done" }
    }
}

/// Turn an S3 event into the ordered list of objects it names.
///
/// Missing bucket names or keys become empty strings; keys are form-decoded.
pub fn notification_from_event(event: &S3Event) -> ChangeNotification {
    event
        .records
        .iter()
        .map(|record| {
            let bucket = record.s3.bucket.name.clone().unwrap_or_default();
            let key = record
                .s3
                .object
                .key
                .as_deref()
                .map(decode_event_key)
                .unwrap_or_default();
            ObjectReference::new(bucket, key)
        })
        .collect()
}

/// Processes the s3 event
#[tracing::instrument(skip(event, ctx), fields(request_id = %event.context.request_id))]
pub async fn function_handler(
    event: LambdaEvent<S3Event>,
    ctx: &AppContext,
) -> Result<HandlerResponse, Error> {
    let start = Instant::now();
    let notification = notification_from_event(&event.payload);

    tracing::info!(record_count = notification.len(), "Processing s3 records");

    let summary = IngestService::new(ctx)
        .process_notification(&notification)
        .await?;

    tracing::info!(
        records_seen = summary.records_seen,
        records_skipped = summary.records_skipped,
        artifacts_written = summary.artifacts_written,
        duration_ms = start.elapsed().as_millis() as u64,
        "Processing complete"
    );

    Ok(HandlerResponse::done())
}
