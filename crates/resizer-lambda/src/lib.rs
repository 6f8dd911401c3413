//! Resizer Lambda
//!
//! Lambda handler for S3 object-created notifications: every image landing in the
//! source bucket is shrunk to fit the configured bounding box, written to the
//! destination bucket and recorded in the metadata store.

pub mod context;
pub mod error;
pub mod handler;
pub mod service;
pub mod telemetry;

pub use context::AppContext;
pub use error::{IngestError, IngestResult};
pub use handler::{function_handler, notification_from_event, HandlerResponse};
pub use service::{IngestService, IngestSummary, RecordOutcome};
