pub mod ingest;

pub use ingest::{IngestService, IngestSummary, RecordOutcome};
