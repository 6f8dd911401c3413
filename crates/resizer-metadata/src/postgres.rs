//! PostgreSQL metadata store: one INSERT into `image_metadata` per record.

use crate::traits::{MetadataError, MetadataResult, MetadataStore};
use crate::MetadataRecord;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

// A handler instance serves one invocation at a time
const MAX_CONNECTIONS: u32 = 2;
const CONNECTION_TIMEOUT_SECS: u64 = 10;

/// Metadata store backed by the `image_metadata` table.
#[derive(Clone)]
pub struct PostgresMetadataStore {
    pool: PgPool,
}

impl PostgresMetadataStore {
    /// Connect and apply pending migrations.
    pub async fn connect(database_url: &str) -> MetadataResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .acquire_timeout(Duration::from_secs(CONNECTION_TIMEOUT_SECS))
            .connect(database_url)
            .await?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| MetadataError::ConfigError(format!("migration failed: {}", e)))?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl MetadataStore for PostgresMetadataStore {
    #[tracing::instrument(skip(self, record), fields(db.table = "image_metadata", image_id = %record.image_id))]
    async fn put_record(&self, record: &MetadataRecord) -> MetadataResult<()> {
        let size_original = i64::try_from(record.size_original).map_err(|_| {
            MetadataError::WriteFailed(format!(
                "sizeOriginal {} does not fit in BIGINT",
                record.size_original
            ))
        })?;

        sqlx::query(
            r#"
            INSERT INTO image_metadata
                (image_id, source_bucket, source_key, dest_bucket, dest_key,
                 content_type, size_original, resized_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(record.image_id)
        .bind(&record.source_bucket)
        .bind(&record.source_key)
        .bind(&record.dest_bucket)
        .bind(&record.dest_key)
        .bind(&record.content_type)
        .bind(size_original)
        .bind(record.resized_at)
        .execute(&self.pool)
        .await?;

        tracing::info!(
            source_key = %record.source_key,
            dest_key = %record.dest_key,
            "Metadata record written"
        );

        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
