//! Configuration module
//!
//! `IngestConfig` carries every identifier the handler needs: the watched source
//! container, the destination container, the metadata table and the resize settings.
//! It is built once per process and passed explicitly to the handler.

use std::env;

use crate::constants::{
    DEFAULT_DEST_BUCKET, DEFAULT_DEST_KEY_PREFIX, DEFAULT_IMAGE_QUALITY, DEFAULT_MAX_DIMENSION,
    DEFAULT_METADATA_TABLE, DEFAULT_SOURCE_BUCKET,
};
use crate::storage_types::{MetadataBackend, StorageBackend};

/// Handler configuration
#[derive(Clone, Debug)]
pub struct IngestConfig {
    /// Container whose notifications are processed; records naming any other container are skipped
    pub source_bucket: String,
    pub dest_bucket: String,
    pub metadata_table: String,
    pub dest_key_prefix: String,
    pub max_dimension: u32,
    pub image_quality: u8,
    pub storage_backend: StorageBackend,
    // Custom endpoint for S3-compatible providers (MinIO, LocalStack, etc.)
    pub s3_endpoint: Option<String>,
    pub local_storage_path: Option<String>,
    pub metadata_backend: MetadataBackend,
    pub database_url: Option<String>,
    pub environment: String,
}

impl IngestConfig {
    /// Load configuration from the process environment (and `.env`, if present).
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Unset variables fall back to the built-in defaults; set but malformed
    /// values are rejected.
    pub fn from_vars<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let max_dimension = match non_empty("MAX_DIMENSION") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|_| anyhow::anyhow!("MAX_DIMENSION must be a positive integer"))?,
            None => DEFAULT_MAX_DIMENSION,
        };

        let image_quality = match non_empty("IMAGE_QUALITY") {
            Some(raw) => raw
                .trim()
                .parse::<u8>()
                .map_err(|_| anyhow::anyhow!("IMAGE_QUALITY must be an integer between 1 and 100"))?,
            None => DEFAULT_IMAGE_QUALITY,
        };

        let storage_backend = match non_empty("STORAGE_BACKEND") {
            Some(raw) => raw.parse()?,
            None => StorageBackend::default(),
        };

        let metadata_backend = match non_empty("METADATA_BACKEND") {
            Some(raw) => raw.parse()?,
            None => MetadataBackend::default(),
        };

        Ok(IngestConfig {
            source_bucket: non_empty("SOURCE_BUCKET")
                .unwrap_or_else(|| DEFAULT_SOURCE_BUCKET.to_string()),
            dest_bucket: non_empty("DEST_BUCKET").unwrap_or_else(|| DEFAULT_DEST_BUCKET.to_string()),
            metadata_table: non_empty("METADATA_TABLE")
                .unwrap_or_else(|| DEFAULT_METADATA_TABLE.to_string()),
            // An explicitly empty prefix is allowed, so this one is not filtered.
            dest_key_prefix: lookup("DEST_KEY_PREFIX")
                .unwrap_or_else(|| DEFAULT_DEST_KEY_PREFIX.to_string()),
            max_dimension,
            image_quality,
            storage_backend,
            s3_endpoint: non_empty("S3_ENDPOINT"),
            local_storage_path: non_empty("LOCAL_STORAGE_PATH"),
            metadata_backend,
            database_url: non_empty("DATABASE_URL"),
            environment: non_empty("ENVIRONMENT")
                .or_else(|| non_empty("APP_ENV"))
                .unwrap_or_else(|| "development".to_string()),
        })
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.source_bucket.trim().is_empty() {
            return Err(anyhow::anyhow!("SOURCE_BUCKET cannot be empty"));
        }
        if self.dest_bucket.trim().is_empty() {
            return Err(anyhow::anyhow!("DEST_BUCKET cannot be empty"));
        }
        if self.source_bucket == self.dest_bucket {
            return Err(anyhow::anyhow!(
                "SOURCE_BUCKET and DEST_BUCKET must differ: writing resized images into the \
                 watched container would re-trigger the handler"
            ));
        }
        if self.max_dimension == 0 {
            return Err(anyhow::anyhow!("MAX_DIMENSION must be greater than 0"));
        }
        if !(1..=100).contains(&self.image_quality) {
            return Err(anyhow::anyhow!("IMAGE_QUALITY must be between 1 and 100"));
        }
        if self.storage_backend == StorageBackend::Local && self.local_storage_path.is_none() {
            return Err(anyhow::anyhow!(
                "LOCAL_STORAGE_PATH must be set when STORAGE_BACKEND=local"
            ));
        }
        if self.metadata_backend == MetadataBackend::Postgres && self.database_url.is_none() {
            return Err(anyhow::anyhow!(
                "DATABASE_URL must be set when METADATA_BACKEND=postgres"
            ));
        }
        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn is_development(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "development" || env == "dev" || env == "local"
    }
}
