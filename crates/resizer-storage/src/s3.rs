use crate::traits::{Storage, StorageError, StorageResult};
use crate::{FetchedObject, StorageBackend};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use bytes::Bytes;

/// S3 storage implementation
///
/// Keys are sent to S3 unchanged. `..` segments and leading `/` are ordinary key
/// characters there.
#[derive(Clone, Debug)]
pub struct S3Storage {
    client: Client,
}

impl S3Storage {
    /// Create a new S3Storage from the shared AWS configuration
    ///
    /// # Arguments
    /// * `sdk_config` - Loaded AWS configuration (region, credentials)
    /// * `endpoint_url` - Optional custom endpoint URL for S3-compatible providers
    ///   (e.g., "http://localhost:9000" for MinIO, "http://localhost:4566" for LocalStack)
    pub fn new(sdk_config: &SdkConfig, endpoint_url: Option<String>) -> Self {
        let client = match endpoint_url {
            Some(endpoint) => {
                // S3-compatible providers generally only support path-style addressing
                let conf = aws_sdk_s3::config::Builder::from(sdk_config)
                    .endpoint_url(endpoint)
                    .force_path_style(true)
                    .build();
                Client::from_conf(conf)
            }
            None => Client::new(sdk_config),
        };

        S3Storage { client }
    }
}

/// S3 rejects empty keys; anything else is a valid object name.
fn require_key(key: &str) -> StorageResult<()> {
    if key.is_empty() {
        return Err(StorageError::InvalidKey("Storage key is empty".to_string()));
    }
    Ok(())
}

/// Length S3 declared for the object, or the received byte count when it declared none.
fn object_length(declared: Option<i64>, received: usize) -> u64 {
    declared
        .and_then(|len| u64::try_from(len).ok())
        .unwrap_or(received as u64)
}

#[async_trait]
impl Storage for S3Storage {
    #[tracing::instrument(skip(self), fields(storage.backend = "s3"))]
    async fn get_object(&self, bucket: &str, key: &str) -> StorageResult<FetchedObject> {
        require_key(key)?;
        let start = std::time::Instant::now();

        let result = self.client.get_object().bucket(bucket).key(key).send().await;

        let output = result.map_err(|e| {
            if e.as_service_error()
                .map(|se| se.is_no_such_key())
                .unwrap_or(false)
            {
                return StorageError::NotFound {
                    bucket: bucket.to_string(),
                    key: key.to_string(),
                };
            }
            tracing::error!(
                error = %DisplayErrorContext(&e),
                bucket = %bucket,
                key = %key,
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "S3 download failed"
            );
            StorageError::DownloadFailed(DisplayErrorContext(&e).to_string())
        })?;

        let content_type = output.content_type().map(String::from);
        let declared_length = output.content_length();

        let data = output
            .body
            .collect()
            .await
            .map_err(|e| StorageError::DownloadFailed(e.to_string()))?
            .into_bytes();

        let content_length = object_length(declared_length, data.len());

        tracing::info!(
            bucket = %bucket,
            key = %key,
            size_bytes = data.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 download successful"
        );

        Ok(FetchedObject {
            bucket: bucket.to_string(),
            key: key.to_string(),
            data,
            content_type,
            content_length,
        })
    }

    #[tracing::instrument(skip(self, data), fields(storage.backend = "s3", size_bytes = data.len()))]
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        data: Bytes,
        content_type: &str,
    ) -> StorageResult<()> {
        require_key(key)?;
        let size = data.len();
        let start = std::time::Instant::now();

        let result = self
            .client
            .put_object()
            .bucket(bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(data))
            .send()
            .await;

        result.map_err(|e| {
            tracing::error!(
                error = %DisplayErrorContext(&e),
                bucket = %bucket,
                key = %key,
                size_bytes = size,
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "S3 upload failed"
            );
            StorageError::UploadFailed(DisplayErrorContext(&e).to_string())
        })?;

        tracing::info!(
            bucket = %bucket,
            key = %key,
            size_bytes = size,
            content_type = %content_type,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 upload successful"
        );

        Ok(())
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }
}
