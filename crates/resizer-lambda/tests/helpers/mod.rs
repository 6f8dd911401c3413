//! In-memory storage and metadata backends for driving the handler in tests

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::io::Cursor;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use resizer_core::{FetchedObject, IngestConfig, MetadataRecord};
use resizer_lambda::AppContext;
use resizer_metadata::{MetadataError, MetadataResult, MetadataStore};
use resizer_storage::{Storage, StorageBackend, StorageError, StorageResult};

pub const SOURCE_BUCKET: &str = "source-image-azoz";
pub const DEST_BUCKET: &str = "resized-image-azoz";

#[derive(Debug, Clone)]
pub struct StoredObject {
    pub data: Bytes,
    pub content_type: Option<String>,
    /// Length reported by the store; the payload length when unset
    pub declared_length: Option<u64>,
}

/// Object store kept in a map, with call logs and injectable failures
#[derive(Default)]
pub struct MemoryStorage {
    objects: Mutex<HashMap<(String, String), StoredObject>>,
    gets: Mutex<Vec<(String, String)>>,
    puts: Mutex<Vec<(String, String, String)>>,
    failing_gets: Mutex<HashSet<String>>,
}

impl MemoryStorage {
    pub fn insert(&self, bucket: &str, key: &str, data: Vec<u8>, content_type: Option<&str>) {
        self.store(bucket, key, data, content_type, None);
    }

    /// Store an object whose reported length differs from its payload
    pub fn insert_with_length(
        &self,
        bucket: &str,
        key: &str,
        data: Vec<u8>,
        content_type: Option<&str>,
        declared_length: u64,
    ) {
        self.store(bucket, key, data, content_type, Some(declared_length));
    }

    fn store(
        &self,
        bucket: &str,
        key: &str,
        data: Vec<u8>,
        content_type: Option<&str>,
        declared_length: Option<u64>,
    ) {
        self.objects.lock().unwrap().insert(
            (bucket.to_string(), key.to_string()),
            StoredObject {
                data: Bytes::from(data),
                content_type: content_type.map(str::to_string),
                declared_length,
            },
        );
    }

    /// Make every fetch of `key` fail with a transport error
    pub fn fail_get(&self, key: &str) {
        self.failing_gets.lock().unwrap().insert(key.to_string());
    }

    pub fn object(&self, bucket: &str, key: &str) -> Option<StoredObject> {
        self.objects
            .lock()
            .unwrap()
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
    }

    pub fn get_calls(&self) -> Vec<(String, String)> {
        self.gets.lock().unwrap().clone()
    }

    /// (bucket, key, content type) per upload
    pub fn put_calls(&self) -> Vec<(String, String, String)> {
        self.puts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get_object(&self, bucket: &str, key: &str) -> StorageResult<FetchedObject> {
        self.gets
            .lock()
            .unwrap()
            .push((bucket.to_string(), key.to_string()));

        if self.failing_gets.lock().unwrap().contains(key) {
            return Err(StorageError::DownloadFailed(format!(
                "injected failure for {}/{}",
                bucket, key
            )));
        }

        let stored = self.object(bucket, key).ok_or_else(|| StorageError::NotFound {
            bucket: bucket.to_string(),
            key: key.to_string(),
        })?;

        Ok(FetchedObject {
            bucket: bucket.to_string(),
            key: key.to_string(),
            content_length: stored
                .declared_length
                .unwrap_or(stored.data.len() as u64),
            data: stored.data,
            content_type: stored.content_type,
        })
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        data: Bytes,
        content_type: &str,
    ) -> StorageResult<()> {
        self.puts.lock().unwrap().push((
            bucket.to_string(),
            key.to_string(),
            content_type.to_string(),
        ));
        self.objects.lock().unwrap().insert(
            (bucket.to_string(), key.to_string()),
            StoredObject {
                data,
                content_type: Some(content_type.to_string()),
                declared_length: None,
            },
        );
        Ok(())
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}

/// Metadata store that keeps every record in insertion order
#[derive(Default)]
pub struct MemoryMetadataStore {
    records: Mutex<Vec<MetadataRecord>>,
    fail_writes: Mutex<bool>,
}

impl MemoryMetadataStore {
    pub fn records(&self) -> Vec<MetadataRecord> {
        self.records.lock().unwrap().clone()
    }

    pub fn fail_writes(&self) {
        *self.fail_writes.lock().unwrap() = true;
    }
}

#[async_trait]
impl MetadataStore for MemoryMetadataStore {
    async fn put_record(&self, record: &MetadataRecord) -> MetadataResult<()> {
        if *self.fail_writes.lock().unwrap() {
            return Err(MetadataError::WriteFailed("injected failure".to_string()));
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

pub fn test_config() -> IngestConfig {
    IngestConfig::from_vars(|_| None).unwrap()
}

pub struct Harness {
    pub storage: Arc<MemoryStorage>,
    pub metadata: Arc<MemoryMetadataStore>,
    pub ctx: AppContext,
}

pub fn harness() -> Harness {
    harness_with(test_config())
}

pub fn harness_with(config: IngestConfig) -> Harness {
    let storage = Arc::new(MemoryStorage::default());
    let metadata = Arc::new(MemoryMetadataStore::default());
    let ctx = AppContext::new(config, storage.clone(), metadata.clone());
    Harness {
        storage,
        metadata,
        ctx,
    }
}

/// Encoded test image with a gradient so lossy encoders behave realistically
pub fn image_bytes(format: ImageFormat, width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    let img = match format {
        ImageFormat::Gif => DynamicImage::ImageRgba8(DynamicImage::ImageRgb8(img).to_rgba8()),
        _ => DynamicImage::ImageRgb8(img),
    };
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), format).unwrap();
    buffer
}

/// S3 notification JSON naming the given (bucket, key) pairs
pub fn s3_event(objects: &[(&str, &str)]) -> serde_json::Value {
    let records: Vec<serde_json::Value> = objects
        .iter()
        .map(|(bucket, key)| {
            serde_json::json!({
                "eventVersion": "2.1",
                "eventSource": "aws:s3",
                "awsRegion": "us-east-1",
                "eventTime": "2024-05-01T12:00:00.000Z",
                "eventName": "ObjectCreated:Put",
                "userIdentity": { "principalId": "EXAMPLE" },
                "requestParameters": { "sourceIPAddress": "127.0.0.1" },
                "responseElements": {},
                "s3": {
                    "s3SchemaVersion": "1.0",
                    "configurationId": "resize",
                    "bucket": {
                        "name": bucket,
                        "ownerIdentity": { "principalId": "EXAMPLE" },
                        "arn": format!("arn:aws:s3:::{}", bucket)
                    },
                    "object": {
                        "key": key,
                        "size": 1024,
                        "eTag": "0123456789abcdef0123456789abcdef",
                        "sequencer": "0A1B2C3D4E5F678901"
                    }
                }
            })
        })
        .collect();
    serde_json::json!({ "Records": records })
}
