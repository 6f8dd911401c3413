//! Domain models
//!
//! A `ChangeNotification` is the ordered list of objects named by one storage event.
//! Each processed object yields a resized artifact in the destination container and
//! one `MetadataRecord` in the metadata store.

use bytes::Bytes;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One changed object named by a notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectReference {
    pub bucket: String,
    pub key: String,
}

impl ObjectReference {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }
}

/// Ordered sequence of object references delivered by one storage event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeNotification {
    pub records: Vec<ObjectReference>,
}

impl ChangeNotification {
    pub fn new(records: Vec<ObjectReference>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<ObjectReference> for ChangeNotification {
    fn from_iter<I: IntoIterator<Item = ObjectReference>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

/// An object read from a container, with the attributes the store declared for it.
#[derive(Debug, Clone)]
pub struct FetchedObject {
    pub bucket: String,
    pub key: String,
    pub data: Bytes,
    pub content_type: Option<String>,
    /// Length declared by the store, which is not necessarily `data.len()`
    pub content_length: u64,
}

/// Row written to the metadata store for every resized image.
///
/// Serialized attribute names are the stored names (`imageId`, `sourceBucket`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataRecord {
    pub image_id: Uuid,
    pub source_bucket: String,
    pub source_key: String,
    pub dest_bucket: String,
    pub dest_key: String,
    pub content_type: String,
    pub size_original: u64,
    pub resized_at: DateTime<Utc>,
}

impl MetadataRecord {
    /// Build a record with a fresh random id, stamped now.
    pub fn new(
        source_bucket: impl Into<String>,
        source_key: impl Into<String>,
        dest_bucket: impl Into<String>,
        dest_key: impl Into<String>,
        content_type: impl Into<String>,
        size_original: u64,
    ) -> Self {
        Self {
            image_id: Uuid::new_v4(),
            source_bucket: source_bucket.into(),
            source_key: source_key.into(),
            dest_bucket: dest_bucket.into(),
            dest_key: dest_key.into(),
            content_type: content_type.into(),
            size_original,
            resized_at: Utc::now(),
        }
    }

    /// `resizedAt` as stored: RFC 3339 in UTC with microsecond precision.
    pub fn resized_at_iso(&self) -> String {
        self.resized_at.to_rfc3339_opts(SecondsFormat::Micros, true)
    }
}
