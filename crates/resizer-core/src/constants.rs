/// Source container watched when `SOURCE_BUCKET` is not set.
pub const DEFAULT_SOURCE_BUCKET: &str = "source-image-azoz";

/// Destination container used when `DEST_BUCKET` is not set.
pub const DEFAULT_DEST_BUCKET: &str = "resized-image-azoz";

/// Metadata table used when `METADATA_TABLE` is not set.
pub const DEFAULT_METADATA_TABLE: &str = "ImageMetadata";

/// Prefix prepended to the source basename to form the destination key.
pub const DEFAULT_DEST_KEY_PREFIX: &str = "resized-";

/// Bounding box side, in pixels.
pub const DEFAULT_MAX_DIMENSION: u32 = 1024;

/// Encoder quality for formats that accept one.
pub const DEFAULT_IMAGE_QUALITY: u8 = 70;
