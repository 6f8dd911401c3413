//! Image processor - format detection and decoding

use crate::error::ProcessingError;
use image::{DynamicImage, ImageError, ImageFormat, ImageReader};
use std::io::Cursor;

pub struct ImageProcessor;

impl ImageProcessor {
    /// Detect the encoding from the payload bytes and decode it.
    ///
    /// The declared content type is not consulted; the returned format is what the
    /// bytes actually are.
    pub fn decode(data: &[u8]) -> Result<(DynamicImage, ImageFormat), ProcessingError> {
        let reader = ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(|e| ProcessingError::Decode(e.to_string()))?;

        let format = reader.format().ok_or_else(|| {
            ProcessingError::UnsupportedFormat("unrecognized image data".to_string())
        })?;

        let img = reader.decode().map_err(|e| match e {
            ImageError::Unsupported(inner) => ProcessingError::UnsupportedFormat(inner.to_string()),
            other => ProcessingError::Decode(other.to_string()),
        })?;

        Ok((img, format))
    }

    /// MIME type for a detected format
    pub fn mime_type(format: ImageFormat) -> &'static str {
        format.to_mime_type()
    }
}
