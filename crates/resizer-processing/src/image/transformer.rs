//! Image transformer - chains decode, bounded resize and re-encode
//!
//! The output keeps the container format the payload arrived in.

use crate::compression::ImageCompressor;
use crate::error::ProcessingError;
use crate::image::processor::ImageProcessor;
use crate::image::resize::ImageResize;
use bytes::Bytes;
use image::{GenericImageView, ImageFormat};
use std::time::Instant;

/// Parameters for [`ImageTransformer::shrink`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShrinkOptions {
    /// Side of the square bounding box
    pub max_dimension: u32,
    /// Encoder quality (1-100) for lossy formats
    pub quality: u8,
}

impl Default for ShrinkOptions {
    fn default() -> Self {
        Self {
            max_dimension: 1024,
            quality: 70,
        }
    }
}

/// Result of a shrink pass
#[derive(Debug, Clone)]
pub struct TransformedImage {
    pub data: Bytes,
    pub format: ImageFormat,
    pub original_dimensions: (u32, u32),
    pub dimensions: (u32, u32),
}

impl TransformedImage {
    pub fn mime_type(&self) -> &'static str {
        ImageProcessor::mime_type(self.format)
    }

    pub fn was_resized(&self) -> bool {
        self.original_dimensions != self.dimensions
    }
}

pub struct ImageTransformer;

impl ImageTransformer {
    /// Decode `data`, shrink it into the bounding box and encode it back in its own format
    pub fn shrink(
        data: &[u8],
        options: &ShrinkOptions,
    ) -> Result<TransformedImage, ProcessingError> {
        let start = Instant::now();

        let (img, format) = ImageProcessor::decode(data)?;
        let original_dimensions = img.dimensions();

        let resized = ImageResize::shrink_to_fit(img, options.max_dimension);
        let dimensions = resized.dimensions();

        let encoded = ImageCompressor::encode(&resized, format, options.quality)?;

        tracing::debug!(
            format = ?format,
            original_width = original_dimensions.0,
            original_height = original_dimensions.1,
            width = dimensions.0,
            height = dimensions.1,
            input_bytes = data.len(),
            output_bytes = encoded.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Image transformed"
        );

        Ok(TransformedImage {
            data: encoded,
            format,
            original_dimensions,
            dimensions,
        })
    }
}
