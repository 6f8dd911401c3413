use crate::error::ProcessingError;
use bytes::Bytes;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{DynamicImage, GenericImageView, ImageFormat};
use std::io::Cursor;

/// Re-encodes a decoded image in a given container format
pub struct ImageCompressor;

impl ImageCompressor {
    /// Encode `img` as `format`.
    ///
    /// `quality` (1-100) drives the lossy encoders (JPEG, WebP). PNG is written with
    /// maximum compression; GIF, BMP and TIFF have no quality knob and use the codec
    /// defaults. Any other format is rejected.
    pub fn encode(
        img: &DynamicImage,
        format: ImageFormat,
        quality: u8,
    ) -> Result<Bytes, ProcessingError> {
        let quality = quality.clamp(1, 100);

        let data = match format {
            ImageFormat::Jpeg => Self::encode_jpeg(img, quality)?,
            ImageFormat::WebP => Self::encode_webp(img, quality),
            ImageFormat::Png => Self::encode_png(img)?,
            ImageFormat::Gif => {
                Self::encode_default(&DynamicImage::ImageRgba8(img.to_rgba8()), format)?
            }
            ImageFormat::Bmp | ImageFormat::Tiff => Self::encode_default(img, format)?,
            other => {
                return Err(ProcessingError::UnsupportedFormat(format!(
                    "cannot re-encode {:?}",
                    other
                )))
            }
        };

        tracing::debug!(
            format = ?format,
            quality = quality,
            size_bytes = data.len(),
            "Image encoded"
        );

        Ok(data)
    }

    fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<Bytes, ProcessingError> {
        // Baseline JPEG carries only gray or RGB samples
        let converted;
        let source = match img {
            DynamicImage::ImageLuma8(_) | DynamicImage::ImageRgb8(_) => img,
            _ => {
                converted = DynamicImage::ImageRgb8(img.to_rgb8());
                &converted
            }
        };

        let mut buffer = Vec::new();
        let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
        source
            .write_with_encoder(encoder)
            .map_err(|e| ProcessingError::encode(ImageFormat::Jpeg, e))?;

        Ok(Bytes::from(buffer))
    }

    fn encode_webp(img: &DynamicImage, quality: u8) -> Bytes {
        let (width, height) = img.dimensions();
        let rgba_img = img.to_rgba8();

        let encoder = webp::Encoder::from_rgba(&rgba_img, width, height);
        let webp_data = encoder.encode(quality as f32);

        Bytes::copy_from_slice(&webp_data)
    }

    fn encode_png(img: &DynamicImage) -> Result<Bytes, ProcessingError> {
        let converted;
        let source = match img {
            DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_) => {
                converted = DynamicImage::ImageRgba16(img.to_rgba16());
                &converted
            }
            _ => img,
        };

        let mut buffer = Vec::new();
        let encoder =
            PngEncoder::new_with_quality(&mut buffer, CompressionType::Best, FilterType::Adaptive);
        source
            .write_with_encoder(encoder)
            .map_err(|e| ProcessingError::encode(ImageFormat::Png, e))?;

        Ok(Bytes::from(buffer))
    }

    fn encode_default(img: &DynamicImage, format: ImageFormat) -> Result<Bytes, ProcessingError> {
        let mut buffer = Vec::new();
        img.write_to(&mut Cursor::new(&mut buffer), format)
            .map_err(|e| ProcessingError::encode(format, e))?;

        Ok(Bytes::from(buffer))
    }
}
