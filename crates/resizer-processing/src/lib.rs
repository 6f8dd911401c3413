//! Resizer Processing Library
//!
//! Decodes an image payload, shrinks it to fit a square bounding box and re-encodes it
//! in the format it arrived in.

pub mod compression;
pub mod error;
pub mod image;

pub use compression::ImageCompressor;
pub use error::ProcessingError;
pub use self::image::{
    fit_within, ImageProcessor, ImageResize, ImageTransformer, ShrinkOptions,
    TransformedImage,
};
