//! Image processing module
//!
//! - Format detection and decoding (processor)
//! - Bounded downscaling (resize)
//! - The decode → resize → encode chain (transformer)

pub mod processor;
pub mod resize;
pub mod transformer;

pub use processor::ImageProcessor;
pub use resize::{fit_within, ImageResize};
pub use transformer::{ImageTransformer, ShrinkOptions, TransformedImage};
