use thiserror::Error;

/// Image processing errors
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("Failed to decode image: {0}")]
    Decode(String),

    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to encode {format} image: {message}")]
    Encode { format: String, message: String },
}

impl ProcessingError {
    pub(crate) fn encode(format: ::image::ImageFormat, err: impl std::fmt::Display) -> Self {
        ProcessingError::Encode {
            format: format!("{:?}", format),
            message: err.to_string(),
        }
    }
}
