//! Error types for pstext extraction.

use thiserror::Error;

/// Boxed cause carried by [`ExtractError::Extraction`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Primary error type for extraction operations.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The document was read but yielded no text. Callers may fall back to
    /// another extractor.
    #[error("{0}")]
    Unsupported(String),

    /// Extraction failed while decoding or reading the input.
    #[error("{message}")]
    Extraction {
        message: String,
        #[source]
        source: BoxError,
    },

    #[error("unsupported encoding: {0}")]
    UnknownEncoding(String),

    #[error("no extractor registered for {0}")]
    NoExtractor(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExtractError {
    /// Wrap `source` as an extraction failure with the given message.
    pub fn extraction(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        ExtractError::Extraction {
            message: message.into(),
            source: source.into(),
        }
    }

    /// True for the "no text found" signal.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, ExtractError::Unsupported(_))
    }
}

/// Convenience Result type alias for ExtractError.
pub type Result<T> = std::result::Result<T, ExtractError>;
