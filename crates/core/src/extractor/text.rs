//! Plain text extractor, the generic fallback.

use std::io::Read;

use crate::encoding::{self, DEFAULT_ENCODING};
use crate::error::{ExtractError, Result};

use super::{ExtractData, ExtractParams, Extractor, resource_name};

/// Configuration for [`TextExtractor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextConfig {
    pub encoding: String,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            encoding: DEFAULT_ENCODING.to_string(),
        }
    }
}

impl TextConfig {
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }
}

/// Returns the whole decoded input as content. Empty input is not an error.
#[derive(Debug, Clone, Default)]
pub struct TextExtractor {
    config: TextConfig,
}

impl TextExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TextConfig) -> Self {
        Self { config }
    }

    pub fn encoding(&self) -> &str {
        &self.config.encoding
    }

    fn failure(&self, source: ExtractError) -> ExtractError {
        ExtractError::extraction(
            format!(
                "Failed to extract text content (encoding: {})",
                self.config.encoding
            ),
            source,
        )
    }
}

impl Extractor for TextExtractor {
    fn get_text(
        &self,
        input: &mut dyn Read,
        params: Option<&ExtractParams>,
    ) -> Result<ExtractData> {
        let mut bytes = Vec::new();
        input
            .read_to_end(&mut bytes)
            .map_err(|e| self.failure(e.into()))?;
        let content = encoding::decode(&bytes, &self.config.encoding)
            .map_err(|e| self.failure(e))?;
        tracing::debug!(
            resource = resource_name(params).unwrap_or("-"),
            bytes = bytes.len(),
            "decoded text content"
        );
        Ok(ExtractData::new(content))
    }

    fn name(&self) -> &'static str {
        "text"
    }
}
