//! PostScript text extractor.
//!
//! Collects the string operands of show-family operators (`show`, `ashow`,
//! `widthshow`, `awidthshow`, `xshow`, `yshow`, `xyshow`, `kshow`) from
//! parenthesized and hex string literals.
//!
//! Text produced by procedures or loops at run time, re-encoded fonts and
//! binary-encoded PostScript are not handled.

use std::io::Read;

use crate::encoding::{self, DEFAULT_ENCODING};
use crate::error::{ExtractError, Result};
use crate::parser::show::collect_shown;

use super::{ExtractData, ExtractParams, Extractor, resource_name};

/// Weight of [`PsExtractor`] in the registry, above the generic text fallback.
pub const PS_EXTRACTOR_WEIGHT: i32 = 10;

const FAILURE_MESSAGE: &str = "Failed to extract text from PostScript content.";
const NO_TEXT_MESSAGE: &str = "No text found in PostScript content.";

/// Configuration for [`PsExtractor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PsConfig {
    /// Name of the character encoding used to decode the input bytes.
    ///
    /// Names are WHATWG encoding labels. `ISO-8859-1` and `latin1` select
    /// windows-1252, so bytes 0x80-0x9F decode to characters such as `€`
    /// rather than C1 control codes.
    pub encoding: String,
}

impl Default for PsConfig {
    fn default() -> Self {
        Self {
            encoding: DEFAULT_ENCODING.to_string(),
        }
    }
}

impl PsConfig {
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }
}

/// Extracts shown text from PostScript documents.
#[derive(Debug, Clone, Default)]
pub struct PsExtractor {
    config: PsConfig,
}

impl PsExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PsConfig {
        &self.config
    }

    pub fn encoding(&self) -> &str {
        &self.config.encoding
    }

    pub fn set_encoding(&mut self, encoding: impl Into<String>) {
        self.config.encoding = encoding.into();
    }

    /// Extract from already-decoded PostScript text.
    ///
    /// Never fails; returns an empty string when no show operator fires.
    pub fn extract_text(&self, content: &str) -> String {
        collect_shown(content).join(" ")
    }

    /// Decode `bytes` with the configured encoding and extract their text.
    pub fn extract_bytes(
        &self,
        bytes: &[u8],
        params: Option<&ExtractParams>,
    ) -> Result<ExtractData> {
        let resource = resource_name(params).unwrap_or("-");
        let content = encoding::decode(bytes, &self.config.encoding)
            .map_err(|e| ExtractError::extraction(FAILURE_MESSAGE, e))?;

        let shown = collect_shown(&content);
        tracing::debug!(
            resource,
            bytes = bytes.len(),
            strings = shown.len(),
            "scanned PostScript content"
        );

        let text = shown.join(" ");
        if text.is_empty() {
            return Err(ExtractError::Unsupported(NO_TEXT_MESSAGE.to_string()));
        }
        Ok(ExtractData::new(text))
    }
}

impl Extractor for PsExtractor {
    fn get_text(
        &self,
        input: &mut dyn Read,
        params: Option<&ExtractParams>,
    ) -> Result<ExtractData> {
        let mut bytes = Vec::new();
        input
            .read_to_end(&mut bytes)
            .map_err(|e| ExtractError::extraction(FAILURE_MESSAGE, e))?;
        self.extract_bytes(&bytes, params)
    }

    fn weight(&self) -> i32 {
        PS_EXTRACTOR_WEIGHT
    }

    fn name(&self) -> &'static str {
        "ps"
    }
}
