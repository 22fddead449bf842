//! Extractor registry keyed by MIME type.
//!
//! Several extractors may serve one MIME type. They are tried in descending
//! weight order; an extractor that reports "no text found" hands over to the
//! next one.

use std::cmp::Reverse;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::{ExtractError, Result};

use super::{ExtractData, ExtractParams, Extractor, PsExtractor, TextExtractor, resource_name};

/// MIME type served by [`PsExtractor`] in [`ExtractorRegistry::with_defaults`].
pub const POSTSCRIPT_MIME: &str = "application/postscript";
/// MIME type served by [`TextExtractor`] in [`ExtractorRegistry::with_defaults`].
pub const TEXT_MIME: &str = "text/plain";

/// Lowercased MIME type without parameters.
fn normalize_mime(mime: &str) -> String {
    mime.split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Registry of content extractors.
#[derive(Clone, Default)]
pub struct ExtractorRegistry {
    /// MIME type to extractors, in registration order
    extractors: IndexMap<String, Vec<Arc<dyn Extractor>>>,
}

impl ExtractorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// PostScript extractor plus the plain text fallback.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        let text: Arc<dyn Extractor> = Arc::new(TextExtractor::new());
        registry.register(POSTSCRIPT_MIME, PsExtractor::new());
        registry.register_shared(POSTSCRIPT_MIME, Arc::clone(&text));
        registry.register_shared(TEXT_MIME, text);
        registry
    }

    /// Register an extractor for a MIME type.
    pub fn register<E: Extractor + 'static>(&mut self, mime: &str, extractor: E) {
        self.register_shared(mime, Arc::new(extractor));
    }

    /// Register an extractor that is shared with other MIME types.
    pub fn register_shared(&mut self, mime: &str, extractor: Arc<dyn Extractor>) {
        self.extractors
            .entry(normalize_mime(mime))
            .or_default()
            .push(extractor);
    }

    /// Registered MIME types.
    pub fn mime_types(&self) -> impl Iterator<Item = &str> {
        self.extractors.keys().map(String::as_str)
    }

    /// Extractors for a MIME type, highest weight first.
    ///
    /// Equal weights keep registration order.
    pub fn candidates(&self, mime: &str) -> Vec<Arc<dyn Extractor>> {
        let mut found = self
            .extractors
            .get(&normalize_mime(mime))
            .cloned()
            .unwrap_or_default();
        found.sort_by_key(|e| Reverse(e.weight()));
        found
    }

    /// The preferred extractor for a MIME type.
    pub fn get(&self, mime: &str) -> Option<Arc<dyn Extractor>> {
        self.candidates(mime).into_iter().next()
    }

    /// Extract `bytes` with the best extractor for `mime`.
    ///
    /// Falls back to lower-weight extractors on
    /// [`ExtractError::Unsupported`]; any other error is returned at once.
    pub fn extract(
        &self,
        mime: &str,
        bytes: &[u8],
        params: Option<&ExtractParams>,
    ) -> Result<ExtractData> {
        let mut last_unsupported = None;

        for extractor in self.candidates(mime) {
            let mut input = bytes;
            match extractor.get_text(&mut input, params) {
                Err(e) if e.is_unsupported() => {
                    tracing::warn!(
                        extractor = extractor.name(),
                        resource = resource_name(params).unwrap_or("-"),
                        "{e} Trying next extractor."
                    );
                    last_unsupported = Some(e);
                }
                result => return result,
            }
        }

        match last_unsupported {
            Some(e) => Err(e),
            None => Err(ExtractError::NoExtractor(mime.to_string())),
        }
    }
}

impl std::fmt::Debug for ExtractorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (mime, extractors) in &self.extractors {
            let names: Vec<&str> = extractors.iter().map(|e| e.name()).collect();
            map.entry(mime, &names);
        }
        map.finish()
    }
}
