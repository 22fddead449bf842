//! Content extractors.
//!
//! An [`Extractor`] turns a raw document stream into [`ExtractData`]. The
//! [`ExtractorRegistry`] picks extractors by MIME type and weight.

use std::collections::HashMap;
use std::io::Read;

use crate::error::Result;

pub mod data;
pub mod ps;
pub mod registry;
pub mod text;

pub use data::ExtractData;
pub use ps::{PS_EXTRACTOR_WEIGHT, PsConfig, PsExtractor};
pub use registry::ExtractorRegistry;
pub use text::{TextConfig, TextExtractor};

/// Per-call parameters passed alongside the input stream.
pub type ExtractParams = HashMap<String, String>;

/// Name of the resource being extracted, for log and error messages.
pub fn resource_name(params: Option<&ExtractParams>) -> Option<&str> {
    let name = params?.get(ExtractData::RESOURCE_NAME_KEY)?;
    Some(name.as_str())
}

/// A document-to-text extractor.
pub trait Extractor: Send + Sync {
    /// Read `input` to the end and extract its text.
    ///
    /// Returns [`ExtractError::Unsupported`](crate::error::ExtractError::Unsupported)
    /// when the document holds no text this extractor can find.
    fn get_text(&self, input: &mut dyn Read, params: Option<&ExtractParams>) -> Result<ExtractData>;

    /// Priority among extractors registered for the same MIME type.
    fn weight(&self) -> i32 {
        1
    }

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}
