//! Uniform extraction result.

use indexmap::IndexMap;

/// Text and metadata produced by an extractor.
///
/// Metadata keeps insertion order; each key maps to one or more values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtractData {
    content: Option<String>,
    metadata: IndexMap<String, Vec<String>>,
}

impl ExtractData {
    /// Metadata key for the name of the extracted resource.
    pub const RESOURCE_NAME_KEY: &'static str = "resourceName";
    /// Metadata key for the source URL.
    pub const URL: &'static str = "url";
    /// Metadata key for candidate passwords of protected files.
    pub const FILE_PASSWORDS: &'static str = "file.passwords";

    /// Create a result holding `content`.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            metadata: IndexMap::new(),
        }
    }

    /// An empty result with no content.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn set_content(&mut self, content: Option<String>) {
        self.content = content;
    }

    /// Take the content out, leaving `None`.
    pub fn take_content(&mut self) -> Option<String> {
        self.content.take()
    }

    /// Append a value under `key`.
    pub fn put_value(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata
            .entry(key.into())
            .or_default()
            .push(value.into());
    }

    /// Replace all values under `key`.
    pub fn put_values<I, S>(&mut self, key: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.metadata
            .insert(key.into(), values.into_iter().map(Into::into).collect());
    }

    pub fn values(&self, key: &str) -> Option<&[String]> {
        self.metadata.get(key).map(Vec::as_slice)
    }

    /// Metadata keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.metadata.keys().map(String::as_str)
    }

    pub fn metadata(&self) -> &IndexMap<String, Vec<String>> {
        &self.metadata
    }
}
