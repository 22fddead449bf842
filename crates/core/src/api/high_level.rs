//! High-level text extraction API.
//!
//! - `extract_ps_text()` - shown text of one PostScript document
//! - `extract_ps_data()` - the same wrapped in [`ExtractData`]
//! - `extract_ps_text_from_path()` - memory-mapped file input
//! - `extract_ps_texts()` - many documents on a rayon pool

use std::fs::File;
use std::path::Path;

use memmap2::Mmap;
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;

use crate::error::{ExtractError, Result};
use crate::extractor::{ExtractData, ExtractParams, PsConfig, PsExtractor};

const POOL_FAILURE: &str = "failed to build extraction thread pool";

pub(crate) fn default_thread_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Extract the shown text of a PostScript document.
///
/// # Example
/// ```ignore
/// use pstext_core::high_level::extract_ps_text;
/// use pstext_core::extractor::PsConfig;
///
/// let text = extract_ps_text(b"(Hello) show", &PsConfig::default())?;
/// assert_eq!(text, "Hello");
/// ```
pub fn extract_ps_text(data: &[u8], config: &PsConfig) -> Result<String> {
    let mut extracted = extract_ps_data(data, config, None)?;
    Ok(extracted.take_content().unwrap_or_default())
}

/// Extract a PostScript document into an [`ExtractData`] record.
pub fn extract_ps_data(
    data: &[u8],
    config: &PsConfig,
    params: Option<&ExtractParams>,
) -> Result<ExtractData> {
    PsExtractor::with_config(config.clone()).extract_bytes(data, params)
}

/// Extract the shown text of a PostScript file.
pub fn extract_ps_text_from_path(path: impl AsRef<Path>, config: &PsConfig) -> Result<String> {
    let path = path.as_ref();
    let file = File::open(path)?;
    // Safety: the file handle stays open while the map is alive.
    let mmap = unsafe { Mmap::map(&file) }?;

    let mut params = ExtractParams::new();
    params.insert(
        ExtractData::RESOURCE_NAME_KEY.to_string(),
        path.display().to_string(),
    );
    let mut extracted = extract_ps_data(&mmap, config, Some(&params))?;
    Ok(extracted.take_content().unwrap_or_default())
}

/// Extract many documents in parallel.
///
/// Results are returned in input order, one per document. `threads` of
/// `None` uses the available parallelism.
pub fn extract_ps_texts<D>(
    documents: &[D],
    config: &PsConfig,
    threads: Option<usize>,
) -> Result<Vec<Result<String>>>
where
    D: AsRef<[u8]> + Sync,
{
    let pool = ThreadPoolBuilder::new()
        .num_threads(threads.unwrap_or_else(default_thread_count).max(1))
        .build()
        .map_err(|e| ExtractError::extraction(POOL_FAILURE, e))?;

    let extractor = PsExtractor::with_config(config.clone());
    Ok(pool.install(|| {
        documents
            .par_iter()
            .map(|doc| {
                extractor
                    .extract_bytes(doc.as_ref(), None)
                    .map(|mut data| data.take_content().unwrap_or_default())
            })
            .collect()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_from_bytes() {
        let text = extract_ps_text(b"(foo) show (bar) show", &PsConfig::default()).unwrap();
        assert_eq!(text, "foo bar");
    }

    #[test]
    fn data_from_bytes() {
        let data = extract_ps_data(b"<414243> show", &PsConfig::default(), None).unwrap();
        assert_eq!(data.content(), Some("ABC"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let config = PsConfig::default();
        let err = extract_ps_text_from_path("/nonexistent/nowhere.ps", &config).unwrap_err();
        assert!(matches!(err, ExtractError::Io(_)));
    }

    #[test]
    fn batch_keeps_input_order() {
        let docs: Vec<Vec<u8>> = (0..64)
            .map(|i| format!("({i}) show").into_bytes())
            .collect();
        let results = extract_ps_texts(&docs, &PsConfig::default(), Some(4)).unwrap();
        assert_eq!(results.len(), 64);
        for (i, result) in results.iter().enumerate() {
            assert_eq!(result.as_ref().unwrap(), &i.to_string());
        }
    }

    #[test]
    fn batch_reports_each_failure() {
        let docs: [&[u8]; 3] = [b"(a) show", b"showpage", b"(b) show"];
        let results = extract_ps_texts(&docs, &PsConfig::default(), None).unwrap();
        assert_eq!(results[0].as_deref().unwrap(), "a");
        assert!(results[1].as_ref().unwrap_err().is_unsupported());
        assert_eq!(results[2].as_deref().unwrap(), "b");
    }
}
