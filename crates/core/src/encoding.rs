//! Input character decoding.
//!
//! Encoding names are resolved as WHATWG labels, so `latin1` and
//! `ISO-8859-1` both select windows-1252 (bytes 0x80-0x9F decode to the
//! windows-1252 characters, not C1 controls). Unknown labels are an error,
//! and so are labels WHATWG maps to the replacement encoding
//! (`iso-2022-kr`, `hz-gb-2312`, ...), which would decode any input to a
//! single U+FFFD. Malformed byte sequences decode to U+FFFD.

use encoding_rs::Encoding;

use crate::error::{ExtractError, Result};

/// Default input encoding name.
pub const DEFAULT_ENCODING: &str = "UTF-8";

/// Resolve an encoding name.
pub fn lookup(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label_no_replacement(label.as_bytes())
        .ok_or_else(|| ExtractError::UnknownEncoding(label.to_string()))
}

/// Decode `bytes` with the encoding named by `label`.
///
/// A byte order mark matching the encoding is dropped.
pub fn decode(bytes: &[u8], label: &str) -> Result<String> {
    let encoding = lookup(label)?;
    let (text, malformed) = encoding.decode_with_bom_removal(bytes);
    if malformed {
        tracing::debug!(
            encoding = encoding.name(),
            "replaced malformed input sequences"
        );
    }
    Ok(text.into_owned())
}
