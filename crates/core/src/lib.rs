//! pstext - PostScript text extraction for crawler indexing pipelines.
//!
//! The [`parser`] modules scan PostScript source and collect the string
//! operands of show-family operators. The [`extractor`] modules wrap that in
//! the uniform extractor interface used by the crawler, with a MIME-keyed
//! registry and a plain text fallback.

pub mod api;
pub mod encoding;
pub mod error;
pub mod extractor;
pub mod parser;

// Re-export high_level for convenience
pub use api::high_level;

// Re-export parser modules under their scanner names
pub use parser::lexer as pslexer;
pub use parser::show as psshow;

pub use error::{ExtractError, Result};
pub use extractor::{ExtractData, Extractor, ExtractorRegistry, PsConfig, PsExtractor};
