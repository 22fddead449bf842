//! High-level API module for PostScript text extraction.
//!
//! # Example
//!
//! ```ignore
//! use pstext_core::api::extract_ps_text;
//! use pstext_core::extractor::PsConfig;
//!
//! let ps_bytes = std::fs::read("document.ps")?;
//! let text = extract_ps_text(&ps_bytes, &PsConfig::default())?;
//! ```

pub mod high_level;

// Re-export for convenience
pub use high_level::{extract_ps_data, extract_ps_text, extract_ps_text_from_path, extract_ps_texts};
