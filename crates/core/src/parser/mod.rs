//! PostScript parsing modules.
//!
//! - `lexer`: tokenizer over decoded PostScript text
//! - `literal`: parenthesized and hex string decoders
//! - `number`: numeric token classification
//! - `show`: operand stack and show-operator text collection

pub mod lexer;
pub mod literal;
pub mod number;
pub mod show;

// Re-export main types for convenience
pub use lexer::{Delimiter, PsLexer, PsToken};
pub use literal::{decode_hex_string, decode_literal_string};
pub use number::is_numeric;
pub use show::{ShowOperator, ShowTextParser, collect_shown, extract_text};
