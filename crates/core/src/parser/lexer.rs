//! PostScript tokenizer.
//!
//! A single forward pass over decoded PostScript text. Comments and
//! whitespace are skipped, string literals are decoded, and everything else
//! is reported as a name literal, a structural delimiter, or a bare token
//! (operator or number). Malformed input never produces an error.

use super::literal::{char_at, decode_hex_string, decode_literal_string};

/// Structural delimiters. None of them is tracked for nesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `<<`
    DictOpen,
    /// `>>`
    DictClose,
    /// `[`
    ArrayOpen,
    /// `]`
    ArrayClose,
    /// `{`
    ProcOpen,
    /// `}`
    ProcClose,
    /// Orphaned `)`, lone `>`, or a `<` at end of input.
    Stray(char),
}

/// PostScript token types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PsToken<'a> {
    /// Decoded literal `(...)` or hex `<...>` string
    String(String),
    /// Name literal without its slash (e.g. `Helvetica` for `/Helvetica`)
    Name(&'a str),
    /// Dictionary, array and procedure brackets
    Delimiter(Delimiter),
    /// Any other run of regular characters: operators and numbers
    Bare(&'a str),
}

/// Check if char is PostScript whitespace
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\u{0c}' | '\0')
}

/// Check if char ends a name or bare token
#[inline]
pub fn is_delimiter(c: char) -> bool {
    is_whitespace(c) || matches!(c, '(' | ')' | '<' | '>' | '[' | ']' | '{' | '}' | '/' | '%')
}

/// PostScript tokenizer over decoded text.
///
/// Yields `(byte_offset, token)` pairs in source order.
#[derive(Debug, Clone)]
pub struct PsLexer<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> PsLexer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Current position in the text
    pub fn tell(&self) -> usize {
        self.pos
    }

    fn peek_byte(&self, offset: usize) -> Option<u8> {
        self.text.as_bytes().get(self.pos + offset).copied()
    }

    /// Advance past a run of regular characters.
    ///
    /// Delimiters are all ASCII, so the run always ends on a char boundary.
    fn skip_regular(&mut self) {
        let bytes = self.text.as_bytes();
        while self.pos < bytes.len() && !is_delimiter(char::from(bytes[self.pos])) {
            self.pos += 1;
        }
    }

    /// Skip a comment up to (not including) the line terminator.
    fn skip_comment(&mut self) {
        let bytes = self.text.as_bytes();
        self.pos += 1;
        while self.pos < bytes.len() && !matches!(bytes[self.pos], b'\n' | b'\r') {
            self.pos += 1;
        }
    }

    fn delimiter(&mut self, width: usize, delimiter: Delimiter) -> PsToken<'a> {
        self.pos += width;
        PsToken::Delimiter(delimiter)
    }

    /// Get next token
    pub fn next_token(&mut self) -> Option<(usize, PsToken<'a>)> {
        loop {
            let start = self.pos;
            let ch = char_at(self.text, start)?;

            let token = match ch {
                '%' => {
                    self.skip_comment();
                    continue;
                }
                c if is_whitespace(c) => {
                    self.pos += 1;
                    continue;
                }
                '(' => {
                    let (value, next) = decode_literal_string(self.text, start);
                    self.pos = next;
                    PsToken::String(value)
                }
                '<' => match self.peek_byte(1) {
                    Some(b'<') => self.delimiter(2, Delimiter::DictOpen),
                    Some(_) => {
                        let (value, next) = decode_hex_string(self.text, start);
                        self.pos = next;
                        PsToken::String(value)
                    }
                    None => self.delimiter(1, Delimiter::Stray('<')),
                },
                '>' => {
                    if self.peek_byte(1) == Some(b'>') {
                        self.delimiter(2, Delimiter::DictClose)
                    } else {
                        self.delimiter(1, Delimiter::Stray('>'))
                    }
                }
                '[' => self.delimiter(1, Delimiter::ArrayOpen),
                ']' => self.delimiter(1, Delimiter::ArrayClose),
                '{' => self.delimiter(1, Delimiter::ProcOpen),
                '}' => self.delimiter(1, Delimiter::ProcClose),
                ')' => self.delimiter(1, Delimiter::Stray(')')),
                '/' => {
                    self.pos += 1;
                    self.skip_regular();
                    PsToken::Name(&self.text[start + 1..self.pos])
                }
                _ => {
                    self.skip_regular();
                    if self.pos == start {
                        self.pos += ch.len_utf8();
                        continue;
                    }
                    PsToken::Bare(&self.text[start..self.pos])
                }
            };

            return Some((start, token));
        }
    }
}

impl<'a> Iterator for PsLexer<'a> {
    type Item = (usize, PsToken<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
