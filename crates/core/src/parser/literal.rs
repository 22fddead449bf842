//! String literal decoders.
//!
//! Both decoders take the text and the offset of the opening delimiter and
//! return the decoded value together with the offset just past the literal.
//! Neither fails: malformed input degrades to a best-effort value.

use super::lexer::is_whitespace;

/// Character starting at byte offset `pos`.
#[inline]
pub(crate) fn char_at(text: &str, pos: usize) -> Option<char> {
    text.get(pos..).and_then(|rest| rest.chars().next())
}

/// Decode a parenthesized string literal `(...)`.
///
/// `open` must point at the opening `(`. Balanced inner parentheses are kept,
/// backslash escapes are resolved. If the input ends before the matching `)`
/// the value is empty and the returned offset is the end of input.
pub fn decode_literal_string(text: &str, open: usize) -> (String, usize) {
    let len = text.len();
    let mut out = String::new();
    let mut pos = open + 1;
    let mut depth = 1usize;

    while depth > 0 {
        let Some(ch) = char_at(text, pos) else {
            return (String::new(), len);
        };
        pos += ch.len_utf8();

        match ch {
            '\\' => {
                let Some(escaped) = char_at(text, pos) else {
                    continue;
                };
                pos += escaped.len_utf8();
                match escaped {
                    'n' => out.push('\n'),
                    'r' => out.push('\r'),
                    't' => out.push('\t'),
                    'b' => out.push('\u{08}'),
                    'f' => out.push('\u{0c}'),
                    '\\' | '(' | ')' => out.push(escaped),
                    '0'..='7' => {
                        let mut code = escaped as u32 - '0' as u32;
                        for _ in 0..2 {
                            match text.as_bytes().get(pos) {
                                Some(&d @ b'0'..=b'7') => {
                                    code = code * 8 + u32::from(d - b'0');
                                    pos += 1;
                                }
                                _ => break,
                            }
                        }
                        out.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
                    }
                    '\r' => {
                        // \<CR><LF> continues the line as a pair
                        if text.as_bytes().get(pos) == Some(&b'\n') {
                            pos += 1;
                        }
                    }
                    '\n' => {}
                    other => out.push(other),
                }
            }
            '(' => {
                depth += 1;
                out.push(ch);
            }
            ')' => {
                depth -= 1;
                if depth > 0 {
                    out.push(ch);
                }
            }
            _ => out.push(ch),
        }
    }

    (out, pos)
}

/// Decode a hexadecimal string literal `<...>`.
///
/// `open` must point at the opening `<`. Whitespace between digits is
/// ignored, an odd digit count is padded with a trailing `0`, and pairs that
/// are not two hex digits are dropped. A signed pair such as `+5` is dropped
/// too, where a lenient integer parse would read it as 0x05. Each byte maps
/// to the character with the same code point.
pub fn decode_hex_string(text: &str, open: usize) -> (String, usize) {
    let mut digits: Vec<char> = Vec::new();
    let mut pos = open + 1;

    while let Some(ch) = char_at(text, pos) {
        if ch == '>' {
            break;
        }
        if !is_whitespace(ch) {
            digits.push(ch);
        }
        pos += ch.len_utf8();
    }
    if pos < text.len() {
        pos += 1; // '>'
    }

    if digits.len() % 2 != 0 {
        digits.push('0');
    }

    let decoded = digits
        .chunks_exact(2)
        .filter_map(|pair| {
            let hi = pair[0].to_digit(16)?;
            let lo = pair[1].to_digit(16)?;
            char::from_u32(hi * 16 + lo)
        })
        .collect();

    (decoded, pos)
}
