//! Numeric token classification.
//!
//! A bare token that reads as a PostScript number is an operand, so it must
//! not clear the pending string operands the way an unknown operator does.

/// Returns true if `token` is a PostScript number.
///
/// Accepts radix numbers (`16#FF`, `2#1010`) and signed decimal or
/// scientific notation (`-2`, `.5`, `1.5E-3`, `3.0e+2`).
pub fn is_numeric(token: &str) -> bool {
    let bytes = token.as_bytes();
    if bytes.is_empty() {
        return false;
    }

    // base#digits
    if let Some(hash) = token.find('#') {
        if hash > 0 && hash < bytes.len() - 1 {
            return bytes[..hash].iter().all(u8::is_ascii_digit)
                && bytes[hash + 1..].iter().all(u8::is_ascii_alphanumeric);
        }
    }

    let mut i = 0;
    if matches!(bytes[0], b'+' | b'-') {
        if bytes.len() == 1 {
            return false;
        }
        i = 1;
    }

    let mut has_dot = false;
    let mut has_exponent = false;
    while i < bytes.len() {
        match bytes[i] {
            b'.' => {
                if has_dot || has_exponent {
                    return false;
                }
                has_dot = true;
            }
            b'e' | b'E' => {
                if has_exponent || i == 0 || i == bytes.len() - 1 {
                    return false;
                }
                has_exponent = true;
                if matches!(bytes[i + 1], b'+' | b'-') {
                    i += 1;
                    if i == bytes.len() - 1 {
                        return false;
                    }
                }
            }
            b if b.is_ascii_digit() => {}
            _ => return false,
        }
        i += 1;
    }
    true
}
