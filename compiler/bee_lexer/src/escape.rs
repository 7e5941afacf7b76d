//! String literal scanning and escape processing.
//!
//! Recognized escapes: `\r \t \a \f \v \b \n \" \' \\`, plus `\xHH` and
//! `\uHHHH` with exactly two and four hex digits.

use crate::LexErrorKind;

/// Resolve a single-character escape to its replacement.
#[inline]
pub(crate) fn resolve_escape(c: char) -> Option<char> {
    match c {
        'r' => Some('\r'),
        't' => Some('\t'),
        'a' => Some('\u{07}'),
        'f' => Some('\u{0C}'),
        'v' => Some('\u{0B}'),
        'b' => Some('\u{08}'),
        'n' => Some('\n'),
        '"' => Some('"'),
        '\'' => Some('\''),
        '\\' => Some('\\'),
        _ => None,
    }
}

/// Scan a string body up to the closing `quote`.
///
/// `rest` starts right after the opening quote. Returns the unescaped text
/// and the number of bytes consumed, closing quote included.
pub(crate) fn scan_string(rest: &str, quote: char) -> Result<(String, usize), LexErrorKind> {
    let mut text = String::new();
    let mut chars = rest.char_indices();

    while let Some((offset, c)) = chars.next() {
        if c == quote {
            return Ok((text, offset + c.len_utf8()));
        }
        if c != '\\' {
            text.push(c);
            continue;
        }
        let Some((_, esc)) = chars.next() else {
            return Err(LexErrorKind::UnterminatedString);
        };
        if let Some(resolved) = resolve_escape(esc) {
            text.push(resolved);
            continue;
        }
        let digits = match esc {
            'x' => 2,
            'u' => 4,
            _ => return Err(LexErrorKind::InvalidEscape),
        };
        let mut code = 0u32;
        for _ in 0..digits {
            let Some((_, digit)) = chars.next() else {
                return Err(LexErrorKind::UnterminatedString);
            };
            let value = digit.to_digit(16).ok_or(LexErrorKind::InvalidEscape)?;
            code = code * 16 + value;
        }
        text.push(char::from_u32(code).ok_or(LexErrorKind::InvalidEscape)?);
    }

    Err(LexErrorKind::UnterminatedString)
}
