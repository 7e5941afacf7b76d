//! Bee lexer.
//!
//! Turns source text into a sequential, position-tagged token stream ending
//! with `TokenKind::Eof`. Whitespace, `//` line comments and `/* */` block
//! comments are skipped. The first malformed token aborts lexing.

mod escape;
mod lex_error;
mod line_index;
mod raw_token;

use bee_ir::{Token, TokenKind, TokenValue};
use logos::Logos;

pub use lex_error::{LexError, LexErrorKind};

use line_index::LineIndex;
use raw_token::RawToken;

/// Lex `source` into tokens.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let index = LineIndex::new(source);
    let mut tokens = Vec::new();
    let mut logos = RawToken::lexer(source);

    while let Some(result) = logos.next() {
        let start = logos.span().start;
        let pos = index.position(start);
        let slice = logos.slice();

        let raw = match result {
            Ok(raw) => raw,
            Err(()) => {
                let c = slice.chars().next().unwrap_or('\0');
                return Err(LexError::new(LexErrorKind::UnexpectedChar(c), pos));
            }
        };

        let token = match raw {
            RawToken::LineComment => continue,
            RawToken::BlockCommentStart => {
                let Some(end) = logos.remainder().find("*/") else {
                    return Err(LexError::new(LexErrorKind::UnterminatedComment, pos));
                };
                logos.bump(end + 2);
                continue;
            }
            RawToken::DoubleQuote | RawToken::SingleQuote => {
                let quote = if raw == RawToken::DoubleQuote { '"' } else { '\'' };
                let (text, consumed) = escape::scan_string(logos.remainder(), quote)
                    .map_err(|kind| LexError::new(kind, pos))?;
                logos.bump(consumed);
                Token::with_value(TokenKind::Const, TokenValue::Str(text), pos)
            }
            RawToken::Number => {
                let value = number_value(slice).map_err(|kind| LexError::new(kind, pos))?;
                Token::with_value(TokenKind::Const, value, pos)
            }
            RawToken::Ident => {
                Token::with_value(TokenKind::Ident, TokenValue::Ident(slice.to_owned()), pos)
            }
            RawToken::True => Token::with_value(TokenKind::Const, TokenValue::Bool(true), pos),
            RawToken::False => Token::with_value(TokenKind::Const, TokenValue::Bool(false), pos),
            RawToken::None => Token::with_value(TokenKind::Const, TokenValue::None, pos),
            other => match fixed_kind(other) {
                Some(kind) => Token::new(kind, pos),
                None => {
                    let c = slice.chars().next().unwrap_or('\0');
                    return Err(LexError::new(LexErrorKind::UnexpectedChar(c), pos));
                }
            },
        };
        tokens.push(token);
    }

    tokens.push(Token::new(TokenKind::Eof, index.position(source.len())));
    Ok(tokens)
}

/// Classify a digits-and-dots run.
fn number_value(slice: &str) -> Result<TokenValue, LexErrorKind> {
    match slice.matches('.').count() {
        0 => slice
            .parse::<i64>()
            .map(TokenValue::Int)
            .map_err(|_| LexErrorKind::IntOverflow(slice.to_owned())),
        1 => slice
            .parse::<f64>()
            .map(TokenValue::Float)
            .map_err(|_| LexErrorKind::TooManyDots),
        _ => Err(LexErrorKind::TooManyDots),
    }
}

/// Kind of a payload-free raw token; `None` for tokens `lex` has to cook.
fn fixed_kind(raw: RawToken) -> Option<TokenKind> {
    let kind = match raw {
        RawToken::Add => TokenKind::Add,
        RawToken::Sub => TokenKind::Sub,
        RawToken::Mul => TokenKind::Mul,
        RawToken::Div => TokenKind::Div,
        RawToken::Mod => TokenKind::Mod,
        RawToken::Eq => TokenKind::Eq,
        RawToken::Ne => TokenKind::Ne,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Ge => TokenKind::Ge,
        RawToken::Le => TokenKind::Le,
        RawToken::Shl => TokenKind::Shl,
        RawToken::Shr => TokenKind::Shr,
        RawToken::And => TokenKind::And,
        RawToken::Or => TokenKind::Or,
        RawToken::BitAnd => TokenKind::BitAnd,
        RawToken::BitOr => TokenKind::BitOr,
        RawToken::Xor => TokenKind::Xor,
        RawToken::Not => TokenKind::Not,
        RawToken::Inv => TokenKind::Inv,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Begin => TokenKind::Begin,
        RawToken::End => TokenKind::End,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Assign => TokenKind::Assign,
        RawToken::If => TokenKind::If,
        RawToken::Else => TokenKind::Else,
        RawToken::While => TokenKind::While,
        RawToken::Var => TokenKind::Var,
        RawToken::Func => TokenKind::Func,
        RawToken::Return => TokenKind::Return,
        RawToken::Break => TokenKind::Break,
        RawToken::Continue => TokenKind::Continue,
        RawToken::LineComment
        | RawToken::BlockCommentStart
        | RawToken::True
        | RawToken::False
        | RawToken::None
        | RawToken::Number
        | RawToken::DoubleQuote
        | RawToken::SingleQuote
        | RawToken::Ident => return None,
    };
    Some(kind)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
