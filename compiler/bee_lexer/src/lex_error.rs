//! Lexer error types.

use bee_ir::Position;

/// What went wrong while tokenizing.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
    #[error("too many dots in a number")]
    TooManyDots,
    #[error("integer literal '{0}' does not fit in 64 bits")]
    IntOverflow(String),
    #[error("unexpected EOF in a string")]
    UnterminatedString,
    #[error("unexpected EOF in a long comment")]
    UnterminatedComment,
    #[error("wrong escape sequence")]
    InvalidEscape,
}

/// A lexer error located at the start of the offending token.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("LexError at {pos}: {kind}.")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub pos: Position,
}

impl LexError {
    pub fn new(kind: LexErrorKind, pos: Position) -> Self {
        LexError { kind, pos }
    }
}
