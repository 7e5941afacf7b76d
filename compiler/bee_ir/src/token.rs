//! Lexer output: position-tagged tokens.

use std::fmt;

use crate::Position;

/// Token kinds produced by the lexer.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    Eof,

    // Operators
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    Ne,
    Gt,
    Lt,
    Ge,
    Le,
    Shl,
    Shr,
    And,
    Or,
    BitAnd,
    BitOr,
    Xor,
    Not,
    Inv,

    // Other symbols
    LParen,
    RParen,
    LBracket,
    RBracket,
    Begin,
    End,
    Comma,
    Colon,
    Dot,
    Semicolon,
    Assign,

    // Keywords
    If,
    Else,
    While,
    Var,
    Func,
    Return,
    Break,
    Continue,

    /// Identifier; the name is carried in `Token::value`.
    Ident,
    /// Literal constant; the value is carried in `Token::value`.
    Const,
}

impl TokenKind {
    /// Returns the source text for fixed-spelling tokens.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eof => "<eof>",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Ge => ">=",
            Self::Le => "<=",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::And => "&&",
            Self::Or => "||",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::Xor => "^",
            Self::Not => "!",
            Self::Inv => "~",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Begin => "{",
            Self::End => "}",
            Self::Comma => ",",
            Self::Colon => ":",
            Self::Dot => ".",
            Self::Semicolon => ";",
            Self::Assign => "=",
            Self::If => "if",
            Self::Else => "else",
            Self::While => "while",
            Self::Var => "var",
            Self::Func => "func",
            Self::Return => "return",
            Self::Break => "break",
            Self::Continue => "continue",
            Self::Ident => "<identifier>",
            Self::Const => "<constant>",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of `Ident` and `Const` tokens.
#[derive(Clone, PartialEq, Debug)]
pub enum TokenValue {
    Ident(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    None,
}

/// A single token with its source position.
#[derive(Clone, PartialEq, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<TokenValue>,
    pub pos: Position,
}

impl Token {
    /// A token without payload.
    pub fn new(kind: TokenKind, pos: Position) -> Self {
        Token {
            kind,
            value: None,
            pos,
        }
    }

    /// A token carrying an identifier or constant payload.
    pub fn with_value(kind: TokenKind, value: TokenValue, pos: Position) -> Self {
        Token {
            kind,
            value: Some(value),
            pos,
        }
    }
}
