//! Raw tokens recognized by logos.
//!
//! Strings and block comments only have their opening delimiter matched
//! here; `lex` scans their bodies by hand so that escapes and unterminated
//! input produce precise errors.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
pub(crate) enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,
    #[token("/*")]
    BlockCommentStart,

    // Operators
    #[token("+")]
    Add,
    #[token("-")]
    Sub,
    #[token("*")]
    Mul,
    #[token("/")]
    Div,
    #[token("%")]
    Mod,
    #[token("==")]
    Eq,
    #[token("!=")]
    Ne,
    #[token(">")]
    Gt,
    #[token("<")]
    Lt,
    #[token(">=")]
    Ge,
    #[token("<=")]
    Le,
    #[token("<<")]
    Shl,
    #[token(">>")]
    Shr,
    #[token("&&")]
    And,
    #[token("||")]
    Or,
    #[token("&")]
    BitAnd,
    #[token("|")]
    BitOr,
    #[token("^")]
    Xor,
    #[token("!")]
    Not,
    #[token("~")]
    Inv,

    // Other symbols
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    Begin,
    #[token("}")]
    End,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token(";")]
    Semicolon,
    #[token("=")]
    Assign,

    // Keywords
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("var")]
    Var,
    #[token("func")]
    Func,
    #[token("return")]
    Return,
    #[token("break")]
    Break,
    #[token("continue")]
    Continue,

    // Constants
    #[token("True")]
    True,
    #[token("False")]
    False,
    #[token("None")]
    None,

    /// Digits and dots; the dot count decides between int, float and error.
    #[regex(r"[0-9][0-9.]*")]
    Number,
    #[token("\"")]
    DoubleQuote,
    #[token("'")]
    SingleQuote,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}
