//! Bee IR - shared data types for the Bee language.
//!
//! This crate contains the data structures exchanged between the Bee phases:
//! - `Position` for source locations (1-based line/column)
//! - `Token` and `TokenKind` for lexer output
//! - AST nodes (`Stmt`, `Expr`, `Block`, ...) consumed by the evaluator
//! - `Signature`, the structured overload key used for every callable lookup
//!
//! Identifiers and type references are plain name strings. Nothing here is
//! pre-resolved: names are looked up in the evaluator's environment during
//! the check and execute passes.

pub mod ast;
mod position;
mod signature;
mod token;

pub use ast::{
    BinaryOp, Block, Expr, ExprKind, FuncDef, IfBranch, IfStmt, Literal, Param, Stmt, StmtKind,
    TypeDef, UnaryOp, VarDecl,
};
pub use position::Position;
pub use signature::{Signature, CONSTRUCTOR, RECEIVER_MARKER};
pub use token::{Token, TokenKind, TokenValue};
