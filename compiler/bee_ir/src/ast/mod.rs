//! AST nodes consumed by the evaluator.
//!
//! Statements and expressions are position-tagged wrappers around a kind
//! enum. Function bodies are reference-counted so that closures created at
//! run time can share them with the tree.
//!
//! The constructor helpers (`Expr::int`, `Stmt::var`, ...) exist for parsers
//! and tests; they create nodes without a position unless `at` is chained.

mod operators;

use std::rc::Rc;

pub use operators::{BinaryOp, UnaryOp};

use crate::Position;

/// Literal constants.
#[derive(Clone, PartialEq, Debug)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    None,
}

/// An expression node.
#[derive(Clone, PartialEq, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub pos: Option<Position>,
}

/// Expression variants.
#[derive(Clone, PartialEq, Debug)]
pub enum ExprKind {
    Literal(Literal),
    /// Variable reference.
    Variable(String),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    /// Free function call, or constructor call when `callee` names a type.
    Call {
        callee: String,
        args: Vec<Expr>,
    },
    /// `receiver.method(args)`.
    MethodCall {
        receiver: Box<Expr>,
        method: String,
        args: Vec<Expr>,
    },
    /// `object.attr`.
    Attribute {
        object: Box<Expr>,
        attr: String,
    },
}

impl Expr {
    pub fn new(kind: ExprKind) -> Self {
        Expr { kind, pos: None }
    }

    /// Attach a source position.
    #[must_use]
    pub fn at(mut self, pos: Position) -> Self {
        self.pos = Some(pos);
        self
    }

    pub fn int(value: i64) -> Self {
        Self::new(ExprKind::Literal(Literal::Int(value)))
    }

    pub fn float(value: f64) -> Self {
        Self::new(ExprKind::Literal(Literal::Float(value)))
    }

    pub fn bool(value: bool) -> Self {
        Self::new(ExprKind::Literal(Literal::Bool(value)))
    }

    pub fn str(value: impl Into<String>) -> Self {
        Self::new(ExprKind::Literal(Literal::Str(value.into())))
    }

    pub fn none() -> Self {
        Self::new(ExprKind::Literal(Literal::None))
    }

    pub fn var(name: impl Into<String>) -> Self {
        Self::new(ExprKind::Variable(name.into()))
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Self::new(ExprKind::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Self::new(ExprKind::Unary {
            op,
            operand: Box::new(operand),
        })
    }

    pub fn call(callee: impl Into<String>, args: Vec<Expr>) -> Self {
        Self::new(ExprKind::Call {
            callee: callee.into(),
            args,
        })
    }

    pub fn method_call(receiver: Expr, method: impl Into<String>, args: Vec<Expr>) -> Self {
        Self::new(ExprKind::MethodCall {
            receiver: Box::new(receiver),
            method: method.into(),
            args,
        })
    }

    pub fn attr(object: Expr, attr: impl Into<String>) -> Self {
        Self::new(ExprKind::Attribute {
            object: Box::new(object),
            attr: attr.into(),
        })
    }
}

/// A sequence of statements.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Block {
    pub stmts: Vec<Stmt>,
}

impl Block {
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Block { stmts }
    }
}

impl From<Vec<Stmt>> for Block {
    fn from(stmts: Vec<Stmt>) -> Self {
        Block { stmts }
    }
}

/// A statement node.
#[derive(Clone, PartialEq, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub pos: Option<Position>,
}

/// Statement variants.
#[derive(Clone, PartialEq, Debug)]
pub enum StmtKind {
    /// Expression evaluated for its side effects.
    Expr(Expr),
    VarDecl(VarDecl),
    FuncDef(FuncDef),
    TypeDef(TypeDef),
    If(IfStmt),
    While {
        cond: Expr,
        body: Block,
    },
    Return(Option<Expr>),
    Break,
    Continue,
}

/// `var name: Type [= init];`
#[derive(Clone, PartialEq, Debug)]
pub struct VarDecl {
    pub name: String,
    pub ty: String,
    pub init: Option<Expr>,
}

/// A typed parameter.
#[derive(Clone, PartialEq, Debug)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Param {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// `func name(params): ret { body }`.
///
/// Inside a type definition the same node describes a method; the receiver
/// is implicit and bound as `this`.
#[derive(Clone, PartialEq, Debug)]
pub struct FuncDef {
    pub name: String,
    pub params: Vec<Param>,
    /// Declared return type; `None` means the function returns nothing.
    pub ret: Option<String>,
    pub body: Rc<Block>,
    pub pos: Option<Position>,
}

impl FuncDef {
    pub fn new(
        name: impl Into<String>,
        params: Vec<Param>,
        ret: Option<&str>,
        body: Vec<Stmt>,
    ) -> Self {
        FuncDef {
            name: name.into(),
            params,
            ret: ret.map(str::to_owned),
            body: Rc::new(Block::new(body)),
            pos: None,
        }
    }

    /// Attach a source position.
    #[must_use]
    pub fn at(mut self, pos: Position) -> Self {
        self.pos = Some(pos);
        self
    }
}

/// A nominal type: parents, attributes with defaults, and methods.
#[derive(Clone, PartialEq, Debug)]
pub struct TypeDef {
    pub name: String,
    /// Parent types, in declaration order.
    pub parents: Vec<String>,
    pub attrs: Vec<VarDecl>,
    pub methods: Vec<FuncDef>,
}

/// One `if`/`else if` arm.
#[derive(Clone, PartialEq, Debug)]
pub struct IfBranch {
    pub cond: Expr,
    pub body: Block,
}

/// `if (c1) {..} else if (c2) {..} else {..}`.
#[derive(Clone, PartialEq, Debug)]
pub struct IfStmt {
    pub branches: Vec<IfBranch>,
    /// The `else` body; a missing `else` behaves like an empty one.
    pub default: Option<Block>,
}

impl Stmt {
    pub fn new(kind: StmtKind) -> Self {
        Stmt { kind, pos: None }
    }

    /// Attach a source position.
    #[must_use]
    pub fn at(mut self, pos: Position) -> Self {
        self.pos = Some(pos);
        self
    }

    pub fn expr(expr: Expr) -> Self {
        Self::new(StmtKind::Expr(expr))
    }

    pub fn var(name: impl Into<String>, ty: impl Into<String>, init: Option<Expr>) -> Self {
        Self::new(StmtKind::VarDecl(VarDecl {
            name: name.into(),
            ty: ty.into(),
            init,
        }))
    }

    pub fn func(def: FuncDef) -> Self {
        let pos = def.pos;
        Stmt {
            kind: StmtKind::FuncDef(def),
            pos,
        }
    }

    pub fn type_def(def: TypeDef) -> Self {
        Self::new(StmtKind::TypeDef(def))
    }

    pub fn if_else(branches: Vec<(Expr, Vec<Stmt>)>, default: Option<Vec<Stmt>>) -> Self {
        Self::new(StmtKind::If(IfStmt {
            branches: branches
                .into_iter()
                .map(|(cond, body)| IfBranch {
                    cond,
                    body: Block::new(body),
                })
                .collect(),
            default: default.map(Block::new),
        }))
    }

    pub fn while_loop(cond: Expr, body: Vec<Stmt>) -> Self {
        Self::new(StmtKind::While {
            cond,
            body: Block::new(body),
        })
    }

    pub fn ret(value: Option<Expr>) -> Self {
        Self::new(StmtKind::Return(value))
    }

    pub fn brk() -> Self {
        Self::new(StmtKind::Break)
    }

    pub fn cont() -> Self {
        Self::new(StmtKind::Continue)
    }
}
