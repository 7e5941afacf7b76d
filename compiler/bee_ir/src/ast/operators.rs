//! Binary and unary operators.
//!
//! Operators carry no semantics of their own. Each one names a callable
//! (`operator+`, `operator~`, ...) that the evaluator resolves through the
//! same signature lookup as ordinary functions.

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,

    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Logical
    And,
    Or,

    // Bitwise
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::And => "&&",
            Self::Or => "||",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::Shl => "<<",
            Self::Shr => ">>",
        }
    }

    /// Name of the callable implementing this operator, e.g. `operator+`.
    pub fn callable_name(self) -> String {
        format!("operator{}", self.as_symbol())
    }

    /// Binding strength used by the parser; higher binds tighter.
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Mul | Self::Div | Self::Mod => 100,
            Self::Add | Self::Sub => 99,
            Self::Shl | Self::Shr => 98,
            Self::Eq | Self::NotEq => 97,
            Self::Lt | Self::LtEq | Self::Gt | Self::GtEq => 96,
            Self::BitAnd => 95,
            Self::BitXor => 94,
            Self::BitOr => 93,
            Self::And => 92,
            Self::Or => 91,
        }
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Pos,
    Neg,
    Not,
    Inv,
}

impl UnaryOp {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Pos => "+",
            Self::Neg => "-",
            Self::Not => "!",
            Self::Inv => "~",
        }
    }

    /// Name of the callable implementing this operator, e.g. `operator-`.
    pub fn callable_name(self) -> String {
        format!("operator{}", self.as_symbol())
    }
}
