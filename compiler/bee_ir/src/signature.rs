//! Structured overload keys.
//!
//! Every callable lookup (free functions, operators, methods, constructors)
//! goes through a `Signature`: a name, an optional receiver, and the ordered
//! parameter type names. Overloads are distinguished purely by these names;
//! two signatures are equal only if every component matches exactly.
//!
//! The `Display` form is the mangled key used in diagnostics:
//!
//! ```text
//! print Int             free function
//! operator+ Int Int     free operator function
//! operator+ this Int    operator method, left operand is the receiver
//! operator- this        unary operator method
//! init this             zero-argument constructor
//! ```

use std::fmt;

use crate::{BinaryOp, UnaryOp};

/// Literal marker standing for the receiver in a mangled key.
pub const RECEIVER_MARKER: &str = "this";

/// Name of constructor methods.
pub const CONSTRUCTOR: &str = "init";

/// Overload key: name, receiver flag and parameter type names.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Signature {
    name: String,
    receiver: bool,
    params: Vec<String>,
}

impl Signature {
    /// A free function taking `params`.
    pub fn function<I, S>(name: impl Into<String>, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Signature {
            name: name.into(),
            receiver: false,
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    /// A method on some receiver taking `params` after the receiver.
    pub fn method<I, S>(name: impl Into<String>, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Signature {
            name: name.into(),
            receiver: true,
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    /// Constructor method taking `params`; `init this` when empty.
    pub fn constructor<I, S>(params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::method(CONSTRUCTOR, params)
    }

    /// The zero-argument constructor `init this`.
    pub fn default_constructor() -> Self {
        Self::method(CONSTRUCTOR, Vec::<String>::new())
    }

    /// `operator<op> this <right>`.
    pub fn binary_method(op: BinaryOp, right: &str) -> Self {
        Self::method(op.callable_name(), [right])
    }

    /// `operator<op> <left> <right>`.
    pub fn binary_function(op: BinaryOp, left: &str, right: &str) -> Self {
        Self::function(op.callable_name(), [left, right])
    }

    /// `operator<op> this`.
    pub fn unary_method(op: UnaryOp) -> Self {
        Self::method(op.callable_name(), Vec::<String>::new())
    }

    /// `operator<op> <operand>`.
    pub fn unary_function(op: UnaryOp, operand: &str) -> Self {
        Self::function(op.callable_name(), [operand])
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if self.receiver {
            write!(f, " {RECEIVER_MARKER}")?;
        }
        for param in &self.params {
            write!(f, " {param}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
