//! Error types for the check and execute passes.
//!
//! `EvalErrorKind` carries the structured data of each failure; `EvalError`
//! wraps a kind with the position of the node that triggered it. Factory
//! functions (`undefined_variable()`, `division_by_zero()`, ...) are the API
//! the rest of the crate uses to build errors.
//!
//! Every kind belongs to one `ErrorCategory`, which is the prefix of the
//! rendered message:
//!
//! ```text
//! NameResolutionError at line 3, column 7: undefined variable 'z'.
//! ```

use std::fmt;

use bee_ir::{Position, Signature};

use crate::types::Value;

/// Result of a check or execute step. Defaults to producing a `Value`.
pub type EvalResult<T = Value> = Result<T, EvalError>;

/// Broad classification of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// An identifier, type, function or method could not be found.
    NameResolution,
    /// Static types do not agree.
    TypeConflict,
    /// A failure while executing an already-checked tree.
    Runtime,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NameResolution => "NameResolutionError",
            Self::TypeConflict => "TypeConflictError",
            Self::Runtime => "RuntimeError",
        })
    }
}

/// Typed error data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    // Name resolution
    #[error("undefined variable '{name}'")]
    UndefinedVariable { name: String },
    #[error("undefined type '{name}'")]
    UndefinedType { name: String },
    #[error("undefined function '{signature}'")]
    UndefinedFunction { signature: String },
    #[error("type '{type_name}' has no method '{signature}'")]
    UndefinedMethod {
        type_name: String,
        signature: String,
    },
    #[error("type '{type_name}' has no attribute '{attr}'")]
    UndefinedAttribute { type_name: String, attr: String },
    #[error("method '{signature}' of type '{type_name}' is inherited from both '{first}' and '{second}'")]
    AmbiguousMethod {
        type_name: String,
        signature: String,
        first: String,
        second: String,
    },

    // Type conflicts
    #[error("conflicting return types '{first}' and '{second}'")]
    ConflictingReturnTypes { first: String, second: String },
    #[error("function '{function}' is declared to return '{declared}' but returns '{found}'")]
    ReturnTypeMismatch {
        function: String,
        declared: String,
        found: String,
    },
    #[error("'{name}' is declared as '{declared}' but initialized with '{found}'")]
    InitializerMismatch {
        name: String,
        declared: String,
        found: String,
    },
    #[error("condition must be 'Bool', found '{found}'")]
    ConditionNotBool { found: String },
    #[error("constructor of '{type_name}' must return '{type_name}', found '{found}'")]
    ConstructorReturnType { type_name: String, found: String },
    #[error("type '{type_name}' cannot inherit from builtin type '{parent}'")]
    PrimitiveParent { type_name: String, parent: String },

    // Runtime
    #[error("division by zero")]
    DivisionByZero,
    #[error("modulo by zero")]
    ModuloByZero,
    #[error("integer overflow in '{operation}'")]
    IntegerOverflow { operation: String },
    #[error("invalid shift amount {amount}")]
    InvalidShift { amount: i64 },
    #[error("cannot convert '{value}' to '{target}'")]
    InvalidConversion { value: String, target: String },
    #[error("variable '{name}' has no value")]
    UnboundValue { name: String },
    #[error("expected a '{expected}' value, found '{found}'")]
    PayloadMismatch { expected: String, found: String },
    #[error("expected {expected} arguments, got {got}")]
    ArityMismatch { expected: usize, got: usize },
    #[error("call ended without returning a '{expected}' value")]
    MissingReturn { expected: String },
}

impl EvalErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UndefinedVariable { .. }
            | Self::UndefinedType { .. }
            | Self::UndefinedFunction { .. }
            | Self::UndefinedMethod { .. }
            | Self::UndefinedAttribute { .. }
            | Self::AmbiguousMethod { .. } => ErrorCategory::NameResolution,
            Self::ConflictingReturnTypes { .. }
            | Self::ReturnTypeMismatch { .. }
            | Self::InitializerMismatch { .. }
            | Self::ConditionNotBool { .. }
            | Self::ConstructorReturnType { .. }
            | Self::PrimitiveParent { .. } => ErrorCategory::TypeConflict,
            Self::DivisionByZero
            | Self::ModuloByZero
            | Self::IntegerOverflow { .. }
            | Self::InvalidShift { .. }
            | Self::InvalidConversion { .. }
            | Self::UnboundValue { .. }
            | Self::PayloadMismatch { .. }
            | Self::ArityMismatch { .. }
            | Self::MissingReturn { .. } => ErrorCategory::Runtime,
        }
    }
}

/// An error with the position of the node that raised it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub position: Option<Position>,
}

impl EvalError {
    #[cold]
    pub fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            position: None,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    /// Attach a position.
    #[must_use]
    pub fn at(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Attach `position` unless a more specific one is already set.
    #[must_use]
    pub fn or_at(mut self, position: Option<Position>) -> Self {
        if self.position.is_none() {
            self.position = position;
        }
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(pos) => write!(f, "{} at {pos}: {}.", self.category(), self.kind),
            None => write!(f, "{}: {}.", self.category(), self.kind),
        }
    }
}

impl std::error::Error for EvalError {}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::from_kind(kind)
    }
}

// Name resolution

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn undefined_type(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedType {
        name: name.to_string(),
    })
}

#[cold]
pub fn undefined_function(signature: &Signature) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedFunction {
        signature: signature.to_string(),
    })
}

#[cold]
pub fn undefined_method(type_name: &str, signature: &Signature) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedMethod {
        type_name: type_name.to_string(),
        signature: signature.to_string(),
    })
}

#[cold]
pub fn undefined_attribute(type_name: &str, attr: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedAttribute {
        type_name: type_name.to_string(),
        attr: attr.to_string(),
    })
}

/// Two parents provide the same method from different owners.
#[cold]
pub fn ambiguous_method(
    type_name: &str,
    signature: &Signature,
    first: &str,
    second: &str,
) -> EvalError {
    EvalError::from_kind(EvalErrorKind::AmbiguousMethod {
        type_name: type_name.to_string(),
        signature: signature.to_string(),
        first: first.to_string(),
        second: second.to_string(),
    })
}

// Type conflicts

#[cold]
pub fn conflicting_return_types(first: &str, second: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ConflictingReturnTypes {
        first: first.to_string(),
        second: second.to_string(),
    })
}

#[cold]
pub fn return_type_mismatch(function: &str, declared: &str, found: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ReturnTypeMismatch {
        function: function.to_string(),
        declared: declared.to_string(),
        found: found.to_string(),
    })
}

#[cold]
pub fn initializer_mismatch(name: &str, declared: &str, found: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InitializerMismatch {
        name: name.to_string(),
        declared: declared.to_string(),
        found: found.to_string(),
    })
}

#[cold]
pub fn condition_not_bool(found: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ConditionNotBool {
        found: found.to_string(),
    })
}

#[cold]
pub fn constructor_return_type(type_name: &str, found: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ConstructorReturnType {
        type_name: type_name.to_string(),
        found: found.to_string(),
    })
}

#[cold]
pub fn primitive_parent(type_name: &str, parent: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::PrimitiveParent {
        type_name: type_name.to_string(),
        parent: parent.to_string(),
    })
}

// Runtime

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuloByZero)
}

#[cold]
pub fn integer_overflow(operation: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        operation: operation.to_string(),
    })
}

#[cold]
pub fn invalid_shift(amount: i64) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidShift { amount })
}

#[cold]
pub fn invalid_conversion(value: &str, target: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidConversion {
        value: value.to_string(),
        target: target.to_string(),
    })
}

/// A binding that only holds a static type was read at run time.
#[cold]
pub fn unbound_value(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundValue {
        name: name.to_string(),
    })
}

#[cold]
pub fn payload_mismatch(expected: &str, found: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::PayloadMismatch {
        expected: expected.to_string(),
        found: found.to_string(),
    })
}

#[cold]
pub fn arity_mismatch(expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch { expected, got })
}

#[cold]
pub fn missing_return(expected: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MissingReturn {
        expected: expected.to_string(),
    })
}
