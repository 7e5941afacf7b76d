//! Runtime values.

use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use super::{names, BasicType, TypeDetail};
use crate::environment::Environment;
use crate::errors::{payload_mismatch, EvalResult};

/// Type-specific payload of a value.
///
/// Generic code never inspects the payload; it dispatches through the
/// methods of the owning `TypeDetail`. Only the builtin natives look inside.
#[derive(Clone, PartialEq, Debug)]
pub enum Payload {
    None,
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(Rc<str>),
    /// Attribute map of a user-defined type.
    Object(FxHashMap<String, Value>),
}

/// A value tagged with the descriptor of its type.
#[derive(Clone)]
pub struct Value {
    ty: Rc<TypeDetail>,
    payload: Payload,
}

impl Value {
    pub fn new(ty: Rc<TypeDetail>, payload: Payload) -> Self {
        Value { ty, payload }
    }

    /// An `Int` value, typed through the `Int` descriptor visible in `env`.
    pub fn int(env: &Environment, value: i64) -> EvalResult<Self> {
        Ok(Value::new(env.find_type(names::INT)?, Payload::Int(value)))
    }

    pub fn float(env: &Environment, value: f64) -> EvalResult<Self> {
        Ok(Value::new(env.find_type(names::FLOAT)?, Payload::Float(value)))
    }

    pub fn bool(env: &Environment, value: bool) -> EvalResult<Self> {
        Ok(Value::new(env.find_type(names::BOOL)?, Payload::Bool(value)))
    }

    pub fn string(env: &Environment, value: impl Into<Rc<str>>) -> EvalResult<Self> {
        Ok(Value::new(
            env.find_type(names::STRING)?,
            Payload::Str(value.into()),
        ))
    }

    pub fn none(env: &Environment) -> EvalResult<Self> {
        Ok(Value::new(env.find_type(names::NONE)?, Payload::None))
    }

    pub fn detail(&self) -> &Rc<TypeDetail> {
        &self.ty
    }

    /// Re-tag the value with an ancestor of its type, keeping the payload.
    ///
    /// An inherited method sees its receiver as the declaring type, the same
    /// type `this` had when the method body was checked.
    pub fn view_as(&mut self, ancestor: &Rc<TypeDetail>) {
        if !Rc::ptr_eq(&self.ty, ancestor) {
            self.ty = Rc::clone(ancestor);
        }
    }

    pub fn type_name(&self) -> &str {
        self.ty.name()
    }

    pub fn basic_type(&self) -> BasicType {
        self.ty.basic_type()
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn as_int(&self) -> EvalResult<i64> {
        match self.payload {
            Payload::Int(n) => Ok(n),
            _ => Err(payload_mismatch(names::INT, self.type_name())),
        }
    }

    pub fn as_float(&self) -> EvalResult<f64> {
        match self.payload {
            Payload::Float(x) => Ok(x),
            _ => Err(payload_mismatch(names::FLOAT, self.type_name())),
        }
    }

    pub fn as_bool(&self) -> EvalResult<bool> {
        match self.payload {
            Payload::Bool(b) => Ok(b),
            _ => Err(payload_mismatch(names::BOOL, self.type_name())),
        }
    }

    pub fn as_str(&self) -> EvalResult<&str> {
        match &self.payload {
            Payload::Str(s) => Ok(s),
            _ => Err(payload_mismatch(names::STRING, self.type_name())),
        }
    }

    /// Read an attribute of a user-defined value.
    pub fn attr(&self, name: &str) -> Option<&Value> {
        match &self.payload {
            Payload::Object(attrs) => attrs.get(name),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.type_name() == other.type_name() && self.payload == other.payload
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value")
            .field("ty", &self.type_name())
            .field("payload", &self.payload)
            .finish()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.payload {
            Payload::None => f.write_str("None"),
            Payload::Int(n) => write!(f, "{n}"),
            Payload::Float(x) => fmt_float(*x, f),
            Payload::Bool(true) => f.write_str("True"),
            Payload::Bool(false) => f.write_str("False"),
            Payload::Str(s) => f.write_str(s),
            Payload::Object(_) => write!(f, "<{} object>", self.type_name()),
        }
    }
}

/// Integral floats keep a trailing `.0` so they stay distinguishable from ints.
fn fmt_float(x: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e16 {
        write!(f, "{x:.1}")
    } else {
        write!(f, "{x}")
    }
}
