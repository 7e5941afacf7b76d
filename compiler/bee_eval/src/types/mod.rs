//! Nominal type model.
//!
//! - `BasicType`: a type reference by name, as seen by the check pass
//! - `TypeDetail`: the descriptor behind a name (parents, attributes, methods)
//! - `Value`: a runtime value tagged with its owning descriptor
//!
//! Types are compared by name only. A `BasicType` becomes a `TypeDetail` by
//! looking the name up in the active environment.

mod detail;
mod value;

use std::fmt;
use std::rc::Rc;

pub use detail::{Attribute, MethodEntry, TypeDetail};
pub use value::{Payload, Value};

use crate::environment::Environment;
use crate::errors::EvalResult;

/// Names of the builtin types.
pub mod names {
    pub const INT: &str = "Int";
    pub const FLOAT: &str = "Float";
    pub const BOOL: &str = "Bool";
    pub const STRING: &str = "String";
    pub const NONE: &str = "None";
}

/// A type reference by name.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct BasicType {
    name: Rc<str>,
}

impl BasicType {
    pub fn new(name: &str) -> Self {
        BasicType { name: name.into() }
    }

    pub fn int() -> Self {
        Self::new(names::INT)
    }

    pub fn float() -> Self {
        Self::new(names::FLOAT)
    }

    pub fn bool() -> Self {
        Self::new(names::BOOL)
    }

    pub fn string() -> Self {
        Self::new(names::STRING)
    }

    pub fn none() -> Self {
        Self::new(names::NONE)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up the descriptor this name refers to in `env`.
    pub fn resolve(&self, env: &Environment) -> EvalResult<Rc<TypeDetail>> {
        env.find_type(&self.name)
    }
}

impl fmt::Display for BasicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
