//! Callable table entries: a return type plus either a native function or a
//! closure.

use std::fmt;
use std::rc::Rc;

use crate::environment::Environment;
use crate::errors::{missing_return, EvalResult};
use crate::func::Func;
use crate::types::{BasicType, Value};

/// Host function backing a builtin.
///
/// Receives the caller's environment (for constructing result values) and the
/// evaluated arguments, receiver first for methods.
pub type NativeFn = Rc<dyn Fn(&Environment, &[Value]) -> EvalResult<Value>>;

#[derive(Clone)]
pub enum Callable {
    Native(NativeFn),
    Closure(Func),
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callable::Native(_) => f.write_str("Native(..)"),
            Callable::Closure(func) => f.debug_tuple("Closure").field(func).finish(),
        }
    }
}

/// One entry of a function or method table.
#[derive(Clone, Debug)]
pub struct Overload {
    /// Declared return type.
    pub ret: BasicType,
    pub callable: Callable,
}

impl Overload {
    pub fn new(ret: BasicType, callable: Callable) -> Self {
        Overload { ret, callable }
    }

    /// A builtin returning `ret`.
    pub fn native(
        ret: &str,
        f: impl Fn(&Environment, &[Value]) -> EvalResult<Value> + 'static,
    ) -> Self {
        Overload {
            ret: BasicType::new(ret),
            callable: Callable::Native(Rc::new(f)),
        }
    }

    pub fn closure(ret: BasicType, func: Func) -> Self {
        Overload {
            ret,
            callable: Callable::Closure(func),
        }
    }

    /// Call with already evaluated arguments.
    ///
    /// A closure that finishes without returning a value yields `None` when
    /// declared to return `None`, and fails otherwise.
    pub fn invoke(&self, env: &Environment, args: Vec<Value>) -> EvalResult<Value> {
        match &self.callable {
            Callable::Native(f) => f(env, &args),
            Callable::Closure(func) => match func.invoke(args)? {
                Some(value) => Ok(value),
                None if self.ret == BasicType::none() => Value::none(env),
                None => Err(missing_return(self.ret.name())),
            },
        }
    }
}
