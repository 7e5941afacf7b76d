//! User-defined closures.

use std::fmt;
use std::rc::Rc;

use bee_ir::{Block, FuncDef, RECEIVER_MARKER};

use crate::environment::{Binding, Environment};
use crate::errors::{arity_mismatch, EvalResult};
use crate::exec::Execute;
use crate::signal::Flow;
use crate::stack::ensure_sufficient_stack;
use crate::types::Value;

/// Parameter names, a shared body, and the environment the function was
/// defined in.
///
/// The captured environment is a live handle: declarations made in it after
/// the definition are visible to later calls.
#[derive(Clone)]
pub struct Func {
    params: Vec<String>,
    body: Rc<Block>,
    env: Environment,
}

impl Func {
    pub fn new(params: Vec<String>, body: Rc<Block>, env: Environment) -> Self {
        Func { params, body, env }
    }

    /// Closure for a free function.
    pub fn from_def(def: &FuncDef, env: &Environment) -> Self {
        let params = def.params.iter().map(|p| p.name.clone()).collect();
        Func::new(params, Rc::clone(&def.body), env.clone())
    }

    /// Closure for a method; the receiver is bound as `this`.
    pub fn method(def: &FuncDef, env: &Environment) -> Self {
        let params = std::iter::once(RECEIVER_MARKER.to_string())
            .chain(def.params.iter().map(|p| p.name.clone()))
            .collect();
        Func::new(params, Rc::clone(&def.body), env.clone())
    }

    /// Run the body in a fresh child of the captured environment.
    ///
    /// Returns the value of a `return`; any other way of leaving the body,
    /// including a stray `break` or `continue`, yields nothing.
    #[tracing::instrument(level = "trace", skip_all, fields(arity = args.len()))]
    pub fn invoke(&self, args: Vec<Value>) -> EvalResult<Option<Value>> {
        if args.len() != self.params.len() {
            return Err(arity_mismatch(self.params.len(), args.len()));
        }
        let scope = self.env.child();
        for (name, arg) in self.params.iter().zip(args) {
            scope.declare_variable(name.as_str(), Binding::Value(arg));
        }
        let flow = ensure_sufficient_stack(|| self.body.execute(&scope))?;
        Ok(match flow {
            Flow::Return(value) => value,
            Flow::Normal | Flow::Break | Flow::Continue => None,
        })
    }
}

impl fmt::Debug for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Func")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}
