//! Overload resolution shared by the check and execute passes.
//!
//! Operators, free functions, constructors and methods all resolve to a
//! `Signature` lookup. For operators the left operand's type is consulted
//! first (`operator+ this Int`), then the environment's free functions
//! (`operator+ Int Int`).
//!
//! An inherited method receives its receiver re-tagged as the declaring
//! ancestor, so values keep the static type the check pass gave them.

use std::rc::Rc;

use bee_ir::{BinaryOp, Signature, UnaryOp};

use crate::callable::Overload;
use crate::environment::Environment;
use crate::errors::{undefined_method, EvalResult};
use crate::types::{BasicType, MethodEntry, TypeDetail, Value};

/// A resolved callable together with the key it was found under.
#[derive(Clone, Debug)]
pub struct Resolved {
    pub signature: Signature,
    pub overload: Overload,
    /// Ancestor the receiver is viewed as when the method is inherited.
    pub receiver_view: Option<Rc<TypeDetail>>,
}

impl Resolved {
    fn function(signature: Signature, overload: Overload) -> Self {
        Resolved {
            signature,
            overload,
            receiver_view: None,
        }
    }

    fn method(signature: Signature, entry: MethodEntry) -> Self {
        Resolved {
            signature,
            overload: entry.overload,
            receiver_view: entry.inherited_from,
        }
    }

    pub fn ret(&self) -> BasicType {
        self.overload.ret.clone()
    }

    #[tracing::instrument(
        level = "trace",
        skip(self, env, args),
        fields(signature = %self.signature)
    )]
    pub fn invoke(&self, env: &Environment, mut args: Vec<Value>) -> EvalResult<Value> {
        if let (Some(ancestor), Some(receiver)) = (&self.receiver_view, args.first_mut()) {
            receiver.view_as(ancestor);
        }
        self.overload.invoke(env, args)
    }
}

/// Resolve `left <op> right`.
pub fn resolve_binary(
    env: &Environment,
    op: BinaryOp,
    left: &TypeDetail,
    right: &BasicType,
) -> EvalResult<Resolved> {
    let method = Signature::binary_method(op, right.name());
    if let Some(entry) = left.find_method(&method)? {
        tracing::trace!(signature = %method, "operator method");
        return Ok(Resolved::method(method, entry));
    }
    let function = Signature::binary_function(op, left.name(), right.name());
    let overload = env.find_function(&function)?;
    tracing::trace!(signature = %function, "operator function");
    Ok(Resolved::function(function, overload))
}

/// Resolve `<op> operand`.
pub fn resolve_unary(env: &Environment, op: UnaryOp, operand: &TypeDetail) -> EvalResult<Resolved> {
    let method = Signature::unary_method(op);
    if let Some(entry) = operand.find_method(&method)? {
        return Ok(Resolved::method(method, entry));
    }
    let function = Signature::unary_function(op, operand.name());
    let overload = env.find_function(&function)?;
    Ok(Resolved::function(function, overload))
}

/// Resolve `receiver.method(args)`.
pub fn resolve_method(
    receiver: &TypeDetail,
    method: &str,
    args: &[BasicType],
) -> EvalResult<Resolved> {
    let signature = Signature::method(method, args.iter().map(BasicType::name));
    match receiver.find_method(&signature)? {
        Some(entry) => Ok(Resolved::method(signature, entry)),
        None => Err(undefined_method(receiver.name(), &signature)),
    }
}

/// What a plain call `name(args)` refers to.
#[derive(Debug)]
pub enum CallTarget {
    Function(Resolved),
    /// `T()`: default instance of a visible type.
    Construct(Rc<TypeDetail>),
    /// `T(args)`: the type's own `init this <args>` on a blank instance.
    ConstructWith(Rc<TypeDetail>, Resolved),
}

impl CallTarget {
    pub fn ret(&self) -> BasicType {
        match self {
            CallTarget::Function(resolved) | CallTarget::ConstructWith(_, resolved) => {
                resolved.ret()
            }
            CallTarget::Construct(detail) => detail.basic_type(),
        }
    }

    pub fn invoke(&self, env: &Environment, args: Vec<Value>) -> EvalResult<Value> {
        match self {
            CallTarget::Function(resolved) => resolved.invoke(env, args),
            CallTarget::Construct(detail) => detail.instantiate(env),
            CallTarget::ConstructWith(detail, init) => {
                let mut full = Vec::with_capacity(args.len() + 1);
                full.push(detail.blank());
                full.extend(args);
                init.invoke(env, full)
            }
        }
    }
}

/// Resolve `name(args)`.
///
/// A name that refers to a visible type makes the call a constructor call.
/// Constructors are looked up in the type's own table only.
pub fn resolve_call(env: &Environment, callee: &str, args: &[BasicType]) -> EvalResult<CallTarget> {
    if let Some(detail) = env.lookup_type(callee) {
        if args.is_empty() {
            return Ok(CallTarget::Construct(detail));
        }
        let signature = Signature::constructor(args.iter().map(BasicType::name));
        let Some(overload) = detail.own_method(&signature).cloned() else {
            return Err(undefined_method(detail.name(), &signature));
        };
        return Ok(CallTarget::ConstructWith(
            detail,
            Resolved::function(signature, overload),
        ));
    }
    let signature = Signature::function(callee, args.iter().map(BasicType::name));
    let overload = env.find_function(&signature)?;
    Ok(CallTarget::Function(Resolved::function(signature, overload)))
}
