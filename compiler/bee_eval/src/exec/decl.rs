//! Executing function and type definitions.

use std::rc::Rc;

use bee_ir::{FuncDef, Signature, TypeDef};

use super::Execute;
use crate::callable::Overload;
use crate::environment::Environment;
use crate::errors::EvalResult;
use crate::func::Func;
use crate::types::{names, Attribute, BasicType, TypeDetail};

/// (Re-)register a closure over the current scope.
pub(super) fn define_function(def: &FuncDef, env: &Environment) {
    let signature = Signature::function(&def.name, def.params.iter().map(|p| p.ty.as_str()));
    tracing::debug!(signature = %signature, "define function");
    env.declare_function(
        signature,
        Overload::closure(return_type(def), Func::from_def(def, env)),
    );
}

/// Build the descriptor: parents, attribute defaults, method closures.
pub(super) fn define_type(def: &TypeDef, env: &Environment) -> EvalResult<()> {
    tracing::debug!(type_name = %def.name, "define type");
    let mut detail = TypeDetail::new(&def.name);
    for parent in &def.parents {
        detail.add_parent(env.find_type(parent)?);
    }
    for attr in &def.attrs {
        let default = match &attr.init {
            Some(init) => init.execute(env)?,
            None => env.find_type(&attr.ty)?.instantiate(env)?,
        };
        detail.define_attr(
            attr.name.as_str(),
            Attribute::with_default(BasicType::new(&attr.ty), default),
        );
    }
    for method in &def.methods {
        let signature =
            Signature::method(&method.name, method.params.iter().map(|p| p.ty.as_str()));
        detail.define_method(
            signature,
            Overload::closure(return_type(method), Func::method(method, env)),
        );
    }
    env.declare_type(def.name.as_str(), Rc::new(detail));
    Ok(())
}

fn return_type(def: &FuncDef) -> BasicType {
    BasicType::new(def.ret.as_deref().unwrap_or(names::NONE))
}
