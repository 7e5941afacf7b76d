//! Checking function and type definitions.

use std::rc::Rc;

use bee_ir::{FuncDef, Param, Signature, TypeDef, CONSTRUCTOR, RECEIVER_MARKER};

use super::Check;
use crate::callable::Overload;
use crate::environment::{Binding, Environment};
use crate::errors::{
    constructor_return_type, initializer_mismatch, primitive_parent, return_type_mismatch,
    EvalResult,
};
use crate::func::Func;
use crate::types::{Attribute, BasicType, TypeDetail};

/// Register a function under its signature, then check its body.
///
/// Registration comes first so the body can call the function recursively.
#[tracing::instrument(level = "debug", skip_all, fields(function = %def.name))]
pub(super) fn check_function(def: &FuncDef, env: &Environment) -> EvalResult<()> {
    let params = param_types(&def.params, env, None)?;
    let ret = declared_return(def, env, None)?;
    let signature = Signature::function(&def.name, params.iter().map(BasicType::name));
    env.declare_function(
        signature,
        Overload::closure(ret.clone(), Func::from_def(def, env)),
    );

    let scope = env.child();
    bind_params(&scope, &def.params, params);
    check_body(def, &scope, &ret)
}

/// Register a type and check its attributes and methods.
///
/// The descriptor is registered before method bodies are checked so methods
/// can refer to their own type.
#[tracing::instrument(level = "debug", skip_all, fields(type_name = %def.name))]
pub(super) fn check_type_def(def: &TypeDef, env: &Environment) -> EvalResult<()> {
    let mut detail = TypeDetail::new(&def.name);
    for parent in &def.parents {
        let parent = env.find_type(parent)?;
        if parent.is_primitive() {
            return Err(primitive_parent(&def.name, parent.name()));
        }
        detail.add_parent(parent);
    }

    for attr in &def.attrs {
        let ty = env.find_type(&attr.ty)?.basic_type();
        if let Some(init) = &attr.init {
            let found = init.check(env)?;
            if found != ty {
                let err = initializer_mismatch(&attr.name, ty.name(), found.name());
                return Err(err.or_at(init.pos));
            }
        }
        detail.define_attr(attr.name.as_str(), Attribute::declared(ty));
    }

    let this = BasicType::new(&def.name);
    let mut methods = Vec::with_capacity(def.methods.len());
    for method in &def.methods {
        let params = param_types(&method.params, env, Some(def.name.as_str()))?;
        let ret = declared_return(method, env, Some(def.name.as_str()))?;
        if method.name == CONSTRUCTOR && ret != this {
            return Err(constructor_return_type(&def.name, ret.name()).or_at(method.pos));
        }
        let signature = Signature::method(&method.name, params.iter().map(BasicType::name));
        detail.define_method(
            signature,
            Overload::closure(ret.clone(), Func::method(method, env)),
        );
        methods.push((method, params, ret));
    }

    env.declare_type(def.name.as_str(), Rc::new(detail));

    for (method, params, ret) in methods {
        let scope = env.child();
        scope.declare_variable(RECEIVER_MARKER, Binding::Type(this.clone()));
        bind_params(&scope, &method.params, params);
        check_body(method, &scope, &ret)?;
    }
    Ok(())
}

/// Resolve a type annotation. Method signatures may name the type being
/// defined, which is not registered yet.
fn annotation(name: &str, env: &Environment, defining: Option<&str>) -> EvalResult<BasicType> {
    if defining == Some(name) {
        return Ok(BasicType::new(name));
    }
    Ok(env.find_type(name)?.basic_type())
}

fn param_types(
    params: &[Param],
    env: &Environment,
    defining: Option<&str>,
) -> EvalResult<Vec<BasicType>> {
    params
        .iter()
        .map(|p| annotation(&p.ty, env, defining))
        .collect()
}

/// Declared return type; a missing annotation means `None`.
fn declared_return(
    def: &FuncDef,
    env: &Environment,
    defining: Option<&str>,
) -> EvalResult<BasicType> {
    match &def.ret {
        Some(name) => annotation(name, env, defining),
        None => Ok(BasicType::none()),
    }
}

fn bind_params(scope: &Environment, params: &[Param], types: Vec<BasicType>) {
    for (param, ty) in params.iter().zip(types) {
        scope.declare_variable(param.name.as_str(), Binding::Type(ty));
    }
}

/// The inferred body type must equal the declared one; a body that never
/// returns counts as `None`.
fn check_body(def: &FuncDef, scope: &Environment, declared: &BasicType) -> EvalResult<()> {
    let inferred = def.body.check(scope)?.unwrap_or_else(BasicType::none);
    if inferred == *declared {
        Ok(())
    } else {
        Err(return_type_mismatch(&def.name, declared.name(), inferred.name()).or_at(def.pos))
    }
}
