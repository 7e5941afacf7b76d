//! Builtin prelude: the primitive types and the `print` functions.
//!
//! Builtins are ordinary table entries backed by native functions. They are
//! resolved exactly like user definitions, so a program can shadow any of
//! them by declaring the same name or signature in an inner scope.

mod boolean;
mod float;
mod int;
mod print;
mod string;

use std::rc::Rc;

use bee_ir::Signature;

use crate::callable::Overload;
use crate::environment::Environment;
use crate::errors::{arity_mismatch, EvalResult};
use crate::print_handler::SharedPrintHandler;
use crate::types::{names, TypeDetail, Value};

/// Register the builtin types and functions in `env`.
#[tracing::instrument(level = "debug", skip_all)]
pub fn install(env: &Environment, print: &SharedPrintHandler) {
    for detail in [
        none_type(),
        boolean::bool_type(),
        int::int_type(),
        float::float_type(),
        string::string_type(),
    ] {
        env.declare_type(detail.name().to_string(), Rc::new(detail));
    }
    print::install(env, print);
}

fn none_type() -> TypeDetail {
    let mut ty = TypeDetail::primitive(names::NONE);
    ty.define_method(
        Signature::default_constructor(),
        Overload::native(names::NONE, |env, _| Value::none(env)),
    );
    ty
}

fn operand(args: &[Value]) -> EvalResult<&Value> {
    match args {
        [value] => Ok(value),
        _ => Err(arity_mismatch(1, args.len())),
    }
}

fn operands(args: &[Value]) -> EvalResult<(&Value, &Value)> {
    match args {
        [left, right] => Ok((left, right)),
        _ => Err(arity_mismatch(2, args.len())),
    }
}
