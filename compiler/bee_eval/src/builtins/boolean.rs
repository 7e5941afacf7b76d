//! `Bool`.
//!
//! `&&` and `||` are ordinary operator methods: both operands are evaluated
//! before dispatch.

use bee_ir::{BinaryOp, Signature, UnaryOp};

use super::{operand, operands};
use crate::callable::Overload;
use crate::types::names::BOOL;
use crate::types::{TypeDetail, Value};

pub(super) fn bool_type() -> TypeDetail {
    let mut ty = TypeDetail::primitive(BOOL);

    ty.define_method(
        Signature::default_constructor(),
        Overload::native(BOOL, |env, _| Value::bool(env, false)),
    );
    ty.define_method(
        Signature::constructor([BOOL]),
        Overload::native(BOOL, |env, args| {
            let (_, value) = operands(args)?;
            Value::bool(env, value.as_bool()?)
        }),
    );

    logical(&mut ty, BinaryOp::Eq, |a, b| a == b);
    logical(&mut ty, BinaryOp::NotEq, |a, b| a != b);
    logical(&mut ty, BinaryOp::And, |a, b| a && b);
    logical(&mut ty, BinaryOp::Or, |a, b| a || b);

    ty.define_method(
        Signature::unary_method(UnaryOp::Not),
        Overload::native(BOOL, |env, args| {
            Value::bool(env, !operand(args)?.as_bool()?)
        }),
    );

    ty
}

fn logical(ty: &mut TypeDetail, op: BinaryOp, f: fn(bool, bool) -> bool) {
    ty.define_method(
        Signature::binary_method(op, BOOL),
        Overload::native(BOOL, move |env, args| {
            let (left, right) = operands(args)?;
            Value::bool(env, f(left.as_bool()?, right.as_bool()?))
        }),
    );
}
