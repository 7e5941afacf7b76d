//! `String`: immutable text.

use bee_ir::{BinaryOp, Signature};

use super::operands;
use crate::callable::Overload;
use crate::types::names::{BOOL, FLOAT, INT, STRING};
use crate::types::{TypeDetail, Value};

pub(super) fn string_type() -> TypeDetail {
    let mut ty = TypeDetail::primitive(STRING);

    ty.define_method(
        Signature::default_constructor(),
        Overload::native(STRING, |env, _| Value::string(env, "")),
    );
    // Conversions use the printed form of the argument.
    for source in [STRING, INT, FLOAT, BOOL] {
        ty.define_method(
            Signature::constructor([source]),
            Overload::native(STRING, |env, args| {
                let (_, value) = operands(args)?;
                Value::string(env, value.to_string())
            }),
        );
    }

    ty.define_method(
        Signature::binary_method(BinaryOp::Add, STRING),
        Overload::native(STRING, |env, args| {
            let (left, right) = operands(args)?;
            Value::string(env, format!("{}{}", left.as_str()?, right.as_str()?))
        }),
    );
    ty.define_method(
        Signature::binary_method(BinaryOp::Eq, STRING),
        Overload::native(BOOL, |env, args| {
            let (left, right) = operands(args)?;
            Value::bool(env, left.as_str()? == right.as_str()?)
        }),
    );
    ty.define_method(
        Signature::binary_method(BinaryOp::NotEq, STRING),
        Overload::native(BOOL, |env, args| {
            let (left, right) = operands(args)?;
            Value::bool(env, left.as_str()? != right.as_str()?)
        }),
    );

    ty
}
