//! `Float`: 64-bit IEEE floats.

use bee_ir::{BinaryOp, Signature, UnaryOp};

use super::{operand, operands};
use crate::callable::Overload;
use crate::errors::{division_by_zero, invalid_conversion, modulo_by_zero, EvalResult};
use crate::types::names::{BOOL, FLOAT, INT, STRING};
use crate::types::{TypeDetail, Value};

pub(super) fn float_type() -> TypeDetail {
    let mut ty = TypeDetail::primitive(FLOAT);

    ty.define_method(
        Signature::default_constructor(),
        Overload::native(FLOAT, |env, _| Value::float(env, 0.0)),
    );
    ty.define_method(
        Signature::constructor([FLOAT]),
        Overload::native(FLOAT, |env, args| {
            let (_, value) = operands(args)?;
            Value::float(env, value.as_float()?)
        }),
    );
    ty.define_method(
        Signature::constructor([INT]),
        Overload::native(FLOAT, |env, args| {
            let (_, value) = operands(args)?;
            Value::float(env, int_to_float(value.as_int()?))
        }),
    );
    ty.define_method(
        Signature::constructor([STRING]),
        Overload::native(FLOAT, |env, args| {
            let (_, value) = operands(args)?;
            let text = value.as_str()?;
            let parsed = text
                .trim()
                .parse()
                .map_err(|_| invalid_conversion(text, FLOAT))?;
            Value::float(env, parsed)
        }),
    );

    arithmetic(&mut ty, BinaryOp::Add, |a, b| Ok(a + b));
    arithmetic(&mut ty, BinaryOp::Sub, |a, b| Ok(a - b));
    arithmetic(&mut ty, BinaryOp::Mul, |a, b| Ok(a * b));
    arithmetic(&mut ty, BinaryOp::Div, |a, b| {
        if b == 0.0 {
            Err(division_by_zero())
        } else {
            Ok(a / b)
        }
    });
    arithmetic(&mut ty, BinaryOp::Mod, floor_mod);

    comparison(&mut ty, BinaryOp::Eq, f64::eq);
    comparison(&mut ty, BinaryOp::NotEq, f64::ne);
    comparison(&mut ty, BinaryOp::Lt, f64::lt);
    comparison(&mut ty, BinaryOp::Gt, f64::gt);
    comparison(&mut ty, BinaryOp::LtEq, f64::le);
    comparison(&mut ty, BinaryOp::GtEq, f64::ge);

    unary(&mut ty, UnaryOp::Pos, |x| x);
    unary(&mut ty, UnaryOp::Neg, |x| -x);

    ty
}

fn arithmetic(ty: &mut TypeDetail, op: BinaryOp, f: fn(f64, f64) -> EvalResult<f64>) {
    ty.define_method(
        Signature::binary_method(op, FLOAT),
        Overload::native(FLOAT, move |env, args| {
            let (left, right) = operands(args)?;
            Value::float(env, f(left.as_float()?, right.as_float()?)?)
        }),
    );
}

fn comparison(ty: &mut TypeDetail, op: BinaryOp, f: fn(&f64, &f64) -> bool) {
    ty.define_method(
        Signature::binary_method(op, FLOAT),
        Overload::native(BOOL, move |env, args| {
            let (left, right) = operands(args)?;
            Value::bool(env, f(&left.as_float()?, &right.as_float()?))
        }),
    );
}

fn unary(ty: &mut TypeDetail, op: UnaryOp, f: fn(f64) -> f64) {
    ty.define_method(
        Signature::unary_method(op),
        Overload::native(FLOAT, move |env, args| {
            Value::float(env, f(operand(args)?.as_float()?))
        }),
    );
}

/// Remainder with the sign of the divisor.
fn floor_mod(a: f64, b: f64) -> EvalResult<f64> {
    if b == 0.0 {
        return Err(modulo_by_zero());
    }
    let rem = a % b;
    if rem != 0.0 && (rem < 0.0) != (b < 0.0) {
        Ok(rem + b)
    } else {
        Ok(rem)
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "large ints round to the nearest float"
)]
fn int_to_float(n: i64) -> f64 {
    n as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_mod_takes_divisor_sign() {
        assert_eq!(floor_mod(7.5, 2.0).ok(), Some(1.5));
        assert_eq!(floor_mod(-7.5, 2.0).ok(), Some(0.5));
        assert_eq!(floor_mod(7.5, -2.0).ok(), Some(-0.5));
        assert!(floor_mod(1.0, 0.0).is_err());
    }

    #[test]
    fn test_int_to_float() {
        assert_eq!(int_to_float(-3), -3.0);
    }
}
