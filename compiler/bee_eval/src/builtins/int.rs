//! `Int`: 64-bit signed integers.
//!
//! Arithmetic is checked; overflow is a runtime error rather than a wrap.
//! Division and modulo round towards negative infinity, so the remainder
//! takes the sign of the divisor.

use bee_ir::{BinaryOp, Signature, UnaryOp};

use super::{operand, operands};
use crate::callable::Overload;
use crate::errors::{
    division_by_zero, integer_overflow, invalid_conversion, invalid_shift, modulo_by_zero,
    EvalResult,
};
use crate::types::names::{BOOL, FLOAT, INT, STRING};
use crate::types::{TypeDetail, Value};

pub(super) fn int_type() -> TypeDetail {
    let mut ty = TypeDetail::primitive(INT);

    ty.define_method(
        Signature::default_constructor(),
        Overload::native(INT, |env, _| Value::int(env, 0)),
    );
    ty.define_method(
        Signature::constructor([INT]),
        Overload::native(INT, |env, args| {
            let (_, value) = operands(args)?;
            Value::int(env, value.as_int()?)
        }),
    );
    ty.define_method(
        Signature::constructor([FLOAT]),
        Overload::native(INT, |env, args| {
            let (_, value) = operands(args)?;
            Value::int(env, float_to_int(value.as_float()?)?)
        }),
    );
    ty.define_method(
        Signature::constructor([STRING]),
        Overload::native(INT, |env, args| {
            let (_, value) = operands(args)?;
            Value::int(env, parse_int(value.as_str()?)?)
        }),
    );

    arithmetic(&mut ty, BinaryOp::Add, |a, b| {
        a.checked_add(b).ok_or_else(|| integer_overflow("+"))
    });
    arithmetic(&mut ty, BinaryOp::Sub, |a, b| {
        a.checked_sub(b).ok_or_else(|| integer_overflow("-"))
    });
    arithmetic(&mut ty, BinaryOp::Mul, |a, b| {
        a.checked_mul(b).ok_or_else(|| integer_overflow("*"))
    });
    arithmetic(&mut ty, BinaryOp::Div, floor_div);
    arithmetic(&mut ty, BinaryOp::Mod, floor_mod);
    arithmetic(&mut ty, BinaryOp::Shl, shift_left);
    arithmetic(&mut ty, BinaryOp::Shr, shift_right);
    arithmetic(&mut ty, BinaryOp::BitAnd, |a, b| Ok(a & b));
    arithmetic(&mut ty, BinaryOp::BitOr, |a, b| Ok(a | b));
    arithmetic(&mut ty, BinaryOp::BitXor, |a, b| Ok(a ^ b));

    comparison(&mut ty, BinaryOp::Eq, i64::eq);
    comparison(&mut ty, BinaryOp::NotEq, i64::ne);
    comparison(&mut ty, BinaryOp::Lt, i64::lt);
    comparison(&mut ty, BinaryOp::Gt, i64::gt);
    comparison(&mut ty, BinaryOp::LtEq, i64::le);
    comparison(&mut ty, BinaryOp::GtEq, i64::ge);

    unary(&mut ty, UnaryOp::Pos, Ok);
    unary(&mut ty, UnaryOp::Neg, |a| {
        a.checked_neg().ok_or_else(|| integer_overflow("unary -"))
    });
    unary(&mut ty, UnaryOp::Inv, |a| Ok(!a));

    ty
}

fn arithmetic(ty: &mut TypeDetail, op: BinaryOp, f: fn(i64, i64) -> EvalResult<i64>) {
    ty.define_method(
        Signature::binary_method(op, INT),
        Overload::native(INT, move |env, args| {
            let (left, right) = operands(args)?;
            Value::int(env, f(left.as_int()?, right.as_int()?)?)
        }),
    );
}

fn comparison(ty: &mut TypeDetail, op: BinaryOp, f: fn(&i64, &i64) -> bool) {
    ty.define_method(
        Signature::binary_method(op, INT),
        Overload::native(BOOL, move |env, args| {
            let (left, right) = operands(args)?;
            Value::bool(env, f(&left.as_int()?, &right.as_int()?))
        }),
    );
}

fn unary(ty: &mut TypeDetail, op: UnaryOp, f: fn(i64) -> EvalResult<i64>) {
    ty.define_method(
        Signature::unary_method(op),
        Overload::native(INT, move |env, args| {
            Value::int(env, f(operand(args)?.as_int()?)?)
        }),
    );
}

fn floor_div(a: i64, b: i64) -> EvalResult<i64> {
    if b == 0 {
        return Err(division_by_zero());
    }
    let quotient = a.checked_div(b).ok_or_else(|| integer_overflow("/"))?;
    if a % b != 0 && (a < 0) != (b < 0) {
        Ok(quotient - 1)
    } else {
        Ok(quotient)
    }
}

fn floor_mod(a: i64, b: i64) -> EvalResult<i64> {
    if b == 0 {
        return Err(modulo_by_zero());
    }
    // Only `i64::MIN % -1` overflows, and its remainder is 0.
    let rem = a.checked_rem(b).unwrap_or(0);
    if rem != 0 && (rem < 0) != (b < 0) {
        Ok(rem + b)
    } else {
        Ok(rem)
    }
}

fn shift_left(a: i64, b: i64) -> EvalResult<i64> {
    if b < 0 {
        return Err(invalid_shift(b));
    }
    if a == 0 {
        return Ok(0);
    }
    let amount = u32::try_from(b)
        .ok()
        .filter(|s| *s < i64::BITS)
        .ok_or_else(|| integer_overflow("<<"))?;
    let shifted = a << amount;
    if shifted >> amount == a {
        Ok(shifted)
    } else {
        Err(integer_overflow("<<"))
    }
}

fn shift_right(a: i64, b: i64) -> EvalResult<i64> {
    if b < 0 {
        return Err(invalid_shift(b));
    }
    let amount = u32::try_from(b).map_or(i64::BITS - 1, |s| s.min(i64::BITS - 1));
    Ok(a >> amount)
}

/// Truncate towards zero; values outside the `i64` range are rejected.
#[expect(
    clippy::cast_possible_truncation,
    reason = "range is checked before the cast"
)]
fn float_to_int(x: f64) -> EvalResult<i64> {
    const LOWER: f64 = -9_223_372_036_854_775_808.0;
    const UPPER: f64 = 9_223_372_036_854_775_808.0;
    let truncated = x.trunc();
    if truncated.is_finite() && (LOWER..UPPER).contains(&truncated) {
        Ok(truncated as i64)
    } else {
        Err(invalid_conversion(&x.to_string(), INT))
    }
}

fn parse_int(text: &str) -> EvalResult<i64> {
    text.trim()
        .parse()
        .map_err(|_| invalid_conversion(text, INT))
}
