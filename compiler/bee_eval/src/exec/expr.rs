//! Expression evaluation.
//!
//! Operands and arguments are evaluated left to right before dispatch.

use bee_ir::{Expr, ExprKind, Literal};

use super::Execute;
use crate::dispatch::{resolve_binary, resolve_call, resolve_method, resolve_unary};
use crate::environment::{Binding, Environment};
use crate::errors::{unbound_value, undefined_attribute, EvalResult};
use crate::stack::ensure_sufficient_stack;
use crate::types::Value;

impl Execute for Expr {
    type Output = Value;

    fn execute(&self, env: &Environment) -> EvalResult<Value> {
        ensure_sufficient_stack(|| eval_expr(&self.kind, env)).map_err(|e| e.or_at(self.pos))
    }
}

fn eval_expr(kind: &ExprKind, env: &Environment) -> EvalResult<Value> {
    match kind {
        ExprKind::Literal(lit) => eval_literal(lit, env),
        ExprKind::Variable(name) => match env.find_variable(name)? {
            Binding::Value(value) => Ok(value),
            Binding::Type(_) => Err(unbound_value(name)),
        },
        ExprKind::Binary { op, left, right } => {
            let left = left.execute(env)?;
            let right = right.execute(env)?;
            let resolved = resolve_binary(env, *op, left.detail(), &right.basic_type())?;
            resolved.invoke(env, vec![left, right])
        }
        ExprKind::Unary { op, operand } => {
            let operand = operand.execute(env)?;
            let resolved = resolve_unary(env, *op, operand.detail())?;
            resolved.invoke(env, vec![operand])
        }
        ExprKind::Call { callee, args } => {
            let args = eval_args(args, env)?;
            let types: Vec<_> = args.iter().map(Value::basic_type).collect();
            resolve_call(env, callee, &types)?.invoke(env, args)
        }
        ExprKind::MethodCall {
            receiver,
            method,
            args,
        } => {
            let receiver = receiver.execute(env)?;
            let args = eval_args(args, env)?;
            let types: Vec<_> = args.iter().map(Value::basic_type).collect();
            let resolved = resolve_method(receiver.detail(), method, &types)?;
            let mut full = Vec::with_capacity(args.len() + 1);
            full.push(receiver);
            full.extend(args);
            resolved.invoke(env, full)
        }
        ExprKind::Attribute { object, attr } => {
            let object = object.execute(env)?;
            object
                .attr(attr)
                .cloned()
                .ok_or_else(|| undefined_attribute(object.type_name(), attr))
        }
    }
}

fn eval_literal(lit: &Literal, env: &Environment) -> EvalResult<Value> {
    match lit {
        Literal::Int(n) => Value::int(env, *n),
        Literal::Float(x) => Value::float(env, *x),
        Literal::Bool(b) => Value::bool(env, *b),
        Literal::Str(s) => Value::string(env, s.as_str()),
        Literal::None => Value::none(env),
    }
}

fn eval_args(args: &[Expr], env: &Environment) -> EvalResult<Vec<Value>> {
    args.iter().map(|arg| arg.execute(env)).collect()
}
