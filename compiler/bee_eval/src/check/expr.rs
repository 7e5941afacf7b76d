//! Expression typing.

use bee_ir::{Expr, ExprKind, Literal};

use super::Check;
use crate::dispatch::{resolve_binary, resolve_call, resolve_method, resolve_unary};
use crate::environment::Environment;
use crate::errors::{undefined_attribute, EvalResult};
use crate::stack::ensure_sufficient_stack;
use crate::types::{names, BasicType};

impl Check for Expr {
    type Output = BasicType;

    fn check(&self, env: &Environment) -> EvalResult<BasicType> {
        ensure_sufficient_stack(|| check_expr(&self.kind, env)).map_err(|e| e.or_at(self.pos))
    }
}

fn check_expr(kind: &ExprKind, env: &Environment) -> EvalResult<BasicType> {
    match kind {
        ExprKind::Literal(lit) => {
            let detail = env.find_type(literal_type_name(lit))?;
            Ok(detail.basic_type())
        }
        ExprKind::Variable(name) => Ok(env.find_variable(name)?.ty()),
        ExprKind::Binary { op, left, right } => {
            let left = left.check(env)?.resolve(env)?;
            let right = right.check(env)?;
            Ok(resolve_binary(env, *op, &left, &right)?.ret())
        }
        ExprKind::Unary { op, operand } => {
            let operand = operand.check(env)?.resolve(env)?;
            Ok(resolve_unary(env, *op, &operand)?.ret())
        }
        ExprKind::Call { callee, args } => {
            let args = check_args(args, env)?;
            Ok(resolve_call(env, callee, &args)?.ret())
        }
        ExprKind::MethodCall {
            receiver,
            method,
            args,
        } => {
            let receiver = receiver.check(env)?.resolve(env)?;
            let args = check_args(args, env)?;
            Ok(resolve_method(&receiver, method, &args)?.ret())
        }
        ExprKind::Attribute { object, attr } => {
            let object = object.check(env)?.resolve(env)?;
            object
                .attr_type(attr)
                .ok_or_else(|| undefined_attribute(object.name(), attr))
        }
    }
}

fn check_args(args: &[Expr], env: &Environment) -> EvalResult<Vec<BasicType>> {
    args.iter().map(|arg| arg.check(env)).collect()
}

/// Builtin type of a literal.
fn literal_type_name(lit: &Literal) -> &'static str {
    match lit {
        Literal::Int(_) => names::INT,
        Literal::Float(_) => names::FLOAT,
        Literal::Bool(_) => names::BOOL,
        Literal::Str(_) => names::STRING,
        Literal::None => names::NONE,
    }
}
