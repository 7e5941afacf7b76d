//! Execute pass.
//!
//! Runs a checked tree against a live environment. Types are not validated
//! again here. Statements produce a `Flow` that blocks, loops and calls
//! consume; expressions produce values.

mod decl;
mod expr;

use bee_ir::{Block, Expr, IfStmt, Stmt, StmtKind, VarDecl};

use crate::environment::{Binding, Environment};
use crate::errors::{condition_not_bool, EvalResult};
use crate::signal::Flow;
use crate::stack::ensure_sufficient_stack;
use crate::types::Payload;

use decl::{define_function, define_type};

/// A node that can be executed.
pub trait Execute {
    type Output;

    fn execute(&self, env: &Environment) -> EvalResult<Self::Output>;
}

impl Execute for Block {
    type Output = Flow;

    fn execute(&self, env: &Environment) -> EvalResult<Flow> {
        for stmt in &self.stmts {
            let flow = stmt.execute(env)?;
            if !flow.is_normal() {
                return Ok(flow);
            }
        }
        Ok(Flow::Normal)
    }
}

impl Execute for Stmt {
    type Output = Flow;

    fn execute(&self, env: &Environment) -> EvalResult<Flow> {
        ensure_sufficient_stack(|| exec_stmt(&self.kind, env)).map_err(|e| e.or_at(self.pos))
    }
}

fn exec_stmt(kind: &StmtKind, env: &Environment) -> EvalResult<Flow> {
    match kind {
        StmtKind::Expr(expr) => {
            expr.execute(env)?;
            Ok(Flow::Normal)
        }
        StmtKind::VarDecl(decl) => {
            exec_var_decl(decl, env)?;
            Ok(Flow::Normal)
        }
        StmtKind::FuncDef(def) => {
            define_function(def, env);
            Ok(Flow::Normal)
        }
        StmtKind::TypeDef(def) => {
            define_type(def, env)?;
            Ok(Flow::Normal)
        }
        StmtKind::If(stmt) => exec_if(stmt, env),
        StmtKind::While { cond, body } => exec_while(cond, body, env),
        StmtKind::Return(value) => {
            let value = value.as_ref().map(|e| e.execute(env)).transpose()?;
            Ok(Flow::Return(value))
        }
        StmtKind::Break => Ok(Flow::Break),
        StmtKind::Continue => Ok(Flow::Continue),
    }
}

fn exec_var_decl(decl: &VarDecl, env: &Environment) -> EvalResult<()> {
    let value = match &decl.init {
        Some(init) => init.execute(env)?,
        None => env.find_type(&decl.ty)?.instantiate(env)?,
    };
    env.declare_variable(decl.name.as_str(), Binding::Value(value));
    Ok(())
}

fn exec_if(stmt: &IfStmt, env: &Environment) -> EvalResult<Flow> {
    for branch in &stmt.branches {
        if is_true(&branch.cond, env)? {
            return branch.body.execute(&env.child());
        }
    }
    match &stmt.default {
        Some(default) => default.execute(&env.child()),
        None => Ok(Flow::Normal),
    }
}

/// The condition is evaluated in the enclosing scope; every iteration gets a
/// fresh child scope for the body.
fn exec_while(cond: &Expr, body: &Block, env: &Environment) -> EvalResult<Flow> {
    while is_true(cond, env)? {
        match body.execute(&env.child())? {
            Flow::Return(value) => return Ok(Flow::Return(value)),
            Flow::Break => break,
            Flow::Continue | Flow::Normal => {}
        }
    }
    Ok(Flow::Normal)
}

fn is_true(cond: &Expr, env: &Environment) -> EvalResult<bool> {
    let value = cond.execute(env)?;
    match value.payload() {
        Payload::Bool(b) => Ok(*b),
        _ => Err(condition_not_bool(value.type_name()).or_at(cond.pos)),
    }
}
