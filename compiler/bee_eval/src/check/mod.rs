//! Static check pass.
//!
//! Validates a tree against the type system before anything runs. The pass
//! registers declarations in the environment as it goes, binding variables
//! to their static types, so that later statements see earlier ones exactly
//! as they will at run time.
//!
//! Statements report the return type they contribute (`None` when they
//! cannot return); expressions report their type.

mod decl;
mod expr;

use bee_ir::{Block, IfStmt, Stmt, StmtKind, VarDecl};

use crate::environment::{Binding, Environment};
use crate::errors::{
    condition_not_bool, conflicting_return_types, initializer_mismatch, EvalResult,
};
use crate::stack::ensure_sufficient_stack;
use crate::types::BasicType;

use decl::{check_function, check_type_def};

/// A node that can be statically checked.
pub trait Check {
    type Output;

    fn check(&self, env: &Environment) -> EvalResult<Self::Output>;
}

impl Check for Block {
    type Output = Option<BasicType>;

    fn check(&self, env: &Environment) -> EvalResult<Option<BasicType>> {
        let mut found = None;
        for stmt in &self.stmts {
            let ty = stmt.check(env)?;
            merge_return(&mut found, ty).map_err(|e| e.or_at(stmt.pos))?;
        }
        Ok(found)
    }
}

impl Check for Stmt {
    type Output = Option<BasicType>;

    fn check(&self, env: &Environment) -> EvalResult<Option<BasicType>> {
        ensure_sufficient_stack(|| check_stmt(&self.kind, env)).map_err(|e| e.or_at(self.pos))
    }
}

fn check_stmt(kind: &StmtKind, env: &Environment) -> EvalResult<Option<BasicType>> {
    match kind {
        StmtKind::Expr(expr) => {
            expr.check(env)?;
            Ok(None)
        }
        StmtKind::VarDecl(decl) => {
            check_var_decl(decl, env)?;
            Ok(None)
        }
        StmtKind::FuncDef(def) => {
            check_function(def, env)?;
            Ok(None)
        }
        StmtKind::TypeDef(def) => {
            check_type_def(def, env)?;
            Ok(None)
        }
        StmtKind::If(stmt) => check_if(stmt, env),
        StmtKind::While { cond, body } => {
            expect_condition(cond, env)?;
            body.check(&env.child())
        }
        StmtKind::Return(Some(expr)) => Ok(Some(expr.check(env)?)),
        StmtKind::Return(None) => Ok(Some(BasicType::none())),
        StmtKind::Break | StmtKind::Continue => Ok(None),
    }
}

fn check_var_decl(decl: &VarDecl, env: &Environment) -> EvalResult<()> {
    let declared = env.find_type(&decl.ty)?.basic_type();
    if let Some(init) = &decl.init {
        let found = init.check(env)?;
        if found != declared {
            let err = initializer_mismatch(&decl.name, declared.name(), found.name());
            return Err(err.or_at(init.pos));
        }
    }
    env.declare_variable(decl.name.as_str(), Binding::Type(declared));
    Ok(())
}

fn check_if(stmt: &IfStmt, env: &Environment) -> EvalResult<Option<BasicType>> {
    let mut found = None;
    for branch in &stmt.branches {
        expect_condition(&branch.cond, env)?;
        let ty = branch.body.check(&env.child())?;
        merge_return(&mut found, ty)?;
    }
    if let Some(default) = &stmt.default {
        let ty = default.check(&env.child())?;
        merge_return(&mut found, ty)?;
    }
    Ok(found)
}

fn expect_condition(cond: &bee_ir::Expr, env: &Environment) -> EvalResult<()> {
    let ty = cond.check(env)?;
    if ty == BasicType::bool() {
        Ok(())
    } else {
        Err(condition_not_bool(ty.name()).or_at(cond.pos))
    }
}

/// Fold one more contributed return type into `found`.
fn merge_return(found: &mut Option<BasicType>, ty: Option<BasicType>) -> EvalResult<()> {
    let Some(ty) = ty else {
        return Ok(());
    };
    match found {
        Some(prev) if *prev != ty => Err(conflicting_return_types(prev.name(), ty.name())),
        Some(_) => Ok(()),
        None => {
            *found = Some(ty);
            Ok(())
        }
    }
}
