//! Whole-program scenarios run through the `Interpreter` facade.

mod exec_tests;

use bee_ir::{Block, Expr, FuncDef, Param, Stmt, TypeDef, VarDecl};

use crate::{buffer_handler, BasicType, EvalResult, Flow, Interpreter};

pub(super) fn interpreter() -> Interpreter {
    Interpreter::builder()
        .print_handler(buffer_handler())
        .build()
}

/// Check and execute `stmts`, returning the result and everything printed.
pub(super) fn run(stmts: Vec<Stmt>) -> (EvalResult<Flow>, String) {
    let interpreter = interpreter();
    let result = interpreter.run(&Block::new(stmts));
    (result, interpreter.print_handler().output())
}

pub(super) fn check(stmts: Vec<Stmt>) -> EvalResult<Option<BasicType>> {
    interpreter().check(&Block::new(stmts))
}

pub(super) fn print(expr: Expr) -> Stmt {
    Stmt::expr(Expr::call("print", vec![expr]))
}

pub(super) fn int_var(name: &str, value: i64) -> Stmt {
    Stmt::var(name, "Int", Some(Expr::int(value)))
}

pub(super) fn func(
    name: &str,
    params: &[(&str, &str)],
    ret: Option<&str>,
    body: Vec<Stmt>,
) -> Stmt {
    Stmt::func(method(name, params, ret, body))
}

pub(super) fn method(
    name: &str,
    params: &[(&str, &str)],
    ret: Option<&str>,
    body: Vec<Stmt>,
) -> FuncDef {
    let params = params.iter().map(|(n, t)| Param::new(*n, *t)).collect();
    FuncDef::new(name, params, ret, body)
}

pub(super) fn type_def(
    name: &str,
    parents: &[&str],
    attrs: Vec<VarDecl>,
    methods: Vec<FuncDef>,
) -> Stmt {
    Stmt::type_def(TypeDef {
        name: name.to_string(),
        parents: parents.iter().map(|p| (*p).to_string()).collect(),
        attrs,
        methods,
    })
}

pub(super) fn attr(name: &str, ty: &str, init: Option<Expr>) -> VarDecl {
    VarDecl {
        name: name.to_string(),
        ty: ty.to_string(),
        init,
    }
}
