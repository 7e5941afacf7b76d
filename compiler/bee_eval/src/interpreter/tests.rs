use bee_ir::{Block, Expr, Stmt};
use pretty_assertions::assert_eq;

use super::*;
use crate::errors::EvalErrorKind;
use crate::print_handler::{buffer_handler, silent_handler};

fn print_int(n: i64) -> Stmt {
    Stmt::expr(Expr::call("print", vec![Expr::int(n)]))
}

#[test]
fn default_builder_installs_prelude() {
    let interpreter = Interpreter::builder().print_handler(silent_handler()).build();
    for name in ["Int", "Float", "Bool", "String", "None"] {
        assert!(interpreter.globals().lookup_type(name).is_some(), "{name}");
    }
}

#[test]
fn prelude_can_be_disabled() {
    let interpreter = Interpreter::builder()
        .print_handler(silent_handler())
        .prelude(false)
        .build();
    let err = interpreter.check(&Block::new(vec![print_int(1)])).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UndefinedType {
            name: "Int".to_string()
        }
    );
}

#[test]
fn custom_root_environment_is_used() {
    let env = Environment::new();
    let interpreter = Interpreter::builder()
        .env(env.clone())
        .print_handler(silent_handler())
        .build();
    assert!(interpreter.globals().same_scope(&env));
    assert!(env.lookup_type("Int").is_some());
}

#[test]
fn run_checks_before_executing() {
    let handler = buffer_handler();
    let interpreter = Interpreter::builder().print_handler(handler.clone()).build();
    let program = Block::new(vec![print_int(1), Stmt::expr(Expr::var("missing"))]);
    assert!(interpreter.run(&program).is_err());
    assert_eq!(handler.output(), "");

    // Executing directly skips the check and fails only when it gets there.
    assert!(interpreter.execute(&program).is_err());
    assert_eq!(handler.output(), "1\n");
}

#[test]
fn globals_persist_between_runs() {
    let interpreter = Interpreter::builder().print_handler(buffer_handler()).build();
    interpreter
        .run(&Block::new(vec![Stmt::var("x", "Int", Some(Expr::int(41)))]))
        .unwrap();
    interpreter
        .run(&Block::new(vec![Stmt::expr(Expr::call(
            "print",
            vec![Expr::var("x")],
        ))]))
        .unwrap();
    assert_eq!(interpreter.print_handler().output(), "41\n");
}
