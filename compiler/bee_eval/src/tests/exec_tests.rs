use std::cell::Cell;
use std::rc::Rc;

use bee_ir::{BinaryOp, Block, Expr, Position, Signature, Stmt};
use pretty_assertions::assert_eq;

use super::{func, int_var, print, run};
use crate::errors::{ErrorCategory, EvalErrorKind};
use crate::types::names::BOOL;
use crate::{Flow, Overload, Value};

fn lt(left: Expr, right: Expr) -> Expr {
    Expr::binary(BinaryOp::Lt, left, right)
}

fn add(left: Expr, right: Expr) -> Expr {
    Expr::binary(BinaryOp::Add, left, right)
}

#[test]
fn first_true_branch_runs() {
    let (result, output) = run(vec![Stmt::if_else(
        vec![
            (Expr::bool(false), vec![print(Expr::int(1))]),
            (Expr::bool(true), vec![print(Expr::int(2))]),
            (Expr::bool(true), vec![print(Expr::int(3))]),
        ],
        Some(vec![print(Expr::int(4))]),
    )]);
    result.unwrap();
    assert_eq!(output, "2\n");
}

#[test]
fn default_branch_runs_when_nothing_matches() {
    let (result, output) = run(vec![Stmt::if_else(
        vec![(Expr::bool(false), vec![print(Expr::int(1))])],
        Some(vec![print(Expr::str("else"))]),
    )]);
    result.unwrap();
    assert_eq!(output, "else\n");
}

#[test]
fn recursion_computes_factorial() {
    let body = vec![
        Stmt::if_else(
            vec![(
                lt(Expr::var("n"), Expr::int(2)),
                vec![Stmt::ret(Some(Expr::int(1)))],
            )],
            None,
        ),
        Stmt::ret(Some(Expr::binary(
            BinaryOp::Mul,
            Expr::var("n"),
            Expr::call(
                "fact",
                vec![Expr::binary(BinaryOp::Sub, Expr::var("n"), Expr::int(1))],
            ),
        ))),
    ];
    let (result, output) = run(vec![
        func("fact", &[("n", "Int")], Some("Int"), body),
        print(Expr::call("fact", vec![Expr::int(10)])),
    ]);
    result.unwrap();
    assert_eq!(output, "3628800\n");
}

#[test]
fn return_leaves_loop_and_function() {
    let body = vec![Stmt::while_loop(
        Expr::bool(true),
        vec![
            print(Expr::str("once")),
            Stmt::ret(Some(Expr::int(7))),
            print(Expr::str("never")),
        ],
    )];
    let (result, output) = run(vec![
        func("f", &[], Some("Int"), body),
        print(Expr::call("f", vec![])),
    ]);
    result.unwrap();
    assert_eq!(output, "once\n7\n");
}

#[test]
fn break_leaves_the_innermost_loop() {
    let (result, output) = run(vec![Stmt::while_loop(
        Expr::bool(true),
        vec![
            print(Expr::str("body")),
            Stmt::if_else(vec![(Expr::bool(true), vec![Stmt::brk()])], None),
            print(Expr::str("unreachable")),
        ],
    )]);
    result.unwrap();
    assert_eq!(output, "body\n");
}

#[test]
fn continue_skips_to_the_loop_head() {
    let interpreter = super::interpreter();
    let remaining = Rc::new(Cell::new(2));
    let counter = Rc::clone(&remaining);
    interpreter.globals().declare_function(
        Signature::function("more", Vec::<String>::new()),
        Overload::native(BOOL, move |env, _| {
            let left = counter.get();
            counter.set(left - 1);
            Value::bool(env, left > 0)
        }),
    );
    let program = Block::new(vec![Stmt::while_loop(
        Expr::call("more", vec![]),
        vec![
            print(Expr::str("tick")),
            Stmt::if_else(vec![(Expr::bool(true), vec![Stmt::cont()])], None),
            print(Expr::str("never")),
        ],
    )]);
    interpreter.run(&program).unwrap();
    assert_eq!(interpreter.print_handler().output(), "tick\ntick\n");
}

#[test]
fn break_at_function_boundary_ends_the_call() {
    let (result, output) = run(vec![
        func("f", &[], None, vec![print(Expr::int(1)), Stmt::brk(), print(Expr::int(2))]),
        Stmt::expr(Expr::call("f", vec![])),
        print(Expr::int(3)),
    ]);
    assert_eq!(result.unwrap(), Flow::Normal);
    assert_eq!(output, "1\n3\n");
}

#[test]
fn break_out_of_a_typed_function_has_no_value() {
    let body = vec![
        Stmt::if_else(vec![(Expr::bool(true), vec![Stmt::brk()])], None),
        Stmt::ret(Some(Expr::int(1))),
    ];
    let (result, output) = run(vec![
        func("g", &[], Some("Int"), body),
        print(Expr::call("g", vec![])),
    ]);
    assert_eq!(
        result.unwrap_err().kind,
        EvalErrorKind::MissingReturn {
            expected: "Int".to_string()
        }
    );
    assert_eq!(output, "");
}

#[test]
fn call_without_return_yields_none() {
    let (result, output) = run(vec![
        func("noop", &[], None, vec![]),
        print(Expr::call("noop", vec![])),
    ]);
    result.unwrap();
    assert_eq!(output, "None\n");
}

#[test]
fn top_level_return_stops_the_program() {
    let (result, output) = run(vec![
        print(Expr::int(1)),
        Stmt::ret(Some(Expr::int(9))),
        print(Expr::int(2)),
    ]);
    let Flow::Return(Some(value)) = result.unwrap() else {
        panic!("expected a return flow");
    };
    assert_eq!(value.as_int().unwrap(), 9);
    assert_eq!(output, "1\n");
}

#[test]
fn uninitialized_declarations_use_defaults() {
    let (result, output) = run(vec![
        Stmt::var("i", "Int", None),
        Stmt::var("f", "Float", None),
        Stmt::var("b", "Bool", None),
        Stmt::var("s", "String", None),
        print(Expr::var("i")),
        print(Expr::var("f")),
        print(Expr::var("b")),
        print(add(Expr::var("s"), Expr::str("!"))),
    ]);
    result.unwrap();
    assert_eq!(output, "0\n0.0\nFalse\n!\n");
}

#[test]
fn arguments_evaluate_left_to_right() {
    let (result, output) = run(vec![
        func(
            "say",
            &[("n", "Int")],
            Some("Int"),
            vec![print(Expr::var("n")), Stmt::ret(Some(Expr::var("n")))],
        ),
        print(add(
            Expr::call("say", vec![Expr::int(1)]),
            Expr::call("say", vec![Expr::int(2)]),
        )),
    ]);
    result.unwrap();
    assert_eq!(output, "1\n2\n3\n");
}

#[test]
fn runtime_errors_carry_positions() {
    let (result, output) = run(vec![
        print(Expr::int(1)),
        print(Expr::binary(BinaryOp::Div, Expr::int(1), Expr::int(0)).at(Position::new(2, 7))),
    ]);
    let err = result.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Runtime);
    assert_eq!(
        err.to_string(),
        "RuntimeError at line 2, column 7: division by zero."
    );
    assert_eq!(output, "1\n");
}

#[test]
fn inner_function_shadows_builtin() {
    let silent_print = func("print", &[("x", "Int")], None, vec![]);
    let (result, output) = run(vec![
        Stmt::if_else(
            vec![(Expr::bool(true), vec![silent_print, print(Expr::int(1))])],
            None,
        ),
        print(Expr::int(2)),
    ]);
    result.unwrap();
    assert_eq!(output, "2\n");
}

#[test]
fn reading_a_type_only_binding_is_a_runtime_error() {
    let interpreter = super::interpreter();
    let program = Block::new(vec![int_var("x", 1)]);
    interpreter.check(&program).unwrap();
    // The check pass bound `x` to its type only; reading it without
    // executing the declaration has no value to produce.
    let err = interpreter
        .execute(&Block::new(vec![print(Expr::var("x"))]))
        .unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UnboundValue {
            name: "x".to_string()
        }
    );
}
