//! Bee Eval - static checker and tree-walking interpreter for Bee.
//!
//! Every AST node supports two operations over a shared environment:
//! `Check::check` validates the tree against the nominal type system, and
//! `Execute::execute` runs it. The passes follow the same scoping and
//! resolution rules, so a tree that checks cleanly resolves every name and
//! overload the same way when executed.
//!
//! # Architecture
//!
//! - `Environment`: parent-linked scopes holding variables, types and functions
//! - `TypeDetail` / `Value` / `BasicType`: nominal types with multiple
//!   inheritance, and values tagged with their type
//! - `Func`: closures over a live defining environment
//! - `Signature` keys (from `bee_ir`): operators, functions, methods and
//!   constructors all resolve through one overload lookup, methods first
//! - `builtins`: the prelude of primitive types and `print`
//! - `Interpreter`: facade that owns the root environment

mod builtins;
mod callable;
mod check;
mod dispatch;
mod environment;
pub mod errors;
mod exec;
mod func;
mod interpreter;
mod print_handler;
mod signal;
mod stack;
pub mod types;

pub use callable::{Callable, NativeFn, Overload};
pub use check::Check;
pub use environment::{Binding, Environment, LocalScope, Scope};
pub use errors::{ErrorCategory, EvalError, EvalErrorKind, EvalResult};
pub use exec::Execute;
pub use func::Func;
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandler, SharedPrintHandler,
};
pub use signal::Flow;
pub use types::{Attribute, BasicType, MethodEntry, Payload, TypeDetail, Value};

/// Register the builtin prelude in `env`.
pub use builtins::install as install_prelude;

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
