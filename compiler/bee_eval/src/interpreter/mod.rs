//! Interpreter facade over the check and execute passes.
//!
//! ```text
//! let interpreter = Interpreter::builder().print_handler(buffer_handler()).build();
//! interpreter.run(&program)?;
//! ```
//!
//! Both passes run against the same root environment. `run` checks the whole
//! program first and only executes it if the check succeeded.

mod builder;

pub use builder::InterpreterBuilder;

use bee_ir::Block;

use crate::check::Check;
use crate::environment::Environment;
use crate::errors::EvalResult;
use crate::exec::Execute;
use crate::print_handler::SharedPrintHandler;
use crate::signal::Flow;
use crate::types::BasicType;

pub struct Interpreter {
    globals: Environment,
    print_handler: SharedPrintHandler,
}

impl Interpreter {
    /// An interpreter with the default configuration.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// The root environment.
    pub fn globals(&self) -> &Environment {
        &self.globals
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Statically check `program` in the root environment.
    ///
    /// Returns the type a top-level `return` would produce.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.stmts.len()))]
    pub fn check(&self, program: &Block) -> EvalResult<Option<BasicType>> {
        program.check(&self.globals)
    }

    /// Execute `program` in the root environment without checking it.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.stmts.len()))]
    pub fn execute(&self, program: &Block) -> EvalResult<Flow> {
        program.execute(&self.globals)
    }

    /// Check, then execute.
    pub fn run(&self, program: &Block) -> EvalResult<Flow> {
        self.check(program)?;
        self.execute(program)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
