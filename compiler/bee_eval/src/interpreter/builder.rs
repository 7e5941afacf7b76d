//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use super::Interpreter;
use crate::builtins;
use crate::environment::Environment;
use crate::print_handler::{stdout_handler, SharedPrintHandler};

/// Builder for `Interpreter`.
///
/// Defaults: output goes to stdout and the builtin prelude is installed in a
/// fresh root environment.
pub struct InterpreterBuilder {
    env: Option<Environment>,
    print_handler: Option<SharedPrintHandler>,
    prelude: bool,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        InterpreterBuilder {
            env: None,
            print_handler: None,
            prelude: true,
        }
    }

    /// Use `env` as the root environment instead of a fresh one.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Set where `print` writes.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Whether to register the builtin types and functions.
    #[must_use]
    pub fn prelude(mut self, install: bool) -> Self {
        self.prelude = install;
        self
    }

    pub fn build(self) -> Interpreter {
        let globals = self.env.unwrap_or_default();
        let print_handler = self.print_handler.unwrap_or_else(stdout_handler);
        if self.prelude {
            builtins::install(&globals, &print_handler);
        }
        Interpreter {
            globals,
            print_handler,
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
