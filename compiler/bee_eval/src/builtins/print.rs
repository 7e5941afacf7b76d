//! `print <T>` for every builtin type.

use std::sync::Arc;

use bee_ir::Signature;

use super::operand;
use crate::callable::Overload;
use crate::environment::Environment;
use crate::print_handler::SharedPrintHandler;
use crate::types::names::{BOOL, FLOAT, INT, NONE, STRING};
use crate::types::Value;

pub(super) fn install(env: &Environment, handler: &SharedPrintHandler) {
    for ty in [INT, FLOAT, STRING, BOOL, NONE] {
        let handler = Arc::clone(handler);
        env.declare_function(
            Signature::function("print", [ty]),
            Overload::native(NONE, move |env, args| {
                handler.write_line(&operand(args)?.to_string());
                Value::none(env)
            }),
        );
    }
}
