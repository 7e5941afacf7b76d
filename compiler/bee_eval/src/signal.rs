//! Control-flow signal produced by statement execution.

use crate::types::Value;

/// How a statement finished.
///
/// Blocks stop at the first non-`Normal` flow and hand it to their caller.
/// Loops consume `Break` and `Continue`; function calls consume `Return`.
#[derive(Clone, PartialEq, Debug, Default)]
pub enum Flow {
    #[default]
    Normal,
    Return(Option<Value>),
    Break,
    Continue,
}

impl Flow {
    pub fn is_normal(&self) -> bool {
        matches!(self, Flow::Normal)
    }
}
