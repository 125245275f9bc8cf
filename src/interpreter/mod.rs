//tree-walking interpreter,
//output is built from the fragments statements return, not printed as it goes

use crate::ast::Program;
use std::collections::HashMap;
use tracing::debug;

pub mod interpreter_expression;
pub mod interpreter_input;
pub mod interpreter_statement;
pub mod interpreter_value;
pub mod runtime_error;

pub use interpreter_input::{InputSource, ScriptedInput, StdinInput};
pub use interpreter_value::Value;
pub use runtime_error::RuntimeError;

pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// One program run: a fresh global variable store plus the input capability for `lire`.
pub struct Interpreter<'i> {
    pub variables: HashMap<String, Value>,
    pub input: &'i mut dyn InputSource,
}

impl<'i> Interpreter<'i> {
    pub fn new(input: &'i mut dyn InputSource) -> Self {
        Self {
            variables: HashMap::new(),
            input,
        }
    }

    pub fn run(&mut self, program: &Program) -> RuntimeResult<String> {
        let mut fragments = Vec::new();
        self.execute_block(&program.body, &mut fragments)?;
        debug!(
            fragments = fragments.len(),
            variables = self.variables.len(),
            "program finished"
        );
        Ok(fragments.join("\n"))
    }
}
