//the stage entrypoints and the response shapes handed to a serving layer,
//every call builds its own translator counters and variable store

use crate::ast::Program;
use crate::intermediate_ir::Instruction;
use crate::interpreter::{InputSource, Interpreter, RuntimeError, StdinInput};
use crate::lexer_tokenizer::{self, LexError, Token};
use crate::parser::{Parser, SyntaxError};
use crate::semantic::SemanticTranslator;
use crate::target_codegen;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum CompileError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl CompileError {
    /// Pipeline stage the error came from, used for diagnostics.
    pub fn stage(&self) -> &'static str {
        match self {
            CompileError::Lex(_) => "Lexer",
            CompileError::Syntax(_) => "Parser",
            CompileError::Runtime(_) => "Interpreter",
        }
    }

    /// 1-based source line, when the stage knows it.
    pub fn line(&self) -> Option<usize> {
        match self {
            CompileError::Lex(e) => Some(e.line),
            CompileError::Syntax(e) => e.line,
            CompileError::Runtime(_) => None,
        }
    }
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let tokens = lexer_tokenizer::tokenize(source)?;
    debug!(tokens = tokens.len(), "lexing done");
    Ok(tokens)
}

pub fn parse(tokens: &[Token]) -> Result<Program, SyntaxError> {
    let program = Parser::new(tokens).parse_program()?;
    debug!(statements = program.body.len(), "parsing done");
    Ok(program)
}

pub fn translate(program: &Program) -> Vec<Instruction> {
    let code = SemanticTranslator::new().translate(program);
    debug!(instructions = code.len(), "translation done");
    code
}

pub fn generate_target_code(code: &[Instruction]) -> String {
    target_codegen::generate_target_code(code)
}

/// Runs against stdin for `lire`.
pub fn interpret(program: &Program) -> Result<String, RuntimeError> {
    interpret_with_input(program, &mut StdinInput)
}

pub fn interpret_with_input(program: &Program, input: &mut dyn InputSource) -> Result<String, RuntimeError> {
    let output = Interpreter::new(input).run(program)?;
    debug!(bytes = output.len(), "interpretation done");
    Ok(output)
}

pub fn parse_source(source: &str) -> Result<Program, CompileError> {
    let tokens = tokenize(source)?;
    Ok(parse(&tokens)?)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Compilation {
    pub intermediate_code: Vec<Instruction>,
    pub target_code: String,
}

pub fn compile_source(source: &str) -> Result<Compilation, CompileError> {
    let program = parse_source(source)?;
    let intermediate_code = translate(&program);
    let target_code = generate_target_code(&intermediate_code);
    Ok(Compilation {
        intermediate_code,
        target_code,
    })
}

pub fn run_source(source: &str, input: &mut dyn InputSource) -> Result<String, CompileError> {
    let program = parse_source(source)?;
    Ok(interpret_with_input(&program, input)?)
}

#[derive(Debug, Serialize)]
pub struct TokensResponse<'a> {
    pub tokens: &'a [Token],
}

#[derive(Debug, Serialize)]
pub struct AstResponse<'a> {
    pub ast: &'a Program,
}

#[derive(Debug, Serialize)]
pub struct OutputResponse<'a> {
    pub output: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&CompileError> for ErrorResponse {
    fn from(e: &CompileError) -> Self {
        ErrorResponse { error: e.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::ScriptedInput;

    #[test]
    fn errors_keep_their_stage() {
        let lex = parse_source("main { @ }").unwrap_err();
        assert_eq!(lex.stage(), "Lexer");
        assert_eq!(lex.line(), Some(1));

        let syntax = parse_source("main {\n afficher(1)\n}").unwrap_err();
        assert_eq!(syntax.stage(), "Parser");
        assert_eq!(syntax.line(), Some(3));

        let runtime = run_source("main { x = 1; }", &mut ScriptedInput::default()).unwrap_err();
        assert_eq!(runtime.stage(), "Interpreter");
    }

    #[test]
    fn compile_source_returns_both_forms() {
        let compilation = compile_source("main { afficher(7); }").unwrap();
        assert_eq!(compilation.intermediate_code.len(), 2);
        assert_eq!(compilation.target_code, "t1 = 7.0\nprint(t1)");
        let json = serde_json::to_value(&compilation).unwrap();
        assert_eq!(json["intermediate_code"][1]["op"], "PRINT");
    }

    #[test]
    fn error_envelope() {
        let err = run_source("main { afficher(1 / 0); }", &mut ScriptedInput::default()).unwrap_err();
        let json = serde_json::to_string(&ErrorResponse::from(&err)).unwrap();
        assert!(json.contains("Division by zero"));
    }
}
