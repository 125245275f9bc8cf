#![allow(dead_code)]

use crepe::ast::Program;
use crepe::interpreter::{RuntimeError, ScriptedInput};
use crepe::lexer_tokenizer::Token;

pub fn tokens(source: &str) -> Vec<Token> {
    crepe::tokenize(source).unwrap_or_else(|e| panic!("lexing failed for {source:?}: {e}"))
}

pub fn program(source: &str) -> Program {
    crepe::parse(&tokens(source)).unwrap_or_else(|e| panic!("parsing failed for {source:?}: {e}"))
}

pub fn run(source: &str) -> Result<String, RuntimeError> {
    run_with_input(source, &[])
}

pub fn run_with_input(source: &str, lines: &[&str]) -> Result<String, RuntimeError> {
    let mut input = ScriptedInput::new(lines.iter().copied());
    crepe::interpret_with_input(&program(source), &mut input)
}
