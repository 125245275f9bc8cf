//crepe: lexer, parser, three-address translator and interpreter
//for a small French-keyword teaching language

pub mod ast;
pub mod intermediate_ir;
pub mod interpreter;
pub mod lexer_tokenizer;
pub mod parser;
pub mod pipeline;
pub mod semantic;
pub mod target_codegen;

pub use pipeline::{
    CompileError, Compilation, compile_source, generate_target_code, interpret, interpret_with_input,
    parse, parse_source, run_source, tokenize, translate,
};
