//three-address code, the flat form the AST is lowered into,
//no blocks and no scopes, jumps go to LABEL instructions

use crate::ast::BinaryOperator;
use serde::Serialize;
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OpCode {
    Declare,
    Plus,
    Minus,
    Mult,
    Div,
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
    Assign,
    IfFalse,
    Goto,
    Label,
    Print,
    Read,
}

impl OpCode {
    pub fn name(&self) -> &'static str {
        match self {
            OpCode::Declare => "DECLARE",
            OpCode::Plus => "PLUS",
            OpCode::Minus => "MINUS",
            OpCode::Mult => "MULT",
            OpCode::Div => "DIV",
            OpCode::Eq => "EQ",
            OpCode::Ne => "NE",
            OpCode::Lt => "LT",
            OpCode::Gt => "GT",
            OpCode::Le => "LE",
            OpCode::Ge => "GE",
            OpCode::Assign => "ASSIGN",
            OpCode::IfFalse => "IF_FALSE",
            OpCode::Goto => "GOTO",
            OpCode::Label => "LABEL",
            OpCode::Print => "PRINT",
            OpCode::Read => "READ",
        }
    }
}

impl From<BinaryOperator> for OpCode {
    fn from(op: BinaryOperator) -> Self {
        match op {
            BinaryOperator::Plus => OpCode::Plus,
            BinaryOperator::Minus => OpCode::Minus,
            BinaryOperator::Mult => OpCode::Mult,
            BinaryOperator::Div => OpCode::Div,
            BinaryOperator::Eq => OpCode::Eq,
            BinaryOperator::Ne => OpCode::Ne,
            BinaryOperator::Lt => OpCode::Lt,
            BinaryOperator::Gt => OpCode::Gt,
            BinaryOperator::Le => OpCode::Le,
            BinaryOperator::Ge => OpCode::Ge,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instruction {
    pub op: OpCode,
    pub arg1: Option<String>,
    pub arg2: Option<String>,
    pub result: Option<String>,
}

impl Instruction {
    pub fn new(op: OpCode, arg1: Option<String>, arg2: Option<String>, result: Option<String>) -> Self {
        Instruction {
            op,
            arg1,
            arg2,
            result,
        }
    }
}

// Tabular form used by the CLI listing
impl Display for Instruction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let field = |v: &Option<String>| v.clone().unwrap_or_else(|| "_".to_string());
        write!(
            f,
            "{:<9} {:<10} {:<10} {}",
            self.op.name(),
            field(&self.arg1),
            field(&self.arg2),
            field(&self.result)
        )
    }
}
