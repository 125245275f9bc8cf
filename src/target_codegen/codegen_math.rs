//declarations, copies and binary operations

use super::operand;
use crate::ast::BinaryOperator;
use crate::intermediate_ir::Instruction;

pub fn codegen_declare(instr: &Instruction) -> String {
    format!("{} = {}", operand(&instr.result), operand(&instr.arg2))
}

pub fn codegen_assign(instr: &Instruction) -> String {
    format!("{} = {}", operand(&instr.result), operand(&instr.arg1))
}

pub fn codegen_binary(instr: &Instruction, operator: BinaryOperator) -> String {
    format!(
        "{} = {} {} {}",
        operand(&instr.result),
        operand(&instr.arg1),
        operator.symbol(),
        operand(&instr.arg2)
    )
}
