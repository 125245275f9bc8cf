//print and read

use super::operand;
use crate::intermediate_ir::Instruction;

pub fn codegen_print(instr: &Instruction) -> String {
    format!("print({})", operand(&instr.arg1))
}

pub fn codegen_read(instr: &Instruction) -> String {
    format!("{} = input()", operand(&instr.result))
}
