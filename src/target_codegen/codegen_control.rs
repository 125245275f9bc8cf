//jumps and labels

use super::operand;
use crate::intermediate_ir::Instruction;

pub fn codegen_if_false(instr: &Instruction) -> Vec<String> {
    vec![
        format!("if not {}:", operand(&instr.arg1)),
        format!("    goto {}", operand(&instr.result)),
    ]
}

pub fn codegen_goto(instr: &Instruction) -> String {
    format!("goto {}", operand(&instr.result))
}

pub fn codegen_label(instr: &Instruction) -> String {
    format!("label {}:", operand(&instr.result))
}
