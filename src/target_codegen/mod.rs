//target code generation,
//each three-address instruction maps to fixed text lines,
//no analysis happens here

use crate::ast::BinaryOperator;
use crate::intermediate_ir::{Instruction, OpCode};

pub mod codegen_control;
pub mod codegen_io;
pub mod codegen_math;

pub fn codegen_instruction(instr: &Instruction) -> Vec<String> {
    match instr.op {
        OpCode::Declare => vec![codegen_math::codegen_declare(instr)],
        OpCode::Assign => vec![codegen_math::codegen_assign(instr)],
        OpCode::Plus => vec![codegen_math::codegen_binary(instr, BinaryOperator::Plus)],
        OpCode::Minus => vec![codegen_math::codegen_binary(instr, BinaryOperator::Minus)],
        OpCode::Mult => vec![codegen_math::codegen_binary(instr, BinaryOperator::Mult)],
        OpCode::Div => vec![codegen_math::codegen_binary(instr, BinaryOperator::Div)],
        OpCode::Eq => vec![codegen_math::codegen_binary(instr, BinaryOperator::Eq)],
        OpCode::Ne => vec![codegen_math::codegen_binary(instr, BinaryOperator::Ne)],
        OpCode::Lt => vec![codegen_math::codegen_binary(instr, BinaryOperator::Lt)],
        OpCode::Gt => vec![codegen_math::codegen_binary(instr, BinaryOperator::Gt)],
        OpCode::Le => vec![codegen_math::codegen_binary(instr, BinaryOperator::Le)],
        OpCode::Ge => vec![codegen_math::codegen_binary(instr, BinaryOperator::Ge)],
        OpCode::IfFalse => codegen_control::codegen_if_false(instr),
        OpCode::Goto => vec![codegen_control::codegen_goto(instr)],
        OpCode::Label => vec![codegen_control::codegen_label(instr)],
        OpCode::Print => vec![codegen_io::codegen_print(instr)],
        OpCode::Read => vec![codegen_io::codegen_read(instr)],
    }
}

pub fn generate_target_code(code: &[Instruction]) -> String {
    code.iter()
        .flat_map(codegen_instruction)
        .collect::<Vec<_>>()
        .join("\n")
}

// Missing operands render empty, the listing is informational only
pub(crate) fn operand(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instr(op: OpCode, arg1: Option<&str>, arg2: Option<&str>, result: Option<&str>) -> Instruction {
        Instruction::new(
            op,
            arg1.map(str::to_string),
            arg2.map(str::to_string),
            result.map(str::to_string),
        )
    }

    #[test]
    fn listing_for_a_loop() {
        let code = vec![
            instr(OpCode::Assign, Some("10.0"), None, Some("t1")),
            instr(OpCode::Declare, Some("INT"), Some("t1"), Some("x")),
            instr(OpCode::Label, None, None, Some("L1")),
            instr(OpCode::Assign, Some("0.0"), None, Some("t2")),
            instr(OpCode::Gt, Some("x"), Some("t2"), Some("t3")),
            instr(OpCode::IfFalse, Some("t3"), None, Some("L2")),
            instr(OpCode::Print, Some("x"), None, None),
            instr(OpCode::Goto, None, None, Some("L1")),
            instr(OpCode::Label, None, None, Some("L2")),
            instr(OpCode::Read, None, None, Some("x")),
        ];
        assert_eq!(
            generate_target_code(&code),
            "t1 = 10.0\n\
             x = t1\n\
             label L1:\n\
             t2 = 0.0\n\
             t3 = x > t2\n\
             if not t3:\n    goto L2\n\
             print(x)\n\
             goto L1\n\
             label L2:\n\
             x = input()"
        );
    }

    #[test]
    fn every_binary_opcode_prints_its_symbol() {
        let cases = [
            (OpCode::Plus, "+"),
            (OpCode::Minus, "-"),
            (OpCode::Mult, "*"),
            (OpCode::Div, "/"),
            (OpCode::Eq, "=="),
            (OpCode::Ne, "!="),
            (OpCode::Lt, "<"),
            (OpCode::Gt, ">"),
            (OpCode::Le, "<="),
            (OpCode::Ge, ">="),
        ];
        for (op, symbol) in cases {
            let line = generate_target_code(&[instr(op, Some("a"), Some("b"), Some("t1"))]);
            assert_eq!(line, format!("t1 = a {} b", symbol));
        }
    }

    #[test]
    fn empty_program_has_empty_listing() {
        assert_eq!(generate_target_code(&[]), "");
    }
}
