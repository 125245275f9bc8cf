//lowers the AST into three-address code,
//temporaries and labels come from counters owned by one translator,
//so two translations never share names state

use crate::ast::*;
use crate::intermediate_ir::{Instruction, OpCode};
use tracing::trace;

#[derive(Debug, Default)]
pub struct SemanticTranslator {
    code: Vec<Instruction>,
    temp_counter: usize,
    label_counter: usize,
}

impl SemanticTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translate(mut self, program: &Program) -> Vec<Instruction> {
        for stmt in &program.body {
            self.translate_statement(stmt);
        }
        self.code
    }

    fn new_temp(&mut self) -> String {
        self.temp_counter += 1;
        format!("t{}", self.temp_counter)
    }

    fn new_label(&mut self) -> String {
        self.label_counter += 1;
        format!("L{}", self.label_counter)
    }

    fn emit(&mut self, op: OpCode, arg1: Option<String>, arg2: Option<String>, result: Option<String>) {
        let instruction = Instruction::new(op, arg1, arg2, result);
        trace!(%instruction, "emit");
        self.code.push(instruction);
    }

    // Returns the operand naming the expression's value: a temporary or a variable name
    fn translate_expression(&mut self, expr: &Expr) -> String {
        match expr {
            Expr::BinaryOperation {
                operator,
                left,
                right,
            } => {
                let left_operand = self.translate_expression(left);
                let right_operand = self.translate_expression(right);
                let result = self.new_temp();
                self.emit(
                    OpCode::from(*operator),
                    Some(left_operand),
                    Some(right_operand),
                    Some(result.clone()),
                );
                result
            }
            Expr::Number { value } => {
                let temp = self.new_temp();
                self.emit(OpCode::Assign, Some(format_number(*value)), None, Some(temp.clone()));
                temp
            }
            Expr::String { value } => {
                let temp = self.new_temp();
                self.emit(OpCode::Assign, Some(format!("\"{}\"", value)), None, Some(temp.clone()));
                temp
            }
            Expr::Identifier { name } => name.clone(),
        }
    }

    fn translate_block(&mut self, statements: &[Statement]) {
        for stmt in statements {
            self.translate_statement(stmt);
        }
    }

    fn translate_statement(&mut self, stmt: &Statement) {
        match stmt {
            Statement::VariableDeclaration {
                var_type,
                name,
                value,
            } => {
                let initial = match value {
                    Some(expr) => self.translate_expression(expr),
                    None => "0".to_string(),
                };
                self.emit(
                    OpCode::Declare,
                    Some(var_type.name().to_string()),
                    Some(initial),
                    Some(name.clone()),
                );
            }
            Statement::Assignment { name, value } => {
                let operand = self.translate_expression(value);
                self.emit(OpCode::Assign, Some(operand), None, Some(name.clone()));
            }
            Statement::Print { expression } => {
                let operand = self.translate_expression(expression);
                self.emit(OpCode::Print, Some(operand), None, None);
            }
            Statement::IfStatement {
                condition,
                consequent,
                alternate,
            } => {
                let condition_operand = self.translate_expression(condition);
                let else_label = self.new_label();
                let end_label = self.new_label();

                self.emit(OpCode::IfFalse, Some(condition_operand), None, Some(else_label.clone()));
                self.translate_block(consequent);
                self.emit(OpCode::Goto, None, None, Some(end_label.clone()));
                self.emit(OpCode::Label, None, None, Some(else_label));
                if let Some(alternate) = alternate {
                    self.translate_block(alternate);
                }
                self.emit(OpCode::Label, None, None, Some(end_label));
            }
            Statement::WhileLoop { condition, body } => {
                let start_label = self.new_label();
                let end_label = self.new_label();

                self.emit(OpCode::Label, None, None, Some(start_label.clone()));
                let condition_operand = self.translate_expression(condition);
                self.emit(OpCode::IfFalse, Some(condition_operand), None, Some(end_label.clone()));
                self.translate_block(body);
                self.emit(OpCode::Goto, None, None, Some(start_label));
                self.emit(OpCode::Label, None, None, Some(end_label));
            }
            Statement::Read { variable } => {
                self.emit(OpCode::Read, None, None, Some(variable.clone()));
            }
        }
    }
}
