//expression evaluation, both operands are always evaluated

use super::{Interpreter, RuntimeError, RuntimeResult, Value};
use crate::ast::{BinaryOperator, Expr};
use std::cmp::Ordering;

impl<'i> Interpreter<'i> {
    pub fn evaluate(&mut self, expr: &Expr) -> RuntimeResult<Value> {
        match expr {
            Expr::Number { value } => Ok(Value::Number(*value)),
            Expr::String { value } => Ok(Value::Text(value.clone())),
            Expr::Identifier { name } => self
                .variables
                .get(name)
                .cloned()
                .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.clone() }),
            Expr::BinaryOperation {
                operator,
                left,
                right,
            } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                apply_binary(*operator, &left, &right)
            }
        }
    }
}

pub fn apply_binary(op: BinaryOperator, left: &Value, right: &Value) -> RuntimeResult<Value> {
    let unsupported = || RuntimeError::UnsupportedOperands {
        operator: op.symbol(),
        left: left.type_name(),
        right: right.type_name(),
    };

    match op {
        BinaryOperator::Plus => match (left, right) {
            (Value::Text(a), Value::Text(b)) => Ok(Value::Text(format!("{}{}", a, b))),
            _ => arithmetic(left, right, |a, b| a + b).ok_or_else(unsupported),
        },
        BinaryOperator::Minus => arithmetic(left, right, |a, b| a - b).ok_or_else(unsupported),
        BinaryOperator::Mult => arithmetic(left, right, |a, b| a * b).ok_or_else(unsupported),
        BinaryOperator::Div => {
            if right.as_number() == Some(0.0) {
                return Err(RuntimeError::DivisionByZero);
            }
            arithmetic(left, right, |a, b| a / b).ok_or_else(unsupported)
        }
        BinaryOperator::Eq => Ok(Value::Bool(values_equal(left, right))),
        BinaryOperator::Ne => Ok(Value::Bool(!values_equal(left, right))),
        BinaryOperator::Lt | BinaryOperator::Gt | BinaryOperator::Le | BinaryOperator::Ge => {
            let ordering = compare(left, right).ok_or_else(unsupported)?;
            let holds = match op {
                BinaryOperator::Lt => ordering == Ordering::Less,
                BinaryOperator::Gt => ordering == Ordering::Greater,
                BinaryOperator::Le => ordering != Ordering::Greater,
                _ => ordering != Ordering::Less,
            };
            Ok(Value::Bool(holds))
        }
    }
}

fn arithmetic(left: &Value, right: &Value, f: impl Fn(f64, f64) -> f64) -> Option<Value> {
    Some(Value::Number(f(left.as_number()?, right.as_number()?)))
}

fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Text(a), Value::Text(b)) => a == b,
        (Value::Text(_), _) | (_, Value::Text(_)) => false,
        _ => left.as_number() == right.as_number(),
    }
}

// None when the pair has no ordering rule, or a NaN is involved
fn compare(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
        (Value::Text(_), _) | (_, Value::Text(_)) => None,
        _ => left.as_number()?.partial_cmp(&right.as_number()?),
    }
}
