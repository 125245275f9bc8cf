//AST (abstract syntax tree) is what the code turns into after parsing
//its a tree structure that shows the syntactic structure of the program
//the tree is never mutated after the parser builds it,
//serialization gives the {type: ..., fields} projection

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VarType {
    #[serde(rename = "INT")]
    Int,
    #[serde(rename = "FLOAT")]
    Float,
}

impl VarType {
    pub fn name(&self) -> &'static str {
        match self {
            VarType::Int => "INT",
            VarType::Float => "FLOAT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BinaryOperator {
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
}

impl BinaryOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Plus => "+",
            BinaryOperator::Minus => "-",
            BinaryOperator::Mult => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Eq => "==",
            BinaryOperator::Ne => "!=",
            BinaryOperator::Lt => "<",
            BinaryOperator::Gt => ">",
            BinaryOperator::Le => "<=",
            BinaryOperator::Ge => ">=",
        }
    }

    pub fn is_relational(&self) -> bool {
        matches!(
            self,
            BinaryOperator::Eq
                | BinaryOperator::Ne
                | BinaryOperator::Lt
                | BinaryOperator::Gt
                | BinaryOperator::Le
                | BinaryOperator::Ge
        )
    }

    pub fn is_additive(&self) -> bool {
        matches!(self, BinaryOperator::Plus | BinaryOperator::Minus)
    }

    pub fn is_multiplicative(&self) -> bool {
        matches!(self, BinaryOperator::Mult | BinaryOperator::Div)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Expr {
    BinaryOperation {
        operator: BinaryOperator,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Number {
        value: f64,
    },
    String {
        value: String,
    },
    Identifier {
        name: String,
    },
}

impl Expr {
    pub fn binary(operator: BinaryOperator, left: Expr, right: Expr) -> Self {
        Expr::BinaryOperation {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn number(value: f64) -> Self {
        Expr::Number { value }
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Expr::Identifier { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Statement {
    VariableDeclaration {
        var_type: VarType,
        name: String,
        value: Option<Expr>,
    },
    Assignment {
        name: String,
        value: Expr,
    },
    Print {
        expression: Expr,
    },
    IfStatement {
        condition: Expr,
        consequent: Vec<Statement>,
        alternate: Option<Vec<Statement>>,
    },
    WhileLoop {
        condition: Expr,
        body: Vec<Statement>,
    },
    Read {
        variable: String,
    },
}

// Numbers print with at least one fractional digit: 5.0, 2.5, 1e-07, 1e+16
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_infinite() {
        let sign = if value > 0.0 { "" } else { "-" };
        format!("{}inf", sign)
    } else if value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        widen_exponent(format!("{:?}", value))
    }
}

// `1e-5` becomes `1e-05` and `1e16` becomes `1e+16`
fn widen_exponent(text: String) -> String {
    let Some((mantissa, exponent)) = text.split_once('e') else {
        return text;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("+", exponent),
    };
    format!("{}e{}{:0>2}", mantissa, sign, digits)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "program")]
pub struct Program {
    pub body: Vec<Statement>,
}
