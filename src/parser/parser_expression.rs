//parsing expressions, precedence from low to high:
//one optional comparison, then + -, then * /, then primaries

use crate::ast::{BinaryOperator, Expr};
use crate::lexer_tokenizer::TokenKind;
use crate::parser::{
    parser_error::{ParseResult, SyntaxError},
    parser_kernel::Parser,
};

impl<'a> Parser<'a> {
    pub fn parse_expr(&mut self) -> ParseResult<Expr> {
        self.parse_comparison()
    }

    // Non-associative, a second comparison is left for the caller to reject
    fn parse_comparison(&mut self) -> ParseResult<Expr> {
        let left = self.parse_additive()?;
        let op = self
            .current_kind()
            .and_then(binary_operator)
            .filter(BinaryOperator::is_relational);
        match op {
            Some(op) => {
                self.advance();
                let right = self.parse_additive()?;
                Ok(Expr::binary(op, left, right))
            }
            None => Ok(left),
        }
    }

    fn parse_additive(&mut self) -> ParseResult<Expr> {
        let mut result = self.parse_multiplicative()?;
        while let Some(op) = self
            .current_kind()
            .and_then(binary_operator)
            .filter(BinaryOperator::is_additive)
        {
            self.advance();
            let right = self.parse_multiplicative()?;
            result = Expr::binary(op, result, right);
        }
        Ok(result)
    }

    fn parse_multiplicative(&mut self) -> ParseResult<Expr> {
        let mut result = self.parse_primary()?;
        while let Some(op) = self
            .current_kind()
            .and_then(binary_operator)
            .filter(BinaryOperator::is_multiplicative)
        {
            self.advance();
            let right = self.parse_primary()?;
            result = Expr::binary(op, result, right);
        }
        Ok(result)
    }

    pub fn parse_primary(&mut self) -> ParseResult<Expr> {
        let Some(token) = self.current() else {
            return Err(SyntaxError::eof(
                "[ERR-SYN-005] Unexpected end of input. Expected an expression.".to_string(),
            ));
        };
        match token.kind {
            TokenKind::IntegerConst | TokenKind::FloatConst => {
                let value = token.lexeme.parse::<f64>().map_err(|_| {
                    SyntaxError::at(
                        token,
                        format!("[ERR-SYN-006] Malformed number literal '{}'", token.lexeme),
                    )
                })?;
                self.advance();
                Ok(Expr::Number { value })
            }
            TokenKind::StringLiteral => {
                self.advance();
                let value = token
                    .lexeme
                    .strip_prefix('"')
                    .and_then(|s| s.strip_suffix('"'))
                    .unwrap_or(&token.lexeme)
                    .to_string();
                Ok(Expr::String { value })
            }
            TokenKind::Identifier => {
                self.advance();
                Ok(Expr::identifier(token.lexeme.clone()))
            }
            TokenKind::LParen => {
                self.advance();
                let expr = self.parse_expr()?;
                self.expect(TokenKind::RParen, "to close the parenthesized expression")?;
                Ok(expr)
            }
            other => Err(SyntaxError::at(
                token,
                format!(
                    "[ERR-SYN-004] Unexpected token {} '{}' in expression",
                    other.name(),
                    token.lexeme
                ),
            )
            .with_suggestion("Expected a number, string, identifier, or parenthesized expression.")),
        }
    }
}

fn binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Equal => Some(BinaryOperator::Eq),
        TokenKind::NotEqual => Some(BinaryOperator::Ne),
        TokenKind::Less => Some(BinaryOperator::Lt),
        TokenKind::Greater => Some(BinaryOperator::Gt),
        TokenKind::LessEqual => Some(BinaryOperator::Le),
        TokenKind::GreaterEqual => Some(BinaryOperator::Ge),
        TokenKind::Plus => Some(BinaryOperator::Plus),
        TokenKind::Minus => Some(BinaryOperator::Minus),
        TokenKind::Star => Some(BinaryOperator::Mult),
        TokenKind::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
