//parsing statements, dispatch on the lookahead token

use crate::ast::*;
use crate::lexer_tokenizer::TokenKind;
use crate::parser::{
    parser_error::{ParseResult, SyntaxError},
    parser_kernel::Parser,
};

impl<'a> Parser<'a> {
    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        let Some(token) = self.current() else {
            return Err(SyntaxError::eof(
                "[ERR-SYN-003] Unexpected end of input. Expected a statement.".to_string(),
            ));
        };
        match token.kind {
            TokenKind::Int | TokenKind::Float => self.parse_variable(),
            TokenKind::Print => self.parse_print(),
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::Read => self.parse_read(),
            TokenKind::Identifier => self.parse_assignment(),
            other => Err(SyntaxError::at(
                token,
                format!(
                    "[ERR-SYN-020] Unexpected token {} '{}'. Expected a valid statement.",
                    other.name(),
                    token.lexeme
                ),
            )
            .with_suggestion(
                "statements start with nombre, crêpe, afficher, macaron, tour_eiffel, lire or a variable name",
            )),
        }
    }

    fn parse_variable(&mut self) -> ParseResult<Statement> {
        let var_type = match self.current_kind() {
            Some(TokenKind::Int) => VarType::Int,
            _ => VarType::Float,
        };
        self.advance();
        let name = self
            .expect(TokenKind::Identifier, &format!("after {}", var_type.name().to_lowercase()))?
            .lexeme
            .clone();

        let value = if self.match_token(TokenKind::Assign) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        self.expect(TokenKind::EndStr, "after variable declaration")?;

        Ok(Statement::VariableDeclaration {
            var_type,
            name,
            value,
        })
    }

    fn parse_assignment(&mut self) -> ParseResult<Statement> {
        let name = self
            .expect(TokenKind::Identifier, "at start of assignment")?
            .lexeme
            .clone();
        self.expect(TokenKind::Assign, &format!("after variable name '{}'", name))?;
        let value = self.parse_expr()?;
        self.expect(TokenKind::EndStr, "after assignment")?;
        Ok(Statement::Assignment { name, value })
    }

    fn parse_print(&mut self) -> ParseResult<Statement> {
        self.expect(TokenKind::Print, "")?;
        self.expect(TokenKind::LParen, "after 'afficher'")?;
        let expression = self.parse_expr()?;
        self.expect(TokenKind::RParen, "after expression")?;
        self.expect(TokenKind::EndStr, "after print statement")?;
        Ok(Statement::Print { expression })
    }

    // (condition) after a control keyword
    fn parse_condition(&mut self, keyword: &str) -> ParseResult<Expr> {
        self.expect(TokenKind::LParen, &format!("after '{}'", keyword))?;
        let condition = self.parse_expr()?;
        self.expect(TokenKind::RParen, "after condition")?;
        Ok(condition)
    }

    fn parse_if(&mut self) -> ParseResult<Statement> {
        self.expect(TokenKind::If, "")?;
        let condition = self.parse_condition("macaron")?;
        self.expect(TokenKind::LBrace, "after condition")?;
        let consequent = self.parse_block_body("after if block")?;

        let alternate = if self.match_token(TokenKind::Else) {
            self.expect(TokenKind::LBrace, "after 'autre'")?;
            Some(self.parse_block_body("after else block")?)
        } else {
            None
        };

        Ok(Statement::IfStatement {
            condition,
            consequent,
            alternate,
        })
    }

    fn parse_while(&mut self) -> ParseResult<Statement> {
        self.expect(TokenKind::While, "")?;
        let condition = self.parse_condition("tour_eiffel")?;
        self.expect(TokenKind::LBrace, "after condition")?;
        let body = self.parse_block_body("after while block")?;
        Ok(Statement::WhileLoop { condition, body })
    }

    fn parse_read(&mut self) -> ParseResult<Statement> {
        self.expect(TokenKind::Read, "")?;
        self.expect(TokenKind::LParen, "after 'lire'")?;
        let variable = self
            .expect(TokenKind::Identifier, "as variable name in read statement")?
            .lexeme
            .clone();
        self.expect(TokenKind::RParen, "after variable name")?;
        self.expect(TokenKind::EndStr, "after read statement")?;
        Ok(Statement::Read { variable })
    }
}
