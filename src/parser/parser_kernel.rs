//all parser state and the top-level program rule

use crate::ast::*;
use crate::lexer_tokenizer::{Token, TokenKind};
use crate::parser::parser_error::{ParseResult, SyntaxError};

pub struct Parser<'a> {
    pub tokens: &'a [Token],
    pub pos: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    pub fn current_kind(&self) -> Option<TokenKind> {
        self.current().map(|t| t.kind)
    }

    pub fn advance(&mut self) {
        self.pos += 1;
    }

    pub fn match_token(&mut self, expected: TokenKind) -> bool {
        if self.current_kind() == Some(expected) {
            self.advance();
            return true;
        }
        false
    }

    // Consumes the expected token or fails naming what was found instead
    pub fn expect(&mut self, expected: TokenKind, context: &str) -> ParseResult<&'a Token> {
        match self.current() {
            Some(token) if token.kind == expected => {
                self.advance();
                Ok(token)
            }
            Some(token) => Err(SyntaxError::at(
                token,
                format!(
                    "[ERR-SYN-010] Expected {} {}, found {} '{}'",
                    expected.name(),
                    context,
                    token.kind.name(),
                    token.lexeme
                ),
            )),
            None => Err(SyntaxError::eof(format!(
                "[ERR-SYN-011] Expected {} {}, found end of input",
                expected.name(),
                context
            ))),
        }
    }

    pub fn parse_program(&mut self) -> ParseResult<Program> {
        if self.tokens.is_empty() {
            return Ok(Program { body: Vec::new() });
        }

        if self.current_kind() != Some(TokenKind::Main) {
            let token = &self.tokens[self.pos];
            return Err(SyntaxError::at(
                token,
                format!(
                    "[ERR-SYN-001] Program must start with 'main', found {} '{}'",
                    token.kind.name(),
                    token.lexeme
                ),
            )
            .with_suggestion("wrap the program in main { ... }"));
        }
        self.advance();
        self.expect(TokenKind::LBrace, "after 'main'")?;
        let body = self.parse_block_body("at end of program")?;

        if let Some(token) = self.current() {
            return Err(SyntaxError::at(
                token,
                format!(
                    "[ERR-SYN-002] Unexpected {} '{}' after the end of the program",
                    token.kind.name(),
                    token.lexeme
                ),
            ));
        }

        Ok(Program { body })
    }

    // Statements up to and including the closing brace; the opening brace is already consumed
    pub fn parse_block_body(&mut self, context: &str) -> ParseResult<Vec<Statement>> {
        let mut statements = Vec::new();
        while let Some(kind) = self.current_kind() {
            if kind == TokenKind::RBrace {
                break;
            }
            if kind == TokenKind::EndStr {
                self.advance();
                continue;
            }
            statements.push(self.parse_statement()?);
        }
        self.expect(TokenKind::RBrace, context)?;
        Ok(statements)
    }
}
