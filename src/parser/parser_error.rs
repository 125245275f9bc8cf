//syntax errors, the parser aborts on the first one
//and main.rs renders it with the offending source line

use crate::lexer_tokenizer::Token;
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxError {
    pub message: String,
    pub line: Option<usize>,
    pub column: Option<usize>,
    pub suggestion: Option<String>,
}

impl SyntaxError {
    pub fn new(message: String, line: Option<usize>, column: Option<usize>, suggestion: Option<String>) -> Self {
        SyntaxError {
            message,
            line,
            column,
            suggestion,
        }
    }

    pub fn at(token: &Token, message: String) -> Self {
        SyntaxError::new(message, Some(token.line), Some(token.column), None)
    }

    pub fn eof(message: String) -> Self {
        SyntaxError::new(message, None, None, None)
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl Display for SyntaxError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let (Some(line), Some(column)) = (self.line, self.column) {
            write!(f, " (line {}, column {})", line, column)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, ". Suggestion: {}", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for SyntaxError {}

pub type ParseResult<T> = Result<T, SyntaxError>;
