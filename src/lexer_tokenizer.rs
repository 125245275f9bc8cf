//lexical code analysis,
//it breaks the source text down into tokens
//that are then parsed into the AST
//the pattern table is a logos enum, keywords beat identifiers,
//two-character operators beat their one-character prefixes

use logos::{Lexer, Logos, Skip};
use serde::{Serialize, Serializer};
use thiserror::Error;

// Line bookkeeping carried by the lexer between tokens
#[derive(Debug, Clone, Copy)]
pub struct LineTracker {
    pub line: usize,
    pub line_start: usize,
}

impl Default for LineTracker {
    fn default() -> Self {
        Self {
            line: 1,
            line_start: 0,
        }
    }
}

#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[logos(extras = LineTracker)]
pub enum TokenKind {
    // Keywords
    #[token("main")]
    Main,
    #[token("nombre")]
    Int,
    #[token("crêpe")]
    Float,
    #[token("macaron")]
    If,
    #[token("autre")]
    Else,
    #[token("tour_eiffel")]
    While,
    #[token("lire")]
    Read,
    #[token("afficher")]
    Print,

    // Punctuation
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(";")]
    EndStr,

    // Logic and comparisons
    #[token("==")]
    Equal,
    #[token("!=")]
    NotEqual,
    #[token("<=")]
    LessEqual,
    #[token(">=")]
    GreaterEqual,
    #[token("||")]
    Or,
    #[token("&&")]
    And,
    #[token("=")]
    Assign,
    #[token("<")]
    Less,
    #[token(">")]
    Greater,

    // Arithmetic
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,

    // Names, any Unicode word character after the first letter
    #[regex(r"[a-zA-Z_]\w*")]
    Identifier,

    // Float values
    #[regex(r"[0-9]+\.[0-9]+")]
    FloatConst,

    // Integer values
    #[regex(r"[0-9]+")]
    IntegerConst,

    // Strings
    #[regex(r#""[^"\n]*""#)]
    StringLiteral,

    // Structural, never emitted
    #[token("\n", newline)]
    Newline,
    #[regex(r"[ \t\r]+", logos::skip)]
    Whitespace,
    #[regex(r"#[^\n]*", logos::skip)]
    Comment,
}

fn newline(lex: &mut Lexer<TokenKind>) -> Skip {
    lex.extras.line += 1;
    lex.extras.line_start = lex.span().end;
    Skip
}

// Keyword literals in table order, checked against the front of every word
const KEYWORDS: [(&str, TokenKind); 8] = [
    ("main", TokenKind::Main),
    ("nombre", TokenKind::Int),
    ("crêpe", TokenKind::Float),
    ("macaron", TokenKind::If),
    ("autre", TokenKind::Else),
    ("tour_eiffel", TokenKind::While),
    ("lire", TokenKind::Read),
    ("afficher", TokenKind::Print),
];

impl TokenKind {
    // Wire name of the kind, also used in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Main => "MAIN",
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::Read => "READ",
            TokenKind::Print => "PRINT",
            TokenKind::LParen => "LBRACKET",
            TokenKind::RParen => "RBRACKET",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::EndStr => "PCOMMA",
            TokenKind::Equal => "EQ",
            TokenKind::NotEqual => "NE",
            TokenKind::LessEqual => "LE",
            TokenKind::GreaterEqual => "GE",
            TokenKind::Or => "OR",
            TokenKind::And => "AND",
            TokenKind::Assign => "ATTR",
            TokenKind::Less => "LT",
            TokenKind::Greater => "GT",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "MULT",
            TokenKind::Slash => "DIV",
            TokenKind::Identifier => "ID",
            TokenKind::FloatConst => "FLOAT_CONST",
            TokenKind::IntegerConst => "INTEGER_CONST",
            TokenKind::StringLiteral => "STRING",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Whitespace => "SKIP",
            TokenKind::Comment => "COMMENT",
        }
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// One lexical unit. Field names on the wire follow the `{type, value, line, column}` record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub kind: TokenKind,
    #[serde(rename = "value")]
    pub lexeme: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
            column,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("[ERR-LEX-001] Unexpected character {character:?} on line {line}")]
pub struct LexError {
    pub character: char,
    pub line: usize,
}

// Scans the whole source, stops at the first character no pattern accepts
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let LineTracker { line, line_start } = lexer.extras;
        let column = source[line_start..span.start].chars().count();
        match result {
            Ok(TokenKind::Identifier) => push_word(lexer.slice(), line, column, &mut tokens)?,
            Ok(kind) => tokens.push(Token::new(kind, lexer.slice(), line, column)),
            Err(()) => return Err(unexpected(lexer.slice(), line)),
        }
    }

    Ok(tokens)
}

// Keywords are tried before the identifier pattern, so a word that only starts
// with one is cut right after it and the rest is scanned again: `nombres` is INT, ID
fn push_word(word: &str, line: usize, column: usize, tokens: &mut Vec<Token>) -> Result<(), LexError> {
    let Some((keyword, kind)) = KEYWORDS.iter().find(|(keyword, _)| word.starts_with(keyword)) else {
        tokens.push(Token::new(TokenKind::Identifier, word, line, column));
        return Ok(());
    };
    tokens.push(Token::new(*kind, *keyword, line, column));

    let rest = &word[keyword.len()..];
    let rest_column = column + keyword.chars().count();
    let mut lexer = TokenKind::lexer(rest);
    while let Some(result) = lexer.next() {
        let column = rest_column + rest[..lexer.span().start].chars().count();
        match result {
            Ok(TokenKind::Identifier) => push_word(lexer.slice(), line, column, tokens)?,
            Ok(kind) => tokens.push(Token::new(kind, lexer.slice(), line, column)),
            Err(()) => return Err(unexpected(lexer.slice(), line)),
        }
    }
    Ok(())
}

fn unexpected(slice: &str, line: usize) -> LexError {
    LexError {
        character: slice.chars().next().unwrap_or('\u{FFFD}'),
        line,
    }
}
