//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including error types, cursor helpers, and the main parse entry points.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, cursor helpers, and coordination
//! - `statements`: Parsing statements (blocks, `if`, expression statements)
//! - `declarations`: Parsing `let` statements and their declarations
//! - `expressions`: Parsing expressions with precedence climbing
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state.
//!
//! Unlike the lexer, the parser fails fast: the first syntax error is returned
//! and no partial tree is produced.

use crate::parser::ast::*;
use crate::parser::lexer::{tokenize, Token, TokenKind};
use std::fmt;

/// Parser error type
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The current token cannot start or continue any production
    UnexpectedToken {
        found: TokenKind,
        text: String,
        location: SourceLocation,
    },

    /// A specific token kind was required but another was found
    ExpectedToken {
        expected: TokenKind,
        found: TokenKind,
        location: SourceLocation,
    },

    /// Left-hand side of `=`, `+=`, ... is not a bare identifier
    InvalidAssignmentTarget { location: SourceLocation },

    /// Numeric literal that does not fit its AST representation
    InvalidNumberLiteral {
        literal: String,
        location: SourceLocation,
    },
}

impl ParseError {
    /// Location of the offending token
    pub fn location(&self) -> SourceLocation {
        match self {
            ParseError::UnexpectedToken { location, .. }
            | ParseError::ExpectedToken { location, .. }
            | ParseError::InvalidAssignmentTarget { location }
            | ParseError::InvalidNumberLiteral { location, .. } => *location,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ", self.location())?;
        match self {
            ParseError::UnexpectedToken { found, text, .. } => {
                if text.is_empty() {
                    write!(f, "Unexpected token: {}", found)
                } else {
                    write!(f, "Unexpected token: {} '{}'", found, text)
                }
            }
            ParseError::ExpectedToken {
                expected, found, ..
            } => write!(f, "Expected {}, but got {}", expected, found),
            ParseError::InvalidAssignmentTarget { .. } => {
                write!(f, "Invalid left-hand side in assignment expression")
            }
            ParseError::InvalidNumberLiteral { literal, .. } => {
                write!(f, "Invalid number literal: {}", literal)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a token stream into a [`Program`].
pub fn parse(tokens: Vec<Token>) -> Result<Program, ParseError> {
    Parser::new(tokens).parse_program()
}

/// Tokenize and parse `source` in one call.
pub fn parse_source(source: &str) -> Result<Program, ParseError> {
    Parser::from_source(source).parse_program()
}

/// Recursive descent parser for offside
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
}

impl Parser {
    /// Create a parser over `tokens`. A stream that does not end in EOF gets
    /// one appended, so the cursor always has a token to look at.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::Eof) {
            let location = tokens
                .last()
                .map(|t| t.location)
                .unwrap_or(SourceLocation::new(1, 1));
            tokens.push(Token::new(TokenKind::Eof, "", location));
        }

        Self {
            tokens,
            position: 0,
        }
    }

    pub fn from_source(source: &str) -> Self {
        Self::new(tokenize(source))
    }

    /// Parse the entire program (top-level statements up to EOF)
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut program = Program::new();
        program.statements = self.parse_statements(TokenKind::Eof)?;
        Ok(program)
    }

    // ===== Cursor helpers =====

    /// Peek: does the current token have this kind?
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Consume the current token if it has this kind.
    pub(crate) fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of the given kind or fail with `ExpectedToken`.
    pub(crate) fn eat(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::ExpectedToken {
                expected: kind,
                found: self.peek().kind,
                location: self.current_location(),
            })
        }
    }

    /// Step past the current token unconditionally. EOF is never stepped past.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !self.is_at_end() {
            self.position += 1;
        }
        token
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.position + 1 >= self.tokens.len()
    }

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.peek().location
    }

    pub(crate) fn unexpected(&self) -> ParseError {
        let token = self.peek();
        ParseError::UnexpectedToken {
            found: token.kind,
            text: token.text.clone(),
            location: token.location,
        }
    }
}
