//! Statement parsing implementation
//!
//! This module handles parsing of all offside statement types:
//!
//! - Blocks: an INDENT, any number of statements, and the matching DEDENT
//! - Variable statements: `let x, y = 42` (see `declarations`)
//! - Conditionals: `if cond then stmt [else stmt]`
//! - Expression statements
//!
//! # Grammar
//!
//! ```text
//! statement ::= block | variable_stmt | if_stmt | expr_stmt
//! block     ::= INDENT statement* DEDENT
//! if_stmt   ::= "if" expression "then" statement ["else" statement]
//! expr_stmt ::= expression
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse statements until `stop` is the current token (not consumed)
    pub(crate) fn parse_statements(&mut self, stop: TokenKind) -> Result<Vec<Statement>, ParseError> {
        let mut statements = Vec::new();

        while !self.check(stop) {
            statements.push(self.parse_statement()?);
        }

        Ok(statements)
    }

    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        match self.peek().kind {
            TokenKind::Indent => self.parse_block_statement(),
            TokenKind::Let => self.parse_variable_statement(),
            TokenKind::If => self.parse_if_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parse an indented block. `INDENT DEDENT` is an empty block.
    pub(crate) fn parse_block_statement(&mut self) -> Result<Statement, ParseError> {
        self.eat(TokenKind::Indent)?;
        let statements = self.parse_statements(TokenKind::Dedent)?;
        self.eat(TokenKind::Dedent)?;

        Ok(Statement::Block { statements })
    }

    /// Parse if statement
    pub(crate) fn parse_if_statement(&mut self) -> Result<Statement, ParseError> {
        self.eat(TokenKind::If)?;
        let condition = self.parse_expression()?;
        self.eat(TokenKind::Then)?;

        let consequent = Box::new(self.parse_statement()?);

        let alternate = if self.match_token(TokenKind::Else) {
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };

        Ok(Statement::If {
            condition,
            consequent,
            alternate,
        })
    }

    pub(crate) fn parse_expression_statement(&mut self) -> Result<Statement, ParseError> {
        let expression = self.parse_expression()?;
        Ok(Statement::Expression { expression })
    }
}
