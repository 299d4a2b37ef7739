//! Declaration parsing implementation
//!
//! This module handles `let` statements:
//!
//! - Bare declarations: `let x`
//! - Initialized declarations: `let x = 40 + 2`
//! - Declaration lists: `let x, y = 42`
//!
//! # Grammar
//!
//! ```text
//! variable_stmt ::= "let" var_decl ("," var_decl)*
//! var_decl      ::= identifier ["=" assignment]
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse variable statement: let decl, decl, ...
    pub(crate) fn parse_variable_statement(&mut self) -> Result<Statement, ParseError> {
        self.eat(TokenKind::Let)?;

        let mut declarations = vec![self.parse_variable_declaration()?];
        while self.match_token(TokenKind::Comma) {
            declarations.push(self.parse_variable_declaration()?);
        }

        Ok(Statement::Variable { declarations })
    }

    /// Parse a single declaration with its optional initializer
    pub(crate) fn parse_variable_declaration(&mut self) -> Result<VariableDeclaration, ParseError> {
        let identifier = self.parse_identifier()?;

        let initializer = if self.match_token(TokenKind::Assign) {
            Some(self.parse_assignment()?)
        } else {
            None
        };

        Ok(VariableDeclaration {
            identifier,
            initializer,
        })
    }

    pub(crate) fn parse_identifier(&mut self) -> Result<Identifier, ParseError> {
        let token = self.eat(TokenKind::Ident)?;
        Ok(Identifier::new(token.text))
    }
}
