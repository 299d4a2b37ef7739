//! Expression parsing implementation
//!
//! This module handles parsing of offside expressions using precedence climbing
//! for binary operators and recursive descent for other expression forms.
//!
//! # Precedence (lowest to highest)
//!
//! ```text
//! assignment     ::= logical_or [assign_op assignment]
//! logical_or     ::= logical_and [("or" | "||") logical_and]
//! logical_and    ::= equality [("and" | "&&") equality]
//! equality       ::= relational [("==" | "!=" | "is" | "not") relational]
//! relational     ::= additive [("<" | "<=" | ">" | ">=") additive]
//! additive       ::= multiplicative (("+" | "-") multiplicative)*
//! multiplicative ::= primary (("*" | "/" | "%") primary)*
//! primary        ::= literal | "(" expression ")" | identifier
//! ```
//!
//! Additive and multiplicative levels loop and build left-associative chains.
//! The logical, equality and relational levels apply at most one operator per
//! call, so `a == b == c` is a syntax error rather than a chain.
//! Assignment is right-associative and its target must be a bare identifier.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        self.parse_assignment()
    }

    /// Parse assignment (right-associative)
    pub(crate) fn parse_assignment(&mut self) -> Result<Expression, ParseError> {
        let left = self.parse_logical_or()?;

        let Some(operator) = AssignmentOperator::from_kind(self.peek().kind) else {
            return Ok(left);
        };

        // Target is checked before the right-hand side is parsed
        let target = match left {
            Expression::Identifier(identifier) => identifier,
            _ => {
                return Err(ParseError::InvalidAssignmentTarget {
                    location: self.current_location(),
                });
            }
        };

        self.advance();
        let value = Box::new(self.parse_assignment()?);

        Ok(Expression::Assignment {
            operator,
            target,
            value,
        })
    }

    /// Parse logical OR (or, ||)
    fn parse_logical_or(&mut self) -> Result<Expression, ParseError> {
        let left = self.parse_logical_and()?;

        if self.match_token(TokenKind::Or) {
            let right = self.parse_logical_and()?;
            return Ok(Expression::Logical {
                operator: LogicalOperator::Or,
                left: Box::new(left),
                right: Box::new(right),
            });
        }

        Ok(left)
    }

    /// Parse logical AND (and, &&)
    fn parse_logical_and(&mut self) -> Result<Expression, ParseError> {
        let left = self.parse_equality()?;

        if self.match_token(TokenKind::And) {
            let right = self.parse_equality()?;
            return Ok(Expression::Logical {
                operator: LogicalOperator::And,
                left: Box::new(left),
                right: Box::new(right),
            });
        }

        Ok(left)
    }

    /// Parse equality (== != is not)
    fn parse_equality(&mut self) -> Result<Expression, ParseError> {
        self.parse_single_binary(
            Self::parse_relational,
            &[TokenKind::EqEq, TokenKind::NotEq, TokenKind::Is, TokenKind::Not],
        )
    }

    /// Parse relational (< <= > >=)
    fn parse_relational(&mut self) -> Result<Expression, ParseError> {
        self.parse_single_binary(
            Self::parse_additive,
            &[TokenKind::Lt, TokenKind::LtEq, TokenKind::Gt, TokenKind::GtEq],
        )
    }

    /// Parse additive (+ -)
    fn parse_additive(&mut self) -> Result<Expression, ParseError> {
        self.parse_binary_chain(Self::parse_multiplicative, &[TokenKind::Plus, TokenKind::Minus])
    }

    /// Parse multiplicative (* / %)
    fn parse_multiplicative(&mut self) -> Result<Expression, ParseError> {
        self.parse_binary_chain(
            Self::parse_primary,
            &[TokenKind::Star, TokenKind::Slash, TokenKind::Percent],
        )
    }

    /// One operand, then at most one operator from `ops` and a second operand.
    fn parse_single_binary(
        &mut self,
        operand: fn(&mut Self) -> Result<Expression, ParseError>,
        ops: &[TokenKind],
    ) -> Result<Expression, ParseError> {
        let left = operand(self)?;

        match self.binary_operator(ops) {
            Some(operator) => {
                let right = operand(self)?;
                Ok(Expression::Binary {
                    operator,
                    left: Box::new(left),
                    right: Box::new(right),
                })
            }
            None => Ok(left),
        }
    }

    /// Left-associative chain of operators from `ops`.
    fn parse_binary_chain(
        &mut self,
        operand: fn(&mut Self) -> Result<Expression, ParseError>,
        ops: &[TokenKind],
    ) -> Result<Expression, ParseError> {
        let mut left = operand(self)?;

        while let Some(operator) = self.binary_operator(ops) {
            let right = operand(self)?;
            left = Expression::Binary {
                operator,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Consume the current token if it is one of `ops`, returning its operator.
    fn binary_operator(&mut self, ops: &[TokenKind]) -> Option<BinaryOperator> {
        let kind = self.peek().kind;
        if !ops.contains(&kind) {
            return None;
        }

        let operator = BinaryOperator::from_kind(kind)?;
        self.advance();
        Some(operator)
    }

    /// Parse primary (literals, identifiers, parenthesized expressions)
    fn parse_primary(&mut self) -> Result<Expression, ParseError> {
        match self.peek().kind {
            TokenKind::Int
            | TokenKind::Float
            | TokenKind::String
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Nil => self.parse_literal(),
            TokenKind::LParen => self.parse_grouped_expression(),
            TokenKind::Ident => Ok(Expression::Identifier(self.parse_identifier()?)),
            _ => Err(self.unexpected()),
        }
    }

    fn parse_grouped_expression(&mut self) -> Result<Expression, ParseError> {
        self.eat(TokenKind::LParen)?;
        let inner = Box::new(self.parse_expression()?);
        self.eat(TokenKind::RParen)?;

        Ok(Expression::Grouped { inner })
    }

    fn parse_literal(&mut self) -> Result<Expression, ParseError> {
        let token = self.advance();

        match token.kind {
            TokenKind::Int => token
                .text
                .parse::<i64>()
                .map(Expression::IntegerLiteral)
                .map_err(|_| ParseError::InvalidNumberLiteral {
                    literal: token.text.clone(),
                    location: token.location,
                }),
            // Out-of-range float text rounds to infinity instead of failing
            TokenKind::Float => match token.text.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(Expression::FloatLiteral(value)),
                _ => Err(ParseError::InvalidNumberLiteral {
                    literal: token.text,
                    location: token.location,
                }),
            },
            TokenKind::String => {
                let value = token
                    .text
                    .strip_prefix('"')
                    .and_then(|s| s.strip_suffix('"'))
                    .unwrap_or(&token.text);
                Ok(Expression::StringLiteral(value.to_string()))
            }
            TokenKind::True => Ok(Expression::BoolLiteral(true)),
            TokenKind::False => Ok(Expression::BoolLiteral(false)),
            TokenKind::Nil => Ok(Expression::NullLiteral),
            _ => Err(ParseError::UnexpectedToken {
                found: token.kind,
                text: token.text,
                location: token.location,
            }),
        }
    }
}
