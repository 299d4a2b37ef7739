//! # Introduction
//!
//! offside is the front end of a small indentation-sensitive scripting
//! language: a tokenizer that turns source text into a token stream with
//! synthesized INDENT/DEDENT markers, and a recursive-descent parser that turns
//! that stream into an AST.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → AST → (external renderer)
//! ```
//!
//! 1. [`parser::lexer`]: never fails; unknown characters become
//!    [`TokenKind::Illegal`] tokens.
//! 2. [`parser::parse`]: fails fast with a [`ParseError`] carrying the
//!    offending line and column.
//! 3. [`parser::ast`]: immutable tree of [`Statement`] and [`Expression`]
//!    nodes; `Display` gives a deterministic one-line rendering.
//! 4. [`parser::json`]: `{type, data}` tagged-tree encoding.
//!
//! Both passes are pure functions of their input and keep no global state.
//!
//! ```
//! let program = offside::parse_source("let x, y = 42").unwrap();
//! assert_eq!(
//!     program.to_string(),
//!     "Program([VariableStatement([VariableDeclaration(x, None), VariableDeclaration(y, 42)])])"
//! );
//! ```

pub mod parser;

pub use parser::ast::{
    AssignmentOperator, BinaryOperator, Expression, Identifier, LogicalOperator, Program,
    SourceLocation, Statement, VariableDeclaration,
};
pub use parser::lexer::{tokenize, Lexer, Token, TokenKind};
pub use parser::parse::{parse, parse_source, ParseError, Parser};
