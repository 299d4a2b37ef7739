//! offside source code parser
//!
//! This module transforms offside source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens, including INDENT/DEDENT)
//! - [`parse`]: Parser entry points, cursor and error type
//! - [`ast`]: AST node definitions and their textual rendering
//! - [`json`]: Tagged-tree JSON encoding for external consumers
//!
//! # Language
//!
//! Blocks are delimited by indentation, as in Python. A line indented deeper
//! than the previous one opens a block; returning to a shallower width closes
//! every block deeper than that width.
//! - Statements: expression statements, `let` declarations, `if ... then ... else`
//! - Expressions: assignment (`= += -= *= /=`), `and`/`or`, comparison,
//!   arithmetic, grouping, literals, identifiers
//! - `is` and `not` are spellings of `==` and `!=`; `&&` and `||` of `and` and `or`
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with precedence climbing for binary operators.
//! No external parser generator dependencies.

pub mod ast;
mod declarations;
mod expressions;
pub mod json;
pub mod lexer;
pub mod parse;
mod statements;
