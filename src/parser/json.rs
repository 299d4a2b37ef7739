//! Tagged-tree JSON encoding
//!
//! Renders the AST for external consumers. Every node becomes
//! `{"type": "<NodeName>", "data": {<fields>}}`; absent optional children are
//! `null` and operators are their normalized text (`is` appears as `"=="`).
//! Tokens are dumped through their `Serialize` impl as flat
//! `{"kind", "text", "line", "column"}` records.

use crate::parser::ast::*;
use crate::parser::lexer::Token;
use serde_json::{json, Value};

fn node(kind: &str, data: Value) -> Value {
    json!({ "type": kind, "data": data })
}

/// Encode a whole program.
pub fn program_to_json(program: &Program) -> Value {
    node(
        "Program",
        json!({ "statements": statements_to_json(&program.statements) }),
    )
}

fn statements_to_json(statements: &[Statement]) -> Vec<Value> {
    statements.iter().map(statement_to_json).collect()
}

pub fn statement_to_json(statement: &Statement) -> Value {
    match statement {
        Statement::Block { statements } => node(
            "BlockStatement",
            json!({ "statements": statements_to_json(statements) }),
        ),
        Statement::Variable { declarations } => {
            let declarations: Vec<Value> = declarations.iter().map(declaration_to_json).collect();
            node("VariableStatement", json!({ "declarations": declarations }))
        }
        Statement::If {
            condition,
            consequent,
            alternate,
        } => node(
            "IfStatement",
            json!({
                "condition": expression_to_json(condition),
                "consequent": statement_to_json(consequent),
                "alternate": alternate.as_deref().map(statement_to_json),
            }),
        ),
        Statement::Expression { expression } => node(
            "ExpressionStatement",
            json!({ "expression": expression_to_json(expression) }),
        ),
    }
}

fn declaration_to_json(declaration: &VariableDeclaration) -> Value {
    node(
        "VariableDeclaration",
        json!({
            "identifier": identifier_to_json(&declaration.identifier),
            "initializer": declaration.initializer.as_ref().map(expression_to_json),
        }),
    )
}

fn identifier_to_json(identifier: &Identifier) -> Value {
    node("Identifier", json!({ "name": identifier.name }))
}

pub fn expression_to_json(expression: &Expression) -> Value {
    match expression {
        Expression::Assignment {
            operator,
            target,
            value,
        } => node(
            "AssignmentExpression",
            json!({
                "operator": operator.as_str(),
                "target": identifier_to_json(target),
                "value": expression_to_json(value),
            }),
        ),
        Expression::Logical {
            operator,
            left,
            right,
        } => node(
            "LogicalExpression",
            json!({
                "operator": operator.as_str(),
                "left": expression_to_json(left),
                "right": expression_to_json(right),
            }),
        ),
        Expression::Binary {
            operator,
            left,
            right,
        } => node(
            "BinaryExpression",
            json!({
                "operator": operator.as_str(),
                "left": expression_to_json(left),
                "right": expression_to_json(right),
            }),
        ),
        Expression::Grouped { inner } => node(
            "GroupedExpression",
            json!({ "inner": expression_to_json(inner) }),
        ),
        Expression::Identifier(identifier) => identifier_to_json(identifier),
        Expression::IntegerLiteral(n) => node("IntegerLiteral", json!({ "value": n })),
        Expression::FloatLiteral(x) => node("FloatLiteral", json!({ "value": x })),
        Expression::StringLiteral(s) => node("StringLiteral", json!({ "value": s })),
        Expression::BoolLiteral(b) => node("BoolLiteral", json!({ "value": b })),
        Expression::NullLiteral => node("NullLiteral", json!({})),
    }
}

/// Encode a token stream, e.g. for a diagnostic dump.
pub fn tokens_to_json(tokens: &[Token]) -> Result<Value, serde_json::Error> {
    serde_json::to_value(tokens)
}
