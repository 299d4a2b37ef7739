// AST (Abstract Syntax Tree) definitions for offside programs

use crate::parser::lexer::TokenKind;
use serde::Serialize;
use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Assignment operators (`=` and the compound forms)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentOperator {
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
}

impl AssignmentOperator {
    pub fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Assign => Some(AssignmentOperator::Assign),
            TokenKind::PlusAssign => Some(AssignmentOperator::AddAssign),
            TokenKind::MinusAssign => Some(AssignmentOperator::SubAssign),
            TokenKind::StarAssign => Some(AssignmentOperator::MulAssign),
            TokenKind::SlashAssign => Some(AssignmentOperator::DivAssign),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentOperator::Assign => "=",
            AssignmentOperator::AddAssign => "+=",
            AssignmentOperator::SubAssign => "-=",
            AssignmentOperator::MulAssign => "*=",
            AssignmentOperator::DivAssign => "/=",
        }
    }
}

/// Short-circuit operators. `&&` and `||` normalize to these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperator {
    And,
    Or,
}

impl LogicalOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalOperator::And => "and",
            LogicalOperator::Or => "or",
        }
    }
}

/// Binary operators. `is` normalizes to [`BinaryOperator::Eq`] and `not`
/// to [`BinaryOperator::NotEq`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl BinaryOperator {
    pub fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(BinaryOperator::Add),
            TokenKind::Minus => Some(BinaryOperator::Sub),
            TokenKind::Star => Some(BinaryOperator::Mul),
            TokenKind::Slash => Some(BinaryOperator::Div),
            TokenKind::Percent => Some(BinaryOperator::Mod),
            TokenKind::EqEq | TokenKind::Is => Some(BinaryOperator::Eq),
            TokenKind::NotEq | TokenKind::Not => Some(BinaryOperator::NotEq),
            TokenKind::Lt => Some(BinaryOperator::Lt),
            TokenKind::LtEq => Some(BinaryOperator::LtEq),
            TokenKind::Gt => Some(BinaryOperator::Gt),
            TokenKind::GtEq => Some(BinaryOperator::GtEq),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Mod => "%",
            BinaryOperator::Eq => "==",
            BinaryOperator::NotEq => "!=",
            BinaryOperator::Lt => "<",
            BinaryOperator::LtEq => "<=",
            BinaryOperator::Gt => ">",
            BinaryOperator::GtEq => ">=",
        }
    }
}

/// A bare name. Also the only valid assignment target.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Identifier { name: name.into() }
    }
}

/// One `name [= initializer]` entry of a `let` statement
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub identifier: Identifier,
    pub initializer: Option<Expression>,
}

/// Statement nodes
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// An indented block, delimited by INDENT/DEDENT
    Block {
        statements: Vec<Statement>,
    },
    Variable {
        declarations: Vec<VariableDeclaration>,
    },
    If {
        condition: Expression,
        consequent: Box<Statement>,
        alternate: Option<Box<Statement>>,
    },
    Expression {
        expression: Expression,
    },
}

/// Expression nodes
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Assignment {
        operator: AssignmentOperator,
        target: Identifier,
        value: Box<Expression>,
    },
    Logical {
        operator: LogicalOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Binary {
        operator: BinaryOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    /// Parenthesized expression, kept as its own node
    Grouped {
        inner: Box<Expression>,
    },
    Identifier(Identifier),
    IntegerLiteral(i64),
    FloatLiteral(f64),
    StringLiteral(String),
    BoolLiteral(bool),
    NullLiteral,
}

/// Top-level program structure
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }
}

// ===== Rendering =====
//
// Every node renders to a single deterministic line. Two trees are
// structurally equal iff their renderings are equal.

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    write!(f, "[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, "]")
}

impl fmt::Display for AssignmentOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for VariableDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.initializer {
            Some(init) => write!(f, "VariableDeclaration({}, {})", self.identifier, init),
            None => write!(f, "VariableDeclaration({}, None)", self.identifier),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Block { statements } => {
                write!(f, "Block(")?;
                write_list(f, statements)?;
                write!(f, ")")
            }
            Statement::Variable { declarations } => {
                write!(f, "VariableStatement(")?;
                write_list(f, declarations)?;
                write!(f, ")")
            }
            Statement::If {
                condition,
                consequent,
                alternate,
            } => match alternate {
                Some(alt) => write!(f, "If({}, {}, {})", condition, consequent, alt),
                None => write!(f, "If({}, {}, None)", condition, consequent),
            },
            Statement::Expression { expression } => write!(f, "ExprStmt({})", expression),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Assignment {
                operator,
                target,
                value,
            } => write!(f, "AssignmentExpression({}, {}, {})", operator, target, value),
            Expression::Logical {
                operator,
                left,
                right,
            } => write!(f, "LogicalExpression({}, {}, {})", operator, left, right),
            Expression::Binary {
                operator,
                left,
                right,
            } => write!(f, "BinaryExpression({}, {}, {})", operator, left, right),
            Expression::Grouped { inner } => write!(f, "GroupedExpression({})", inner),
            Expression::Identifier(ident) => write!(f, "{}", ident),
            Expression::IntegerLiteral(n) => write!(f, "{}", n),
            // Debug keeps the fractional part: 1.0 renders as "1.0", not "1"
            Expression::FloatLiteral(x) => write!(f, "{:?}", x),
            Expression::StringLiteral(s) => write!(f, "\"{}\"", s),
            Expression::BoolLiteral(b) => write!(f, "{}", b),
            Expression::NullLiteral => write!(f, "nil"),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Program(")?;
        write_list(f, &self.statements)?;
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> Box<Expression> {
        Box::new(Expression::IntegerLiteral(n))
    }

    #[test]
    fn test_render_binary_expression() {
        let expr = Expression::Binary {
            operator: BinaryOperator::Add,
            left: int(5),
            right: Box::new(Expression::Binary {
                operator: BinaryOperator::Mul,
                left: int(5),
                right: int(5),
            }),
        };

        assert_eq!(
            expr.to_string(),
            "BinaryExpression(+, 5, BinaryExpression(*, 5, 5))"
        );
    }

    #[test]
    fn test_render_nested_blocks() {
        let program = Program {
            statements: vec![
                Statement::Expression {
                    expression: Expression::IntegerLiteral(42),
                },
                Statement::Block {
                    statements: vec![
                        Statement::Expression {
                            expression: Expression::FloatLiteral(3.14),
                        },
                        Statement::Block {
                            statements: vec![Statement::Expression {
                                expression: Expression::StringLiteral("leafeon".to_string()),
                            }],
                        },
                    ],
                },
            ],
        };

        assert_eq!(
            program.to_string(),
            r#"Program([ExprStmt(42), Block([ExprStmt(3.14), Block([ExprStmt("leafeon")])])])"#
        );
    }

    #[test]
    fn test_render_float_keeps_fraction() {
        assert_eq!(Expression::FloatLiteral(1.0).to_string(), "1.0");
    }

    #[test]
    fn test_render_variable_statement() {
        let stmt = Statement::Variable {
            declarations: vec![
                VariableDeclaration {
                    identifier: Identifier::new("x"),
                    initializer: None,
                },
                VariableDeclaration {
                    identifier: Identifier::new("y"),
                    initializer: Some(Expression::IntegerLiteral(42)),
                },
            ],
        };

        assert_eq!(
            stmt.to_string(),
            "VariableStatement([VariableDeclaration(x, None), VariableDeclaration(y, 42)])"
        );
    }

    #[test]
    fn test_operator_normalization() {
        assert_eq!(BinaryOperator::from_kind(TokenKind::Is), Some(BinaryOperator::Eq));
        assert_eq!(BinaryOperator::from_kind(TokenKind::Not), Some(BinaryOperator::NotEq));
        assert_eq!(BinaryOperator::from_kind(TokenKind::Assign), None);
        assert_eq!(
            AssignmentOperator::from_kind(TokenKind::SlashAssign),
            Some(AssignmentOperator::DivAssign)
        );
    }
}
