use offside::{parse_source, BinaryOperator, Expression, Statement};

fn expression(source: &str) -> Expression {
    let program = parse_source(source).expect("Parsing failed");
    match program.statements.into_iter().next() {
        Some(Statement::Expression { expression }) => expression,
        other => panic!("Expected expression statement, got {:?}", other),
    }
}

fn int(n: i64) -> Box<Expression> {
    Box::new(Expression::IntegerLiteral(n))
}

fn binary(operator: BinaryOperator, left: Box<Expression>, right: Box<Expression>) -> Box<Expression> {
    Box::new(Expression::Binary {
        operator,
        left,
        right,
    })
}

#[test]
fn test_multiplication_binds_tighter() {
    assert_eq!(
        Box::new(expression("5 + 5 * 5")),
        binary(BinaryOperator::Add, int(5), binary(BinaryOperator::Mul, int(5), int(5)))
    );
    assert_eq!(
        Box::new(expression("5 * 5 + 5")),
        binary(BinaryOperator::Add, binary(BinaryOperator::Mul, int(5), int(5)), int(5))
    );
}

#[test]
fn test_grouping_overrides_precedence() {
    let grouped = Box::new(Expression::Grouped {
        inner: binary(BinaryOperator::Add, int(5), int(5)),
    });

    assert_eq!(
        Box::new(expression("5 * (5 + 5)")),
        binary(BinaryOperator::Mul, int(5), grouped)
    );
}

#[test]
fn test_same_precedence_is_left_associative() {
    assert_eq!(
        expression("1 - 2 - 3").to_string(),
        "BinaryExpression(-, BinaryExpression(-, 1, 2), 3)"
    );
    assert_eq!(
        expression("8 / 4 % 3 * 2").to_string(),
        "BinaryExpression(*, BinaryExpression(%, BinaryExpression(/, 8, 4), 3), 2)"
    );
}

#[test]
fn test_every_arithmetic_operator() {
    for (source, op) in [
        ("5 + 5", "+"),
        ("5 - 5", "-"),
        ("5 * 5", "*"),
        ("5 / 5", "/"),
        ("5 % 5", "%"),
    ] {
        assert_eq!(expression(source).to_string(), format!("BinaryExpression({}, 5, 5)", op));
    }
}

#[test]
fn test_arithmetic_inside_comparison() {
    assert_eq!(
        expression("a + 1 < b * 2").to_string(),
        "BinaryExpression(<, BinaryExpression(+, a, 1), BinaryExpression(*, b, 2))"
    );
}

#[test]
fn test_float_operands() {
    assert_eq!(
        expression("1.5 * 2.0").to_string(),
        "BinaryExpression(*, 1.5, 2.0)"
    );
}
