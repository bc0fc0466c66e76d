use std::cell::Cell;
use std::fmt;

use helpkit::expr::arithmetic::{self, ArithmeticOperator};
use helpkit::expr::{
    Arity, Associativity, Ast, EvalError, Operator, ParseError, Token, evaluate_rpn, infix_to_ast,
    infix_to_rpn, render_rpn,
};

const SAMPLE: &str = "( - 8 + 7 ) * ( 6 / 5 ) ** ( 4 + 3 ) ** 2 + 1";

fn sample_value() -> f64 {
    (-8.0f64 + 7.0) * (6.0f64 / 5.0).powf((4.0f64 + 3.0).powf(2.0)) + 1.0
}

fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_sample_to_rpn() {
    let rpn = arithmetic::to_rpn(SAMPLE).unwrap();

    assert_eq!(render_rpn(&rpn), "8 - 7 + 6 5 / 4 3 + 2 ** ** * 1 +");
}

#[test]
fn test_sample_evaluates_through_rpn_and_ast() {
    let via_rpn = arithmetic::evaluate(SAMPLE).unwrap();
    let via_ast = arithmetic::parse(SAMPLE).unwrap().evaluate().unwrap();

    assert_close(via_rpn, sample_value());
    assert_close(via_ast, sample_value());
}

#[test]
fn test_tokens_without_spaces() {
    let rpn = arithmetic::to_rpn("(-8+7)*(6/5)**(4+3)**2+1").unwrap();

    assert_eq!(render_rpn(&rpn), "8 - 7 + 6 5 / 4 3 + 2 ** ** * 1 +");
}

#[test]
fn test_associativity_and_precedence() {
    assert_eq!(arithmetic::evaluate("2 ** 3 ** 2").unwrap(), 512.0);
    assert_eq!(arithmetic::evaluate("10 - 4 - 3").unwrap(), 3.0);
    assert_eq!(arithmetic::evaluate("- 2 ** 2").unwrap(), -4.0);
    assert_eq!(arithmetic::evaluate("2 * - 3").unwrap(), -6.0);
    assert_eq!(arithmetic::evaluate("1 + 2 * 3").unwrap(), 7.0);
    assert_eq!(arithmetic::evaluate("7 % 4").unwrap(), 3.0);
    assert_eq!(arithmetic::evaluate("- - 5").unwrap(), 5.0);
}

#[test]
fn test_ast_shape() {
    let ast = arithmetic::parse("1 + 2 * - 3").unwrap();

    assert_eq!(ast.to_string(), "(1 + (2 * (-3)))");
    assert_eq!(
        ast.leaves().into_iter().copied().collect::<Vec<_>>(),
        vec![1.0, 2.0, 3.0]
    );
}

#[test]
fn test_unbalanced_parentheses_fail_in_both_paths() {
    for (input, expected) in [
        ("( 1 + 2", ParseError::UnbalancedLeftParenthesis),
        ("1 + 2 )", ParseError::UnbalancedRightParenthesis),
        ("( ( 1 )", ParseError::UnbalancedLeftParenthesis),
        (") 1 (", ParseError::UnbalancedRightParenthesis),
    ] {
        assert_eq!(arithmetic::to_rpn(input).unwrap_err(), expected, "rpn: {input}");
        assert_eq!(arithmetic::parse(input).unwrap_err(), expected, "ast: {input}");
    }
}

#[test]
fn test_malformed_rpn_reports_stack_size() {
    let rpn: Vec<Token<ArithmeticOperator>> = vec![
        Token::Operand(1.0),
        Token::Operand(2.0),
        Token::Operand(3.0),
        Token::Operator(ArithmeticOperator::Add),
    ];

    let err = evaluate_rpn(&rpn).unwrap_err();

    assert_eq!(
        err,
        EvalError::Parse(ParseError::MalformedExpression { stack_size: 2 })
    );
    assert!(err.to_string().contains("2 values"));
}

#[test]
fn test_missing_operand() {
    let expected = ParseError::MissingOperand {
        operator: "+".to_string(),
    };

    assert_eq!(
        arithmetic::evaluate("1 +").unwrap_err(),
        EvalError::Parse(expected.clone())
    );
    assert_eq!(arithmetic::parse("1 +").unwrap_err(), expected);
}

#[test]
fn test_adjacent_operands_are_malformed() {
    assert_eq!(
        arithmetic::parse("1 2").unwrap_err(),
        ParseError::MalformedExpression { stack_size: 2 }
    );
}

#[test]
fn test_empty_expression() {
    assert_eq!(arithmetic::parse("   ").unwrap_err(), ParseError::EmptyExpression);
    assert_eq!(
        arithmetic::evaluate("").unwrap_err(),
        EvalError::Parse(ParseError::EmptyExpression)
    );
}

#[test]
fn test_parenthesis_in_rpn_is_rejected() {
    let rpn: Vec<Token<ArithmeticOperator>> = vec![Token::LeftParen, Token::Operand(1.0)];

    assert!(matches!(
        evaluate_rpn(&rpn),
        Err(EvalError::Parse(ParseError::UnexpectedToken { .. }))
    ));
}

#[test]
fn test_unexpected_character() {
    assert_eq!(
        arithmetic::tokenize("1 + x").unwrap_err(),
        ParseError::UnexpectedCharacter {
            position: 4,
            found: 'x'
        }
    );
}

#[test]
fn test_division_by_zero() {
    let err = arithmetic::evaluate("1 / ( 2 - 2 )").unwrap_err();

    assert!(matches!(err, EvalError::InvalidOperation { ref operator, .. } if operator == "/"));
}

// A small operator set used to observe which subtrees get evaluated.

thread_local! {
    static TAPS: Cell<usize> = const { Cell::new(0) };
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Probe {
    /// Unary; counts how often it is applied.
    Tap,
    /// Binary; returns the left value if non-zero without touching the right.
    Either,
    /// Binary; same as `Either` but always evaluates both sides.
    EagerEither,
}

impl fmt::Display for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Probe::Tap => "tap",
            Probe::Either => "?:",
            Probe::EagerEither => "?!",
        })
    }
}

impl Operator for Probe {
    type Value = i64;

    fn arity(&self) -> Arity {
        match self {
            Probe::Tap => Arity::Unary,
            Probe::Either | Probe::EagerEither => Arity::Binary,
        }
    }

    fn associativity(&self) -> Associativity {
        Associativity::Left
    }

    fn precedence(&self) -> i32 {
        match self {
            Probe::Tap => 2,
            Probe::Either | Probe::EagerEither => 1,
        }
    }

    fn apply(&self, operands: &[i64]) -> Result<i64, EvalError> {
        match (self, operands) {
            (Probe::Tap, [x]) => {
                TAPS.with(|t| t.set(t.get() + 1));
                Ok(*x)
            }
            (_, [lhs, rhs]) => Ok(if *lhs != 0 { *lhs } else { *rhs }),
            _ => unreachable!("arity is checked by the evaluator"),
        }
    }

    fn apply_lazy(&self, children: &[Ast<Self>]) -> Result<i64, EvalError> {
        match (self, children) {
            (Probe::Either, [lhs, rhs]) => {
                let lhs = lhs.evaluate()?;
                if lhs != 0 { Ok(lhs) } else { rhs.evaluate() }
            }
            _ => {
                let operands = children
                    .iter()
                    .map(Ast::evaluate)
                    .collect::<Result<Vec<_>, _>>()?;
                self.apply(&operands)
            }
        }
    }
}

fn taps() -> usize {
    TAPS.with(Cell::get)
}

#[test]
fn test_lazy_operator_skips_unneeded_subtree() {
    // 1 ?: tap 5
    let tokens = vec![
        Token::Operand(1),
        Token::Operator(Probe::Either),
        Token::Operator(Probe::Tap),
        Token::Operand(5),
    ];
    let ast = infix_to_ast(tokens).unwrap();

    let before = taps();
    assert_eq!(ast.evaluate().unwrap(), 1);
    assert_eq!(taps(), before);
}

#[test]
fn test_eager_operator_evaluates_every_child() {
    let tokens = vec![
        Token::Operand(1),
        Token::Operator(Probe::EagerEither),
        Token::Operator(Probe::Tap),
        Token::Operand(5),
    ];
    let ast = infix_to_ast(tokens).unwrap();

    let before = taps();
    assert_eq!(ast.evaluate().unwrap(), 1);
    assert_eq!(taps(), before + 1);
}

#[test]
fn test_generic_rpn_for_custom_operators() {
    let tokens = vec![
        Token::Operator(Probe::Tap),
        Token::Operand(0),
        Token::Operator(Probe::Either),
        Token::Operand(7),
    ];
    let rpn = infix_to_rpn(tokens).unwrap();

    assert_eq!(render_rpn(&rpn), "0 tap 7 ?:");
    assert_eq!(evaluate_rpn(&rpn).unwrap(), 7);
}
