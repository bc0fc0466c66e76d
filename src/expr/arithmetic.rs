// src/expr/arithmetic.rs

//! Floating point arithmetic over the shunting-yard engine.
//!
//! Precedence, lowest first: `+ -`, `* / %`, unary `-`, `**`.
//! `**` and unary `-` are right-associative, so `- 2 ** 2` is `-(2 ** 2)`
//! and `2 ** 3 ** 2` is `2 ** (3 ** 2)`.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::expr::lexer::scan;
use crate::expr::{
    Arity, Associativity, Ast, EvalError, Operator, ParseError, Token, evaluate_rpn, infix_to_ast,
    infix_to_rpn,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
    Power,
    /// Unary minus. Renders as `-`, like [`ArithmeticOperator::Subtract`].
    Negate,
}

impl fmt::Display for ArithmeticOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            ArithmeticOperator::Add => "+",
            ArithmeticOperator::Subtract | ArithmeticOperator::Negate => "-",
            ArithmeticOperator::Multiply => "*",
            ArithmeticOperator::Divide => "/",
            ArithmeticOperator::Remainder => "%",
            ArithmeticOperator::Power => "**",
        };
        f.write_str(symbol)
    }
}

impl Operator for ArithmeticOperator {
    type Value = f64;

    fn arity(&self) -> Arity {
        match self {
            ArithmeticOperator::Negate => Arity::Unary,
            _ => Arity::Binary,
        }
    }

    fn associativity(&self) -> Associativity {
        match self {
            ArithmeticOperator::Power | ArithmeticOperator::Negate => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    fn precedence(&self) -> i32 {
        match self {
            ArithmeticOperator::Add | ArithmeticOperator::Subtract => 1,
            ArithmeticOperator::Multiply
            | ArithmeticOperator::Divide
            | ArithmeticOperator::Remainder => 2,
            ArithmeticOperator::Negate => 3,
            ArithmeticOperator::Power => 4,
        }
    }

    fn apply(&self, operands: &[f64]) -> Result<f64, EvalError> {
        use ArithmeticOperator::*;

        match (self, operands) {
            (Negate, [x]) => Ok(-x),
            (Add, [a, b]) => Ok(a + b),
            (Subtract, [a, b]) => Ok(a - b),
            (Multiply, [a, b]) => Ok(a * b),
            (Divide | Remainder, [_, b]) if *b == 0.0 => {
                Err(EvalError::invalid(self, "division by zero"))
            }
            (Divide, [a, b]) => Ok(a / b),
            (Remainder, [a, b]) => Ok(a % b),
            (Power, [a, b]) => Ok(a.powf(*b)),
            _ => Err(EvalError::invalid(
                self,
                format!("expected {} operands, got {}", self.arity().operand_count(), operands.len()),
            )),
        }
    }
}

static LEXEME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\d+(?:\.\d+)?(?:[eE][-+]?\d+)?|\.\d+|\*\*|[-+*/%()])")
        .expect("arithmetic lexeme pattern is valid")
});

/// Split an arithmetic expression into infix tokens.
///
/// A `-` is unary when it starts the expression or follows `(` or another
/// operator.
pub fn tokenize(input: &str) -> Result<Vec<Token<ArithmeticOperator>>, ParseError> {
    let mut tokens = Vec::new();
    let mut expect_operand = true;

    for lexeme in scan(input, &LEXEME)? {
        let token = match lexeme.text {
            "(" => Token::LeftParen,
            ")" => Token::RightParen,
            "-" if expect_operand => Token::Operator(ArithmeticOperator::Negate),
            "-" => Token::Operator(ArithmeticOperator::Subtract),
            "+" => Token::Operator(ArithmeticOperator::Add),
            "*" => Token::Operator(ArithmeticOperator::Multiply),
            "/" => Token::Operator(ArithmeticOperator::Divide),
            "%" => Token::Operator(ArithmeticOperator::Remainder),
            "**" => Token::Operator(ArithmeticOperator::Power),
            number => number
                .parse::<f64>()
                .map(Token::Operand)
                .map_err(|_| ParseError::InvalidNumber(number.to_string()))?,
        };
        expect_operand = !matches!(token, Token::Operand(_) | Token::RightParen);
        tokens.push(token);
    }

    Ok(tokens)
}

/// Tokenize and convert to RPN.
pub fn to_rpn(input: &str) -> Result<Vec<Token<ArithmeticOperator>>, ParseError> {
    infix_to_rpn(tokenize(input)?)
}

/// Tokenize and convert to an expression tree.
pub fn parse(input: &str) -> Result<Ast<ArithmeticOperator>, ParseError> {
    infix_to_ast(tokenize(input)?)
}

/// Evaluate an arithmetic expression through its RPN form.
pub fn evaluate(input: &str) -> Result<f64, EvalError> {
    let rpn = to_rpn(input)?;
    evaluate_rpn(&rpn)
}
