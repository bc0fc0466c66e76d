// src/expr/token.rs

use std::fmt;

use crate::expr::Operator;

/// One element of an infix or RPN token stream.
#[derive(Debug, Clone, PartialEq)]
pub enum Token<O: Operator> {
    Operand(O::Value),
    Operator(O),
    LeftParen,
    RightParen,
}

impl<O: Operator> fmt::Display for Token<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Operand(value) => write!(f, "{value}"),
            Token::Operator(op) => write!(f, "{op}"),
            Token::LeftParen => f.write_str("("),
            Token::RightParen => f.write_str(")"),
        }
    }
}

/// Render a token stream separated by single spaces.
pub fn render_rpn<O: Operator>(tokens: &[Token<O>]) -> String {
    tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
