// src/expr/logical.rs

//! Boolean expressions over named terms, with short-circuit evaluation.
//!
//! Every value carries the names of the terms that decided it. For a true
//! result those names form the "path of truth": the terms a short-circuit
//! evaluator actually needed to prove the expression.
//!
//! - a term contributes itself;
//! - `!x` keeps the terms of `x`;
//! - `a && b` that is false keeps the false side, true keeps both sides;
//! - `a || b` that is true keeps the true side, false keeps both sides.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::expr::lexer::scan;
use crate::expr::{
    Arity, Associativity, Ast, EvalError, Operator, ParseError, Token, infix_to_ast, infix_to_rpn,
};

/// A boolean plus the terms it was derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truth {
    pub value: bool,
    pub terms: Vec<String>,
}

impl Truth {
    /// A named term.
    pub fn term(name: impl Into<String>, value: bool) -> Self {
        Self {
            value,
            terms: vec![name.into()],
        }
    }

    /// An anonymous constant; contributes no terms.
    pub fn literal(value: bool) -> Self {
        Self {
            value,
            terms: Vec::new(),
        }
    }

    fn negated(self) -> Self {
        Self {
            value: !self.value,
            terms: self.terms,
        }
    }

    fn merged(mut self, other: Truth, value: bool) -> Self {
        self.terms.extend(other.terms);
        Self {
            value,
            terms: self.terms,
        }
    }
}

impl fmt::Display for Truth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.terms.as_slice() {
            [name] => f.write_str(name),
            _ => write!(f, "{}", self.value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalOperator {
    Not,
    And,
    Or,
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogicalOperator::Not => "!",
            LogicalOperator::And => "&&",
            LogicalOperator::Or => "||",
        })
    }
}

impl LogicalOperator {
    /// Combine an evaluated left side with a right side that is only
    /// produced when the left side does not decide the result.
    fn combine<F>(self, lhs: Truth, rhs: F) -> Result<Truth, EvalError>
    where
        F: FnOnce() -> Result<Truth, EvalError>,
    {
        match self {
            LogicalOperator::And if !lhs.value => Ok(lhs),
            LogicalOperator::And => {
                let rhs = rhs()?;
                if rhs.value {
                    Ok(lhs.merged(rhs, true))
                } else {
                    Ok(rhs)
                }
            }
            LogicalOperator::Or if lhs.value => Ok(lhs),
            LogicalOperator::Or => {
                let rhs = rhs()?;
                if rhs.value {
                    Ok(rhs)
                } else {
                    Ok(lhs.merged(rhs, false))
                }
            }
            LogicalOperator::Not => Err(EvalError::invalid(self, "not a binary operator")),
        }
    }
}

impl Operator for LogicalOperator {
    type Value = Truth;

    fn arity(&self) -> Arity {
        match self {
            LogicalOperator::Not => Arity::Unary,
            LogicalOperator::And | LogicalOperator::Or => Arity::Binary,
        }
    }

    fn associativity(&self) -> Associativity {
        match self {
            LogicalOperator::Not => Associativity::Right,
            LogicalOperator::And | LogicalOperator::Or => Associativity::Left,
        }
    }

    fn precedence(&self) -> i32 {
        match self {
            LogicalOperator::Or => 1,
            LogicalOperator::And => 2,
            LogicalOperator::Not => 3,
        }
    }

    fn apply(&self, operands: &[Truth]) -> Result<Truth, EvalError> {
        match (self, operands) {
            (LogicalOperator::Not, [x]) => Ok(x.clone().negated()),
            (LogicalOperator::And | LogicalOperator::Or, [lhs, rhs]) => {
                self.combine(lhs.clone(), || Ok(rhs.clone()))
            }
            _ => Err(EvalError::invalid(self, "wrong number of operands")),
        }
    }

    fn apply_lazy(&self, children: &[Ast<Self>]) -> Result<Truth, EvalError> {
        match (self, children) {
            (LogicalOperator::Not, [x]) => Ok(x.evaluate()?.negated()),
            (LogicalOperator::And | LogicalOperator::Or, [lhs, rhs]) => {
                self.combine(lhs.evaluate()?, || rhs.evaluate())
            }
            _ => Err(EvalError::invalid(self, "wrong number of operands")),
        }
    }
}

static LEXEME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z_][A-Za-z0-9_.]*|&&|\|\||!|\(|\))")
        .expect("logical lexeme pattern is valid")
});

/// Split a boolean expression into infix tokens, resolving identifiers
/// against `env`. `true` and `false` are literals.
pub fn tokenize(
    input: &str,
    env: &HashMap<String, bool>,
) -> Result<Vec<Token<LogicalOperator>>, ParseError> {
    scan(input, &LEXEME)?
        .into_iter()
        .map(|lexeme| match lexeme.text {
            "(" => Ok(Token::LeftParen),
            ")" => Ok(Token::RightParen),
            "!" => Ok(Token::Operator(LogicalOperator::Not)),
            "&&" => Ok(Token::Operator(LogicalOperator::And)),
            "||" => Ok(Token::Operator(LogicalOperator::Or)),
            "true" => Ok(Token::Operand(Truth::literal(true))),
            "false" => Ok(Token::Operand(Truth::literal(false))),
            name => env
                .get(name)
                .map(|value| Token::Operand(Truth::term(name, *value)))
                .ok_or_else(|| ParseError::UnknownIdentifier(name.to_string())),
        })
        .collect()
}

/// Tokenize and convert to RPN.
pub fn to_rpn(
    input: &str,
    env: &HashMap<String, bool>,
) -> Result<Vec<Token<LogicalOperator>>, ParseError> {
    infix_to_rpn(tokenize(input, env)?)
}

/// Tokenize and convert to an expression tree.
pub fn parse(input: &str, env: &HashMap<String, bool>) -> Result<Ast<LogicalOperator>, ParseError> {
    infix_to_ast(tokenize(input, env)?)
}

/// Terms that made `ast` true under short-circuit evaluation, or `None`
/// when it evaluates to false.
pub fn path_of_truth(ast: &Ast<LogicalOperator>) -> Result<Option<Vec<String>>, EvalError> {
    let truth = ast.evaluate()?;
    Ok(truth.value.then_some(truth.terms))
}
