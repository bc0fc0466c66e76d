// src/expr/mod.rs

//! Infix expression handling built on the shunting-yard algorithm.
//!
//! - [`shunting_yard`] converts infix token streams to RPN or to an [`Ast`]
//!   and evaluates RPN.
//! - [`ast`] holds the tree form and its lazy evaluator.
//! - [`arithmetic`] and [`logical`] are concrete operator sets with lexers.
//!
//! Operators plug in through the [`Operator`] trait; everything else is
//! generic over it.

use std::cmp::Ordering;
use std::fmt::{Debug, Display};

pub mod arithmetic;
pub mod ast;
pub mod error;
pub(crate) mod lexer;
pub mod logical;
pub mod shunting_yard;
pub mod token;

pub use ast::Ast;
pub use error::{EvalError, ParseError};
pub use shunting_yard::{evaluate_rpn, infix_to_ast, infix_to_rpn};
pub use token::{Token, render_rpn};

/// Number of operands an operator consumes. Unary operators are prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Unary,
    Binary,
}

impl Arity {
    pub const fn operand_count(self) -> usize {
        match self {
            Arity::Unary => 1,
            Arity::Binary => 2,
        }
    }
}

/// How operators of equal precedence group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

/// An operator usable by the shunting-yard conversion and the evaluators.
pub trait Operator: Clone + Debug + Display {
    /// Type of operands and results.
    type Value: Clone + Debug + Display;

    fn arity(&self) -> Arity;

    fn associativity(&self) -> Associativity;

    /// Binding strength; higher binds tighter.
    fn precedence(&self) -> i32;

    fn compare_precedence(&self, other: &Self) -> Ordering {
        self.precedence().cmp(&other.precedence())
    }

    /// Apply the operator to already evaluated operands, in source order.
    /// `operands.len()` always equals the operator's operand count.
    fn apply(&self, operands: &[Self::Value]) -> Result<Self::Value, EvalError>;

    /// Apply the operator to unevaluated children.
    ///
    /// The default evaluates every child; short-circuiting operators
    /// override this to skip children they do not need.
    fn apply_lazy(&self, children: &[Ast<Self>]) -> Result<Self::Value, EvalError> {
        let operands = children
            .iter()
            .map(Ast::<Self>::evaluate)
            .collect::<Result<Vec<_>, _>>()?;
        self.apply(&operands)
    }
}
