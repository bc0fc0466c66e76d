// src/expr/ast.rs

use std::fmt;

use crate::expr::{Arity, EvalError, Operator};

/// Expression tree produced by [`infix_to_ast`](crate::expr::infix_to_ast).
///
/// `children` of a node are in source order and their count matches the
/// operator's arity.
#[derive(Debug, Clone, PartialEq)]
pub enum Ast<O: Operator> {
    Leaf(O::Value),
    Node { operator: O, children: Vec<Ast<O>> },
}

impl<O: Operator> Ast<O> {
    /// Evaluate the tree. Children are handed to
    /// [`Operator::apply_lazy`] unevaluated, so operators decide which
    /// subtrees actually run.
    pub fn evaluate(&self) -> Result<O::Value, EvalError> {
        match self {
            Ast::Leaf(value) => Ok(value.clone()),
            Ast::Node { operator, children } => operator.apply_lazy(children),
        }
    }

    /// Leaf values in left-to-right order.
    pub fn leaves(&self) -> Vec<&O::Value> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Ast::Leaf(value) => out.push(value),
                Ast::Node { children, .. } => stack.extend(children.iter().rev()),
            }
        }
        out
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Ast::Leaf(_))
    }
}

/// Fully parenthesised infix rendering.
impl<O: Operator> fmt::Display for Ast<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ast::Leaf(value) => write!(f, "{value}"),
            Ast::Node { operator, children } => match (operator.arity(), children.as_slice()) {
                (Arity::Unary, [operand]) => write!(f, "({operator}{operand})"),
                (Arity::Binary, [lhs, rhs]) => write!(f, "({lhs} {operator} {rhs})"),
                _ => {
                    write!(f, "({operator}")?;
                    for child in children {
                        write!(f, " {child}")?;
                    }
                    f.write_str(")")
                }
            },
        }
    }
}
