// src/expr/shunting_yard.rs

//! Shunting-yard conversion of infix token streams.
//!
//! Operands go straight to the output. A binary operator first pops every
//! stacked operator that binds tighter (or equally tight, when the incoming
//! operator is left-associative) and then pushes itself. Unary operators are
//! prefix and are pushed without popping. Parentheses bracket
//! sub-expressions and must balance.
//!
//! The same pass feeds two kinds of output: a flat RPN token list, or a
//! tree built by attaching popped operators to the operands below them.

use std::cmp::Ordering;

use tracing::debug;

use crate::expr::{Arity, Associativity, Ast, EvalError, Operator, ParseError, Token};

/// Where the conversion sends operands and operators, in RPN order.
trait Output<O: Operator> {
    fn operand(&mut self, value: O::Value);

    fn operator(&mut self, operator: O) -> Result<(), ParseError>;
}

impl<O: Operator> Output<O> for Vec<Token<O>> {
    fn operand(&mut self, value: O::Value) {
        self.push(Token::Operand(value));
    }

    fn operator(&mut self, operator: O) -> Result<(), ParseError> {
        self.push(Token::Operator(operator));
        Ok(())
    }
}

impl<O: Operator> Output<O> for Vec<Ast<O>> {
    fn operand(&mut self, value: O::Value) {
        self.push(Ast::Leaf(value));
    }

    fn operator(&mut self, operator: O) -> Result<(), ParseError> {
        let count = operator.arity().operand_count();
        if self.len() < count {
            return Err(ParseError::MissingOperand {
                operator: operator.to_string(),
            });
        }
        let children = self.split_off(self.len() - count);
        self.push(Ast::Node { operator, children });
        Ok(())
    }
}

#[derive(Debug)]
enum Stacked<O> {
    Operator(O),
    LeftParen,
}

fn pops_before<O: Operator>(stacked: &O, incoming: &O) -> bool {
    match stacked.compare_precedence(incoming) {
        Ordering::Greater => true,
        Ordering::Equal => incoming.associativity() == Associativity::Left,
        Ordering::Less => false,
    }
}

fn shunt<O, I, S>(tokens: I, output: &mut S) -> Result<(), ParseError>
where
    O: Operator,
    I: IntoIterator<Item = Token<O>>,
    S: Output<O>,
{
    let mut stack: Vec<Stacked<O>> = Vec::new();

    for token in tokens {
        match token {
            Token::Operand(value) => output.operand(value),
            Token::Operator(op) => {
                if op.arity() == Arity::Binary {
                    while let Some(Stacked::Operator(top)) = stack.last() {
                        if !pops_before(top, &op) {
                            break;
                        }
                        if let Some(Stacked::Operator(top)) = stack.pop() {
                            output.operator(top)?;
                        }
                    }
                }
                stack.push(Stacked::Operator(op));
            }
            Token::LeftParen => stack.push(Stacked::LeftParen),
            Token::RightParen => loop {
                match stack.pop() {
                    Some(Stacked::Operator(op)) => output.operator(op)?,
                    Some(Stacked::LeftParen) => break,
                    None => return Err(ParseError::UnbalancedRightParenthesis),
                }
            },
        }
    }

    while let Some(entry) = stack.pop() {
        match entry {
            Stacked::Operator(op) => output.operator(op)?,
            Stacked::LeftParen => return Err(ParseError::UnbalancedLeftParenthesis),
        }
    }

    Ok(())
}

/// Convert infix tokens to Reverse Polish Notation.
///
/// The result contains only operands and operators.
pub fn infix_to_rpn<O, I>(tokens: I) -> Result<Vec<Token<O>>, ParseError>
where
    O: Operator,
    I: IntoIterator<Item = Token<O>>,
{
    let mut rpn: Vec<Token<O>> = Vec::new();
    shunt(tokens, &mut rpn)?;
    debug!(len = rpn.len(), "converted infix expression to RPN");
    Ok(rpn)
}

/// Convert infix tokens to an expression tree.
pub fn infix_to_ast<O, I>(tokens: I) -> Result<Ast<O>, ParseError>
where
    O: Operator,
    I: IntoIterator<Item = Token<O>>,
{
    let mut nodes: Vec<Ast<O>> = Vec::new();
    shunt(tokens, &mut nodes)?;

    match nodes.len() {
        0 => Err(ParseError::EmptyExpression),
        1 => nodes.pop().ok_or(ParseError::EmptyExpression),
        stack_size => Err(ParseError::MalformedExpression { stack_size }),
    }
}

/// Evaluate an RPN token list with a single value stack.
pub fn evaluate_rpn<O: Operator>(rpn: &[Token<O>]) -> Result<O::Value, EvalError> {
    if rpn.is_empty() {
        return Err(ParseError::EmptyExpression.into());
    }

    let mut stack: Vec<O::Value> = Vec::new();

    for token in rpn {
        match token {
            Token::Operand(value) => stack.push(value.clone()),
            Token::Operator(op) => {
                let count = op.arity().operand_count();
                if stack.len() < count {
                    return Err(ParseError::MissingOperand {
                        operator: op.to_string(),
                    }
                    .into());
                }
                let operands = stack.split_off(stack.len() - count);
                stack.push(op.apply(&operands)?);
            }
            Token::LeftParen | Token::RightParen => {
                return Err(ParseError::UnexpectedToken {
                    token: token.to_string(),
                }
                .into());
            }
        }
    }

    if stack.len() != 1 {
        return Err(ParseError::MalformedExpression {
            stack_size: stack.len(),
        }
        .into());
    }
    stack.pop().ok_or_else(|| ParseError::EmptyExpression.into())
}
