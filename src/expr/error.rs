// src/expr/error.rs

use thiserror::Error;

/// Errors raised while turning text or infix tokens into RPN / an AST.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unbalanced left parenthesis: '(' is never closed")]
    UnbalancedLeftParenthesis,

    #[error("unbalanced right parenthesis: ')' has no matching '('")]
    UnbalancedRightParenthesis,

    /// The final evaluation stack did not hold exactly one value.
    #[error("malformed expression: {stack_size} values left on the stack")]
    MalformedExpression { stack_size: usize },

    #[error("operator '{operator}' is missing an operand")]
    MissingOperand { operator: String },

    /// A token that cannot appear in the given form (e.g. a parenthesis in RPN).
    #[error("unexpected token '{token}'")]
    UnexpectedToken { token: String },

    #[error("unexpected character '{found}' at position {position}")]
    UnexpectedCharacter { position: usize, found: char },

    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    #[error("unknown identifier '{0}'")]
    UnknownIdentifier(String),

    #[error("empty expression")]
    EmptyExpression,
}

/// Errors raised while evaluating RPN or an AST.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("cannot apply '{operator}': {reason}")]
    InvalidOperation { operator: String, reason: String },
}

impl EvalError {
    pub(crate) fn invalid(operator: impl ToString, reason: impl Into<String>) -> Self {
        EvalError::InvalidOperation {
            operator: operator.to_string(),
            reason: reason.into(),
        }
    }
}
