use thiserror::Error;

use crate::expression::ast::Expression;

/// Errors that can occur during differentiation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DerivativeError {
    #[error("Unsupported derivative of {expression} with respect to {variable}: {reason}")]
    UnsupportedDerivative {
        expression: Box<Expression>,
        variable: String,
        reason: UnsupportedReason,
    },
}

/// Why a node could not be differentiated
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedReason {
    #[error("quotient rule is not implemented")]
    Division,
    #[error("only the differentiation variable raised to a nonzero constant is supported")]
    GeneralPower,
}

impl DerivativeError {
    /// The node whose derivative could not be computed
    pub fn expression(&self) -> &Expression {
        match self {
            DerivativeError::UnsupportedDerivative { expression, .. } => expression,
        }
    }
}
