use log::debug;

use crate::expression::ast::Expression;
use crate::expression::constants::DEFAULT_VARIABLE;
use crate::expression::errors::{DerivativeError, UnsupportedReason};

fn unsupported(expr: &Expression, variable: &str, reason: UnsupportedReason) -> DerivativeError {
    DerivativeError::UnsupportedDerivative {
        expression: Box::new(expr.clone()),
        variable: variable.to_string(),
        reason,
    }
}

fn derive(expr: &Expression, variable: &str) -> Result<Expression, DerivativeError> {
    match expr {
        Expression::Constant(_) => Ok(Expression::Constant(0.0)),
        Expression::Variable(name) => {
            if name == variable {
                Ok(Expression::Constant(1.0))
            } else {
                Ok(Expression::Constant(0.0))
            }
        }
        Expression::Add(l, r) => {
            let left = derive(l, variable)?;
            let right = derive(r, variable)?;
            Ok(left + right)
        }
        Expression::Sub(l, r) => {
            let left = derive(l, variable)?;
            let right = derive(r, variable)?;
            Ok(left - right)
        }
        Expression::Mul(l, r) => {
            // (f * g)' = f' * g + f * g'
            let left = derive(l, variable)?;
            let right = derive(r, variable)?;
            Ok(left * r.as_ref().clone() + l.as_ref().clone() * right)
        }
        Expression::Div(_, _) => {
            debug!("Quotient rule requested for {}", expr);
            Err(unsupported(expr, variable, UnsupportedReason::Division))
        }
        Expression::Pow(base, exponent) => match exponent.as_constant() {
            Some(k) if base.is_variable_named(variable) && k != 0.0 => {
                // (x ^ k)' = x ^ (k - 1) * k
                Ok(base.as_ref().clone().pow(k - 1.0) * k)
            }
            _ => {
                debug!("Power rule does not cover {} with respect to {}", expr, variable);
                Err(unsupported(expr, variable, UnsupportedReason::GeneralPower))
            }
        },
    }
}

impl Expression {
    /// Differentiate with respect to the default variable `x`
    ///
    /// # Errors
    ///
    /// See [`Expression::differentiate_wrt`].
    pub fn differentiate(&self) -> Result<Expression, DerivativeError> {
        self.differentiate_wrt(DEFAULT_VARIABLE)
    }

    /// Differentiate with respect to `variable`, treating every other variable as a constant
    ///
    /// The result is not simplified.
    ///
    /// # Errors
    ///
    /// Returns [`DerivativeError::UnsupportedDerivative`] if the tree contains:
    /// - a division anywhere
    /// - a power whose base is not `variable` or whose exponent is not a nonzero constant
    ///
    /// No partial derivative is produced in that case.
    pub fn differentiate_wrt(&self, variable: &str) -> Result<Expression, DerivativeError> {
        debug!("Differentiating {} with respect to {}", self, variable);

        let result = derive(self, variable);

        match &result {
            Ok(derivative) => debug!("Derivative: {}", derivative),
            Err(e) => debug!("Differentiation failed: {}", e),
        }

        result
    }
}
