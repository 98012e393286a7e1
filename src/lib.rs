//! exprdiff - Symbolic expression trees
//!
//! This library builds immutable arithmetic expression trees over named variables and
//! offers three things on top of them: differentiation with respect to a variable, a
//! one-pass algebraic simplifier, and shallow shape matching.
//!
//! Every operation is a pure recursion over the input tree, so trees can be shared freely
//! across threads. Recursion depth equals [`Expression::depth`]; very deep trees can
//! exhaust the stack.

pub mod expression;
pub mod matcher;
pub mod utils;

// Re-export the main public API
pub use expression::constants::{DEFAULT_MAX_SIMPLIFY_PASSES, DEFAULT_VARIABLE};
pub use expression::{
    BinaryOperator, DerivativeError, Expression, Settled, UnsupportedReason, expression,
};
pub use matcher::{Matcher, MatcherScope, Predicate};

/// Differentiate `expr` with respect to `variable` and simplify the result until it settles
///
/// # Errors
///
/// Returns [`DerivativeError::UnsupportedDerivative`] when the expression contains a
/// division or a power the differentiation rules do not cover.
///
/// # Examples
///
/// ```
/// use exprdiff::{expression, simplified_derivative};
///
/// let cubic = expression(|x| x.pow(3.0) + 1.0);
/// match simplified_derivative(&cubic, "x") {
///     Ok(derivative) => assert_eq!(derivative.to_string(), "((x ^ 2.0) * 3.0)"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn simplified_derivative(
    expr: &Expression,
    variable: &str,
) -> Result<Expression, DerivativeError> {
    Ok(expr.differentiate_wrt(variable)?.simplify_fully())
}
