use crate::expression::ast::Expression;

/// Build an expression in terms of the default variable `x`
///
/// The composer receives `x` and returns whatever it builds from it, so callers never
/// restate the variable.
///
/// # Examples
///
/// ```
/// use exprdiff::expression;
///
/// let cubic = expression(|x| x.clone() * x.clone() * x + 1.0);
/// assert_eq!(cubic.to_string(), "(((x * x) * x) + 1.0)");
/// ```
pub fn expression<F>(compose: F) -> Expression
where
    F: FnOnce(Expression) -> Expression,
{
    compose(Expression::default_variable())
}
