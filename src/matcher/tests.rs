use crate::expression::{Expression, expression};
use crate::matcher::Matcher;

fn x() -> Expression {
    Expression::variable("x")
}

fn c(value: f64) -> Expression {
    Expression::constant(value)
}

#[test]
fn test_atomic_predicates() {
    let constant = Matcher::new(|m| m.constant());
    assert!(constant.matches(&c(3.0)));
    assert!(!constant.matches(&x()));
    assert!(!constant.matches(&(c(1.0) + c(2.0))));

    let variable = Matcher::new(|m| m.variable());
    assert!(variable.matches(&x()));
    assert!(variable.matches(&Expression::variable("y")));
    assert!(!variable.matches(&c(3.0)));
}

#[test]
fn test_constant_times_variable() {
    let matcher = Matcher::new(|m| m.constant() * m.variable());

    assert!(matcher.matches(&(c(2.0) * x())));
    assert!(!matcher.matches(&(x() * x())));
    assert!(matcher.matches(&(x() * c(2.0))));
}

#[test]
fn test_combinator_checks_root_kind() {
    let product = Matcher::new(|m| m.constant() * m.variable());
    assert!(!product.matches(&(c(2.0) + x())));
    assert!(!product.matches(&(c(2.0) - x())));
    assert!(!product.matches(&(c(2.0) / x())));
    assert!(!product.matches(&c(2.0).pow(x())));

    let sum = Matcher::new(|m| m.variable() + m.constant());
    assert!(sum.matches(&(x() + 1.0)));
    assert!(sum.matches(&(1.0 + x())));
    assert!(!sum.matches(&(x() * 1.0)));
    assert!(!sum.matches(&(x() + x())));
}

#[test]
fn test_nested_combinators() {
    // Matches the original test expression shape: (c * x) * x + c, up to operand order
    let matcher = Matcher::new(|m| (m.constant() * m.variable()) + m.constant());

    assert!(matcher.matches(&(c(2.0) * x() + 1.0)));
    assert!(matcher.matches(&(1.0 + x() * 2.0)));
    assert!(!matcher.matches(&(x() * x() + 1.0)));

    let expr = expression(|x| x.clone() * 2.0 * x + 1.0);
    assert!(!matcher.matches(&expr));

    let deeper = Matcher::new(|m| ((m.constant() * m.variable()) * m.variable()) + m.constant());
    assert!(deeper.matches(&expr));
}

#[test]
fn test_matching_is_shallow() {
    let matcher = Matcher::new(|m| m.constant() * m.variable());
    let wrapped = (c(2.0) * x()) + 1.0;
    assert!(!matcher.matches(&wrapped));

    // Callers search by applying the matcher at each node themselves
    fn any_node(expr: &Expression, matcher: &Matcher) -> bool {
        matcher.matches(expr)
            || expr
                .as_binary()
                .is_some_and(|(_, l, r)| any_node(l, matcher) || any_node(r, matcher))
    }
    assert!(any_node(&wrapped, &matcher));
}

#[test]
fn test_display_describes_shape() {
    let matcher = Matcher::new(|m| (m.constant() * m.variable()) + m.constant());
    assert_eq!(matcher.to_string(), "((constant * variable) + constant)");
}

#[test]
fn test_into_fn() {
    let is_scaled = Matcher::new(|m| m.constant() * m.variable()).into_fn();
    let candidates = [c(2.0) * x(), x() * x(), x() * 3.0, x()];
    let matched: Vec<bool> = candidates.iter().map(&is_scaled).collect();
    assert_eq!(matched, vec![true, false, true, false]);
}
