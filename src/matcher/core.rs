use std::fmt;
use std::ops::{Add, Mul};

use log::trace;

use crate::expression::Expression;

type PredicateFn = dyn Fn(&Expression) -> bool + Send + Sync;

/// A shallow test over an expression's shape
///
/// Predicates compose with `+` and `*`, mirroring the tree nodes they recognise.
pub struct Predicate {
    test: Box<PredicateFn>,
    description: String,
}

impl Predicate {
    fn new<F>(description: impl Into<String>, test: F) -> Self
    where
        F: Fn(&Expression) -> bool + Send + Sync + 'static,
    {
        Self {
            test: Box::new(test),
            description: description.into(),
        }
    }

    pub fn matches(&self, expr: &Expression) -> bool {
        (self.test)(expr)
    }

    /// Match either operand order of a binary node picked out by `split`
    fn either_order(
        self,
        other: Predicate,
        symbol: char,
        split: fn(&Expression) -> Option<(&Expression, &Expression)>,
    ) -> Predicate {
        let description = format!("({} {} {})", self.description, symbol, other.description);
        Predicate::new(description, move |expr| match split(expr) {
            Some((l, r)) => {
                (self.matches(l) && other.matches(r)) || (other.matches(l) && self.matches(r))
            }
            None => false,
        })
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Predicate({})", self.description)
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.description)
    }
}

fn split_add(expr: &Expression) -> Option<(&Expression, &Expression)> {
    match expr {
        Expression::Add(l, r) => Some((l.as_ref(), r.as_ref())),
        _ => None,
    }
}

fn split_mul(expr: &Expression) -> Option<(&Expression, &Expression)> {
    match expr {
        Expression::Mul(l, r) => Some((l.as_ref(), r.as_ref())),
        _ => None,
    }
}

impl Add for Predicate {
    type Output = Predicate;

    /// Matches a sum whose operands satisfy `self` and `rhs`, in either order
    fn add(self, rhs: Predicate) -> Predicate {
        self.either_order(rhs, '+', split_add)
    }
}

impl Mul for Predicate {
    type Output = Predicate;

    /// Matches a product whose operands satisfy `self` and `rhs`, in either order
    fn mul(self, rhs: Predicate) -> Predicate {
        self.either_order(rhs, '*', split_mul)
    }
}

/// The vocabulary available while describing a matcher
///
/// Only handed out inside [`Matcher::new`], so these names stay out of the caller's scope.
pub struct MatcherScope {
    _private: (),
}

impl MatcherScope {
    /// Matches any constant
    pub fn constant(&self) -> Predicate {
        Predicate::new("constant", |expr| matches!(expr, Expression::Constant(_)))
    }

    /// Matches any variable
    pub fn variable(&self) -> Predicate {
        Predicate::new("variable", |expr| matches!(expr, Expression::Variable(_)))
    }
}

/// Tests whether an expression's root has a given shape
///
/// Matching is shallow: only the root and whatever the composed predicates inspect of its
/// immediate children. To find a shape anywhere in a tree, apply the matcher at every node.
///
/// # Examples
///
/// ```
/// use exprdiff::{Expression, Matcher};
///
/// let scaled = Matcher::new(|m| m.constant() * m.variable());
/// assert!(scaled.matches(&(2.0 * Expression::variable("x"))));
/// assert!(scaled.matches(&(Expression::variable("x") * 2.0)));
/// ```
#[derive(Debug)]
pub struct Matcher {
    predicate: Predicate,
}

impl Matcher {
    pub fn new<F>(init: F) -> Self
    where
        F: FnOnce(&MatcherScope) -> Predicate,
    {
        let predicate = init(&MatcherScope { _private: () });
        Self { predicate }
    }

    pub fn matches(&self, expr: &Expression) -> bool {
        let matched = self.predicate.matches(expr);
        trace!("{} against {}: {}", self.predicate, expr, matched);
        matched
    }

    /// Turn the matcher into a plain predicate function
    pub fn into_fn(self) -> impl Fn(&Expression) -> bool + Send + Sync {
        move |expr| self.matches(expr)
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.predicate)
    }
}
