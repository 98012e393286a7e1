use log::{debug, warn};

use crate::expression::ast::Expression;
use crate::expression::constants::DEFAULT_MAX_SIMPLIFY_PASSES;

/// Outcome of repeated simplification
#[derive(Debug, Clone, PartialEq)]
pub struct Settled {
    pub expression: Expression,
    /// Passes that changed the tree
    pub passes: usize,
    /// False when the pass budget ran out while the tree was still changing
    pub settled: bool,
}

fn simplify_add(left: Expression, right: Expression) -> Expression {
    match (&left, &right) {
        (Expression::Constant(a), Expression::Constant(b)) => Expression::Constant(a + b),
        _ if left.is_constant_value(0.0) => right,
        _ if right.is_constant_value(0.0) => left,
        (Expression::Variable(a), Expression::Variable(b)) if a == b => 2.0 * left,
        _ => left + right,
    }
}

fn simplify_sub(left: Expression, right: Expression) -> Expression {
    if right.is_constant_value(0.0) {
        left
    } else {
        left - right
    }
}

fn simplify_mul(left: Expression, right: Expression) -> Expression {
    match (&left, &right) {
        (Expression::Constant(a), Expression::Constant(b)) => Expression::Constant(a * b),
        (Expression::Variable(a), Expression::Variable(b)) if a == b => left.pow(2.0),
        // (c * v) * v folds into (c + 1) * v
        (Expression::Mul(coefficient, inner), Expression::Variable(name))
            if coefficient.as_constant().is_some() && inner.is_variable_named(name) =>
        {
            let bumped = (coefficient.as_ref().clone() + 1.0).simplify();
            bumped * right
        }
        _ if left.is_constant_value(1.0) => right,
        _ if right.is_constant_value(1.0) => left,
        _ => left * right,
    }
}

fn simplify_div(left: Expression, right: Expression) -> Expression {
    if right.is_constant_value(1.0) {
        left
    } else {
        left / right
    }
}

fn simplify_once(expr: &Expression) -> Expression {
    match expr {
        Expression::Constant(_) | Expression::Variable(_) => expr.clone(),
        Expression::Add(l, r) => simplify_add(simplify_once(l), simplify_once(r)),
        Expression::Sub(l, r) => simplify_sub(simplify_once(l), simplify_once(r)),
        Expression::Mul(l, r) => simplify_mul(simplify_once(l), simplify_once(r)),
        Expression::Div(l, r) => simplify_div(simplify_once(l), simplify_once(r)),
        // Powers are opaque: neither the node nor its operands are rewritten
        Expression::Pow(_, _) => expr.clone(),
    }
}

impl Expression {
    /// Apply one bottom-up simplification pass
    ///
    /// Children are simplified before their parent's rule runs, and the rewritten parent
    /// is not visited again, so some reductions need another pass. See
    /// [`Expression::simplify_until_settled`].
    pub fn simplify(&self) -> Expression {
        let simplified = simplify_once(self);
        debug!("Simplified {} to {}", self, simplified);
        simplified
    }

    /// Simplify until the tree stops changing, at most `max_passes` times
    pub fn simplify_until_settled(&self, max_passes: usize) -> Settled {
        let mut current = self.clone();

        for pass in 0..max_passes {
            let next = simplify_once(&current);
            if next == current {
                debug!("Simplification settled after {} passes: {}", pass, current);
                return Settled {
                    expression: current,
                    passes: pass,
                    settled: true,
                };
            }
            debug!("Pass {}: {}", pass + 1, next);
            current = next;
        }

        // The last pass may have produced the fixed point without us checking it
        let settled = simplify_once(&current) == current;
        if !settled {
            warn!(
                "Simplification did not settle within {} passes: {}",
                max_passes, current
            );
        }

        Settled {
            expression: current,
            passes: max_passes,
            settled,
        }
    }

    /// Simplify until the tree stops changing, within the default pass budget
    pub fn simplify_fully(&self) -> Expression {
        self.simplify_until_settled(DEFAULT_MAX_SIMPLIFY_PASSES)
            .expression
    }
}
