use std::ops::{Add, Div, Mul, Sub};

use crate::expression::ast::{BinaryOperator, Expression};

impl From<f64> for Expression {
    fn from(value: f64) -> Self {
        Expression::Constant(value)
    }
}

impl From<&str> for Expression {
    fn from(name: &str) -> Self {
        Expression::variable(name)
    }
}

macro_rules! impl_combinator {
    ($trait:ident, $method:ident, $op:expr) => {
        impl $trait<Expression> for Expression {
            type Output = Expression;

            fn $method(self, rhs: Expression) -> Expression {
                $op.apply(self, rhs)
            }
        }

        impl $trait<f64> for Expression {
            type Output = Expression;

            fn $method(self, rhs: f64) -> Expression {
                $op.apply(self, Expression::Constant(rhs))
            }
        }

        impl $trait<Expression> for f64 {
            type Output = Expression;

            fn $method(self, rhs: Expression) -> Expression {
                $op.apply(Expression::Constant(self), rhs)
            }
        }
    };
}

impl_combinator!(Add, add, BinaryOperator::Add);
impl_combinator!(Sub, sub, BinaryOperator::Sub);
impl_combinator!(Mul, mul, BinaryOperator::Mul);
impl_combinator!(Div, div, BinaryOperator::Div);
