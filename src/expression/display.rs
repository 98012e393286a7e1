use std::fmt;

use crate::expression::ast::Expression;

/// Constants keep a fractional part so `2` renders as `2.0`
fn number_to_string(n: f64) -> String {
    format!("{:?}", n)
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Constant(n) => write!(f, "{}", number_to_string(*n)),
            Expression::Variable(name) => write!(f, "{}", name),
            Expression::Add(l, r) => write!(f, "({} + {})", l, r),
            Expression::Sub(l, r) => write!(f, "({} - {})", l, r),
            Expression::Mul(l, r) => write!(f, "({} * {})", l, r),
            Expression::Div(l, r) => write!(f, "({} / {})", l, r),
            Expression::Pow(l, r) => write!(f, "({} ^ {})", l, r),
        }
    }
}
