use crate::expression::constants::DEFAULT_VARIABLE;

/// Represents symbolic arithmetic expressions over named variables
///
/// Every node owns its children; transforms always build a new tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Constant(f64),
    Variable(String),
    Add(Box<Expression>, Box<Expression>),
    Sub(Box<Expression>, Box<Expression>),
    Mul(Box<Expression>, Box<Expression>),
    Div(Box<Expression>, Box<Expression>),
    Pow(Box<Expression>, Box<Expression>), // Pow(base, exponent)
}

/// The kind of a binary node, independent of its operands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOperator {
    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Sub => '-',
            BinaryOperator::Mul => '*',
            BinaryOperator::Div => '/',
            BinaryOperator::Pow => '^',
        }
    }

    /// Build a node of this kind from two operands
    pub fn apply(&self, left: Expression, right: Expression) -> Expression {
        let (l, r) = (Box::new(left), Box::new(right));
        match self {
            BinaryOperator::Add => Expression::Add(l, r),
            BinaryOperator::Sub => Expression::Sub(l, r),
            BinaryOperator::Mul => Expression::Mul(l, r),
            BinaryOperator::Div => Expression::Div(l, r),
            BinaryOperator::Pow => Expression::Pow(l, r),
        }
    }
}

impl Expression {
    pub fn constant(value: f64) -> Self {
        Expression::Constant(value)
    }

    /// A variable called `name`
    ///
    /// `name` must be a non-empty identifier. Only emptiness is checked, and only in debug
    /// builds; use [`crate::utils::validate_variable_name`] for untrusted input.
    pub fn variable(name: impl Into<String>) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "variable name cannot be empty");
        Expression::Variable(name)
    }

    /// The variable named `x`, used when no other variable is given
    pub fn default_variable() -> Self {
        Expression::Variable(DEFAULT_VARIABLE.to_string())
    }

    pub fn sum(left: impl Into<Expression>, right: impl Into<Expression>) -> Self {
        BinaryOperator::Add.apply(left.into(), right.into())
    }

    pub fn difference(left: impl Into<Expression>, right: impl Into<Expression>) -> Self {
        BinaryOperator::Sub.apply(left.into(), right.into())
    }

    pub fn product(left: impl Into<Expression>, right: impl Into<Expression>) -> Self {
        BinaryOperator::Mul.apply(left.into(), right.into())
    }

    pub fn quotient(left: impl Into<Expression>, right: impl Into<Expression>) -> Self {
        BinaryOperator::Div.apply(left.into(), right.into())
    }

    /// Raise this expression to `exponent`
    ///
    /// `^` is bitwise xor in Rust, so powers are built with a method instead of an operator.
    pub fn pow(self, exponent: impl Into<Expression>) -> Self {
        BinaryOperator::Pow.apply(self, exponent.into())
    }

    /// Split a binary node into its operator and operands
    pub fn as_binary(&self) -> Option<(BinaryOperator, &Expression, &Expression)> {
        match self {
            Expression::Constant(_) | Expression::Variable(_) => None,
            Expression::Add(l, r) => Some((BinaryOperator::Add, l.as_ref(), r.as_ref())),
            Expression::Sub(l, r) => Some((BinaryOperator::Sub, l.as_ref(), r.as_ref())),
            Expression::Mul(l, r) => Some((BinaryOperator::Mul, l.as_ref(), r.as_ref())),
            Expression::Div(l, r) => Some((BinaryOperator::Div, l.as_ref(), r.as_ref())),
            Expression::Pow(l, r) => Some((BinaryOperator::Pow, l.as_ref(), r.as_ref())),
        }
    }

    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Expression::Constant(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_variable_name(&self) -> Option<&str> {
        match self {
            Expression::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// True when this node is a constant exactly equal to `value`
    pub fn is_constant_value(&self, value: f64) -> bool {
        matches!(self, Expression::Constant(v) if *v == value)
    }

    /// True when this node is a variable called `name`
    pub fn is_variable_named(&self, name: &str) -> bool {
        matches!(self, Expression::Variable(n) if n == name)
    }

    /// Number of nodes on the longest root-to-leaf path
    ///
    /// Every transform in this crate recurses once per level, so this is also the
    /// stack depth they need.
    pub fn depth(&self) -> usize {
        match self.as_binary() {
            None => 1,
            Some((_, l, r)) => 1 + l.depth().max(r.depth()),
        }
    }
}
