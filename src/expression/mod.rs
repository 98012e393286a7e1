//! Expression tree and the transforms defined over it

mod ast;
mod builder;
pub mod constants;
mod derivative;
mod display;
mod errors;
mod ops;
mod simplify;

pub use ast::{BinaryOperator, Expression};
pub use builder::expression;
pub use errors::{DerivativeError, UnsupportedReason};
pub use simplify::Settled;
