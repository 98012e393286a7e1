//! Shape matching over expression roots

mod core;

pub use self::core::{Matcher, MatcherScope, Predicate};

#[cfg(test)]
mod tests;
