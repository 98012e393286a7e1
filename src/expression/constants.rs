// Configuration constants for the expression module
pub const DEFAULT_VARIABLE: &str = "x";
pub const DEFAULT_MAX_SIMPLIFY_PASSES: usize = 32;
