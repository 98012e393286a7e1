use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Variable name cannot be empty")]
    EmptyVariableName,
    #[error("Variable name must be an identifier: {0}")]
    InvalidVariableName(String),
}
