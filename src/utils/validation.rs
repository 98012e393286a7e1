use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// Check that `name` can stand for a variable: a letter or `_` followed by letters,
/// digits or `_`
///
/// # Errors
///
/// Returns an error if the name is empty or is not an identifier.
pub fn validate_variable_name(name: &str) -> Result<(), UtilsError> {
    debug!("Validating variable name: '{}'", name);

    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        warn!("Variable name is empty");
        return Err(UtilsError::EmptyVariableName);
    };

    if !(first.is_alphabetic() || first == '_') || !chars.all(|c| c.is_alphanumeric() || c == '_')
    {
        warn!("Variable name is not an identifier: '{}'", name);
        return Err(UtilsError::InvalidVariableName(name.to_string()));
    }

    debug!("Variable name validation successful");
    Ok(())
}
