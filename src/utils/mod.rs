//! Input checks shared by the command line front end

mod errors;
mod validation;

pub use errors::UtilsError;
pub use validation::validate_variable_name;
