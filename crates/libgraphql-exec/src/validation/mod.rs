mod validation_error;
mod validator;

pub use validation_error::ValidationError;
pub use validation_error::ValidationErrorKind;
pub use validator::validate;

#[cfg(test)]
mod tests;
