use thiserror::Error;

/// Failure to decode a raw argument value into its Rust shape.
///
/// Errors raised for a nested value are prefixed with the name of each
/// enclosing input field (or list index), innermost last, e.g.
/// `filter: tags: 2: not a string`.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("{message}")]
pub struct ArgumentError {
    message: String,
}
impl ArgumentError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub(crate) fn required() -> Self {
        Self::new("required argument not provided")
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    pub(crate) fn nest(self, prefix: impl std::fmt::Display) -> Self {
        Self {
            message: format!("{prefix}: {}", self.message),
        }
    }
}
impl From<&str> for ArgumentError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}
impl From<String> for ArgumentError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}
