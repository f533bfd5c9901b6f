use std::fmt;

/// The built-in `ID` scalar.
///
/// Accepted from arguments as either a string or an integer and always
/// reported as a string.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ID(pub String);
impl ID {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}
impl fmt::Display for ID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
impl From<&str> for ID {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}
impl From<String> for ID {
    fn from(id: String) -> Self {
        Self(id)
    }
}
