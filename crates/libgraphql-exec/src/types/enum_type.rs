use indexmap::IndexMap;
use std::collections::HashMap;
use std::fmt;

/// The underlying representation of an enum's native values.
///
/// Every value of a single registered enum shares one kind: all integers or
/// all strings.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum EnumRepr {
    Int(i64),
    String(String),
}
impl EnumRepr {
    pub(crate) fn kind_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "integer",
            Self::String(_) => "string",
        }
    }

    pub(crate) fn same_kind(&self, other: &EnumRepr) -> bool {
        matches!(
            (self, other),
            (Self::Int(_), Self::Int(_)) | (Self::String(_), Self::String(_)),
        )
    }
}
impl fmt::Display for EnumRepr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::String(s) => write!(f, "{s:?}"),
        }
    }
}

/// Information associated with [`GraphQLType::Enum`](crate::types::GraphQLType::Enum).
///
/// The forward map (declared name to native value) and the reverse map
/// (native value to declared name) are mutually inverse.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(crate) name: String,
    pub(crate) reverse: HashMap<EnumRepr, String>,
    pub(crate) values: IndexMap<String, EnumRepr>,
}
impl EnumType {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The declared name for a native value, if any.
    pub fn name_of(&self, repr: &EnumRepr) -> Option<&str> {
        self.reverse.get(repr).map(|name| name.as_str())
    }

    /// The native value declared under `name`, if any.
    pub fn value_of(&self, name: &str) -> Option<&EnumRepr> {
        self.values.get(name)
    }

    /// Declared names in registration order.
    pub fn value_names(&self) -> Vec<&str> {
        self.values.keys().map(|name| name.as_str()).collect()
    }
}
