use crate::types::GraphQLType;

/// Similar to [`GraphQLType`] except without the corresponding type metadata.
/// Useful when representing a group or category of [`GraphQLType`]s.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphQLTypeKind {
    Enum,
    InputObject,
    Interface,
    List,
    NonNull,
    Object,
    Scalar,
    Union,
}
impl GraphQLTypeKind {
    pub fn name(&self) -> &str {
        match self {
            Self::Enum => "Enum",
            Self::InputObject => "InputObject",
            Self::Interface => "Interface",
            Self::List => "List",
            Self::NonNull => "NonNull",
            Self::Object => "Object",
            Self::Scalar => "Scalar",
            Self::Union => "Union",
        }
    }
}
impl std::convert::From<&GraphQLType> for GraphQLTypeKind {
    fn from(value: &GraphQLType) -> Self {
        match value {
            GraphQLType::Enum(_) => GraphQLTypeKind::Enum,
            GraphQLType::InputObject(_) => GraphQLTypeKind::InputObject,
            GraphQLType::Interface(_) => GraphQLTypeKind::Interface,
            GraphQLType::List(_) => GraphQLTypeKind::List,
            GraphQLType::NonNull(_) => GraphQLTypeKind::NonNull,
            GraphQLType::Object(_) => GraphQLTypeKind::Object,
            GraphQLType::Scalar(_) => GraphQLTypeKind::Scalar,
            GraphQLType::Union(_) => GraphQLTypeKind::Union,
        }
    }
}
