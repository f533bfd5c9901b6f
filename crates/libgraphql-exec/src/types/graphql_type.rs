use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeRef;
use crate::types::UnionType;
use indexmap::IndexMap;

/// A node in a schema's type graph.
///
/// `List` and `NonNull` are wrappers around another node; every other variant
/// is a named type. The set of variants is closed: the validator and the
/// executor match on it exhaustively.
#[derive(Clone, Debug)]
pub enum GraphQLType {
    Enum(EnumType),
    InputObject(InputObjectType),
    Interface(InterfaceType),
    List(TypeRef),
    NonNull(TypeRef),
    Object(ObjectType),
    Scalar(ScalarType),
    Union(UnionType),
}
impl GraphQLType {
    /// The fields selectable on this type, for object and interface types.
    pub fn fields(&self) -> Option<&IndexMap<String, Field>> {
        match self {
            Self::Interface(t) => Some(&t.fields),
            Self::Object(t) => Some(&t.fields),
            Self::Enum(_)
                | Self::InputObject(_)
                | Self::List(_)
                | Self::NonNull(_)
                | Self::Scalar(_)
                | Self::Union(_) => None,
        }
    }

    /// The [`TypeRef`] wrapped by a `List` or `NonNull` node.
    pub fn inner(&self) -> Option<TypeRef> {
        match self {
            Self::List(inner) | Self::NonNull(inner) => Some(*inner),
            _ => None,
        }
    }

    /// True for the types whose values carry no sub-selection.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Enum(_) | Self::Scalar(_))
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    pub fn kind(&self) -> GraphQLTypeKind {
        self.into()
    }

    /// The name of a named type, or `None` for `List` and `NonNull` wrappers.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Enum(t) => Some(t.name.as_str()),
            Self::InputObject(t) => Some(t.name.as_str()),
            Self::Interface(t) => Some(t.name.as_str()),
            Self::Object(t) => Some(t.name.as_str()),
            Self::Scalar(t) => Some(t.name.as_str()),
            Self::Union(t) => Some(t.name.as_str()),
            Self::List(_) | Self::NonNull(_) => None,
        }
    }
}
