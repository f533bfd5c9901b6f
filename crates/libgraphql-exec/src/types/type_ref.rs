use std::fmt;

/// A handle to a [`GraphQLType`](crate::types::GraphQLType) stored in a
/// [`Schema`](crate::schema::Schema).
///
/// Types reference one another through `TypeRef`s rather than by ownership,
/// which is what lets an object type hold a field that returns the object
/// type itself. A `TypeRef` is only meaningful for the schema that produced
/// it.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TypeRef(pub(crate) usize);
impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
