use crate::types::EnumRepr;

/// A Rust type whose values are registered as the values of a GraphQL enum
/// via [`SchemaBuilder::enum_type`](crate::schema::SchemaBuilder::enum_type).
///
/// `repr` must be injective over the registered values: two declared names
/// may not share a representation. Use
/// [`graphql_enum!`](crate::graphql_enum) to make the type usable as a field
/// result and as an argument.
pub trait GraphQLEnum: Clone + Send + Sync + 'static {
    fn repr(&self) -> EnumRepr;
}
