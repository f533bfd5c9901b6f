mod enum_type;
mod field;
mod field_value;
mod graphql_type;
mod graphql_type_kind;
mod input_object_type;
mod interface_type;
mod object_type;
mod scalar_type;
mod type_ref;
mod union_type;

pub use enum_type::EnumRepr;
pub use enum_type::EnumType;
pub use field::ArgumentParser;
pub use field::Field;
pub use field::ParsedArguments;
pub use field::Resolution;
pub use field::Resolver;
pub use field::Thunk;
pub use field_value::FieldValue;
pub use field_value::Member;
pub use graphql_type::GraphQLType;
pub use graphql_type_kind::GraphQLTypeKind;
pub use input_object_type::InputObjectType;
pub use interface_type::InterfaceType;
pub use object_type::ObjectType;
pub use scalar_type::ScalarSerializer;
pub use scalar_type::ScalarType;
pub use type_ref::TypeRef;
pub use union_type::UnionType;

#[cfg(test)]
mod tests;
