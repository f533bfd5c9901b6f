mod abstract_type_builder;
mod argument_error;
mod descriptors;
mod graphql_enum;
mod id;
mod input_object;
mod input_type;
mod object_builder;
mod output_type;
mod roots;
#[allow(clippy::module_inception)]
mod schema;
mod schema_build_error;
mod schema_builder;
mod type_registry;

pub use abstract_type_builder::AbstractTypeBuilder;
pub use argument_error::ArgumentError;
pub use graphql_enum::GraphQLEnum;
pub use id::ID;
pub use input_object::InputObject;
pub use input_type::InputParser;
pub use input_type::InputType;
pub use object_builder::ObjectBuilder;
pub use output_type::Completer;
pub use output_type::Deferred;
pub use output_type::GraphQLObject;
pub use output_type::IntoFieldResult;
pub use output_type::OutputType;
pub use output_type::markers;
pub use roots::MutationRoot;
pub use roots::QueryRoot;
pub use roots::SubscriptionEvent;
pub use schema::Schema;
pub use schema_build_error::SchemaBuildError;
pub use schema_builder::SchemaBuilder;
pub use type_registry::TypeRegistry;

#[cfg(test)]
mod tests;
