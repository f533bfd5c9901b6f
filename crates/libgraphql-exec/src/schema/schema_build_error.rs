use crate::types::EnumRepr;
use crate::types::TypeRef;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error(
        "The `{rust_type}` Rust type was registered both as `{first_name}` and \
        as `{second_name}`"
    )]
    ConflictingRegistration {
        first_name: String,
        rust_type: &'static str,
        second_name: String,
    },

    #[error("Enum `{enum_name}` maps `{first}` and `{second}` to the same value {repr}")]
    CollidingEnumValues {
        enum_name: String,
        first: String,
        repr: EnumRepr,
        second: String,
    },

    #[error("Enum `{enum_name}` declares the value `{value_name}` more than once")]
    DuplicateEnumValue {
        enum_name: String,
        value_name: String,
    },

    #[error("The `{type_name}` type declares the field `{field_name}` more than once")]
    DuplicateField {
        field_name: String,
        type_name: String,
    },

    #[error("The `{type_name}` input object declares the field `{field_name}` more than once")]
    DuplicateInputField {
        field_name: String,
        type_name: String,
    },

    #[error("Multiple Rust types were registered under the GraphQL type name `{type_name}`")]
    DuplicateTypeName {
        type_name: String,
    },

    #[error(
        "The `{field_name}` field of the `{type_name}` input object has a Rust \
        type that cannot be used as an input value"
    )]
    InvalidInputField {
        field_name: String,
        type_name: String,
    },

    #[error(
        "Enum `{enum_name}` mixes {expected} and {found} values (at `{value_name}`)"
    )]
    MixedEnumKinds {
        enum_name: String,
        expected: &'static str,
        found: &'static str,
        value_name: String,
    },

    #[error("The `{type_name}` type has no field named `{field_name}` to use as its key")]
    UnknownKeyField {
        field_name: String,
        type_name: String,
    },

    #[error("Type {type_ref} was referenced but never built")]
    UnbuiltType {
        type_ref: TypeRef,
    },

    #[error("The `{rust_type}` Rust type is used as a union or interface but was never registered as one")]
    UnregisteredAbstractType {
        rust_type: &'static str,
    },

    #[error("The `{rust_type}` Rust type is used as an enum but was never registered as one")]
    UnregisteredEnum {
        rust_type: &'static str,
    },

    #[error("The `{rust_type}` Rust type is used as an object but was never registered as one")]
    UnregisteredObject {
        rust_type: &'static str,
    },

    #[error("The `{rust_type}` Rust type is used as a scalar but was never registered as one")]
    UnregisteredScalar {
        rust_type: &'static str,
    },
}
