/// Implements [`OutputType`](crate::schema::OutputType) for Rust types
/// registered as objects with
/// [`SchemaBuilder::object`](crate::schema::SchemaBuilder::object).
///
/// ```ignore
/// struct User { name: String }
/// graphql_object!(User);
/// ```
#[macro_export]
macro_rules! graphql_object {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::schema::OutputType for $ty {
                fn output_type(
                    registry: &mut $crate::schema::TypeRegistry,
                ) -> ::std::result::Result<$crate::types::TypeRef, $crate::schema::SchemaBuildError> {
                    let object_ref = registry.object_ref::<Self>()?;
                    ::std::result::Result::Ok(registry.non_null(object_ref))
                }

                fn into_field_value(self) -> $crate::types::FieldValue {
                    $crate::types::FieldValue::object(self)
                }
            }

            impl $crate::schema::GraphQLObject for $ty {}
        )+
    };
}

/// Implements [`OutputType`](crate::schema::OutputType) and
/// [`InputType`](crate::schema::InputType) for a
/// [`GraphQLEnum`](crate::schema::GraphQLEnum) registered with
/// [`SchemaBuilder::enum_type`](crate::schema::SchemaBuilder::enum_type).
#[macro_export]
macro_rules! graphql_enum {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::schema::OutputType for $ty {
                fn output_type(
                    registry: &mut $crate::schema::TypeRegistry,
                ) -> ::std::result::Result<$crate::types::TypeRef, $crate::schema::SchemaBuildError> {
                    let enum_ref = registry.enum_ref::<Self>()?;
                    ::std::result::Result::Ok(registry.non_null(enum_ref))
                }

                fn into_field_value(self) -> $crate::types::FieldValue {
                    $crate::types::FieldValue::Enum($crate::schema::GraphQLEnum::repr(&self))
                }
            }

            impl $crate::schema::InputType for $ty {
                fn input_parser(
                    registry: &mut $crate::schema::TypeRegistry,
                ) -> ::std::result::Result<
                    ($crate::schema::InputParser<Self>, ::std::option::Option<$crate::types::TypeRef>),
                    $crate::schema::SchemaBuildError,
                > {
                    registry.enum_input::<Self>()
                }
            }
        )+
    };
}

/// Implements [`OutputType`](crate::schema::OutputType) and
/// [`InputType`](crate::schema::InputType) for a custom scalar registered
/// with [`SchemaBuilder::scalar`](crate::schema::SchemaBuilder::scalar).
#[macro_export]
macro_rules! graphql_scalar {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::schema::OutputType for $ty {
                fn output_type(
                    registry: &mut $crate::schema::TypeRegistry,
                ) -> ::std::result::Result<$crate::types::TypeRef, $crate::schema::SchemaBuildError> {
                    let scalar_ref = registry.scalar_ref::<Self>()?;
                    ::std::result::Result::Ok(registry.non_null(scalar_ref))
                }

                fn into_field_value(self) -> $crate::types::FieldValue {
                    $crate::types::FieldValue::Native(::std::sync::Arc::new(self))
                }
            }

            impl $crate::schema::InputType for $ty {
                fn input_parser(
                    registry: &mut $crate::schema::TypeRegistry,
                ) -> ::std::result::Result<
                    ($crate::schema::InputParser<Self>, ::std::option::Option<$crate::types::TypeRef>),
                    $crate::schema::SchemaBuildError,
                > {
                    registry.scalar_input::<Self>()
                }
            }
        )+
    };
}

/// Implements [`OutputType`](crate::schema::OutputType) for a Rust enum
/// registered as a union or interface, where each listed variant wraps the
/// value of one member object type.
///
/// ```ignore
/// enum Pet { Dog(Dog), Cat(Cat) }
/// graphql_one_of!(Pet { Dog, Cat });
/// ```
#[macro_export]
macro_rules! graphql_one_of {
    ($ty:ty { $($variant:ident),+ $(,)? }) => {
        impl $crate::schema::OutputType for $ty {
            fn output_type(
                registry: &mut $crate::schema::TypeRegistry,
            ) -> ::std::result::Result<$crate::types::TypeRef, $crate::schema::SchemaBuildError> {
                let abstract_ref = registry.abstract_ref::<Self>()?;
                ::std::result::Result::Ok(registry.non_null(abstract_ref))
            }

            fn into_field_value(self) -> $crate::types::FieldValue {
                match self {
                    $(Self::$variant(member) => $crate::types::FieldValue::member(member),)+
                }
            }
        }
    };
}
