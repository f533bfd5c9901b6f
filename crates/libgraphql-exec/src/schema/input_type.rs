use crate::schema::ArgumentError;
use crate::schema::ID;
use crate::schema::SchemaBuildError;
use crate::schema::TypeRegistry;
use crate::types::TypeRef;
use crate::value::Value;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Decodes a raw argument [`Value`] into a `T`.
pub type InputParser<T> = Arc<dyn Fn(&Value) -> std::result::Result<T, ArgumentError> + Send + Sync>;

/// A Rust type that can be decoded from an argument value.
///
/// `input_parser` registers whatever type nodes describe `Self` and returns
/// the parser along with the (possibly `NonNull`-wrapped) node. A `None`
/// node means `Self` takes no input at all, which is only meaningful for a
/// field's whole argument list (see the `()` impl).
///
/// Input objects implement this with [`InputObject`](crate::schema::InputObject);
/// enums and custom scalars get an impl from
/// [`graphql_enum!`](crate::graphql_enum) and
/// [`graphql_scalar!`](crate::graphql_scalar).
pub trait InputType: Sized + Send + Sync + 'static {
    fn input_parser(registry: &mut TypeRegistry) -> Result<(InputParser<Self>, Option<TypeRef>)>;
}

/// The argument shape of a field that takes no arguments: only an empty
/// argument list is accepted.
impl InputType for () {
    fn input_parser(_registry: &mut TypeRegistry) -> Result<(InputParser<Self>, Option<TypeRef>)> {
        let parser: InputParser<()> = Arc::new(|value: &Value| {
            if value.is_empty_args() {
                Ok(())
            } else {
                Err(ArgumentError::new("unexpected args"))
            }
        });
        Ok((parser, None))
    }
}

fn builtin_parser<T: 'static>(
    registry: &mut TypeRegistry,
    scalar_name: &str,
    parse: impl Fn(&Value) -> Option<std::result::Result<T, ArgumentError>> + Send + Sync + 'static,
) -> (InputParser<T>, Option<TypeRef>) {
    let scalar_ref = registry.builtin(scalar_name);
    let expected = scalar_name.to_string();
    let parser: InputParser<T> = Arc::new(move |value: &Value| {
        if value.is_null() {
            return Err(ArgumentError::required());
        }
        parse(value).unwrap_or_else(|| Err(ArgumentError::new(format!(
            "expected type {expected}, found {value}",
        ))))
    });
    (parser, Some(registry.non_null(scalar_ref)))
}

macro_rules! int_input_type {
    ($($ty:ty),* $(,)?) => {
        $(
            impl InputType for $ty {
                fn input_parser(registry: &mut TypeRegistry) -> Result<(InputParser<Self>, Option<TypeRef>)> {
                    Ok(builtin_parser(registry, "Int", |value| match value {
                        Value::Int(i) => Some(<$ty>::try_from(*i).map_err(|_| ArgumentError::new(
                            format!("value {i} out of range for {}", stringify!($ty)),
                        ))),
                        _ => None,
                    }))
                }
            }
        )*
    };
}
int_input_type!(i8, i16, i32, i64, u8, u16, u32);

impl InputType for f64 {
    fn input_parser(registry: &mut TypeRegistry) -> Result<(InputParser<Self>, Option<TypeRef>)> {
        Ok(builtin_parser(registry, "Float", |value| match value {
            Value::Float(f) => Some(Ok(*f)),
            Value::Int(i) => Some(Ok(*i as f64)),
            _ => None,
        }))
    }
}

impl InputType for f32 {
    fn input_parser(registry: &mut TypeRegistry) -> Result<(InputParser<Self>, Option<TypeRef>)> {
        Ok(builtin_parser(registry, "Float", |value| match value {
            Value::Float(f) => Some(Ok(*f as f32)),
            Value::Int(i) => Some(Ok(*i as f32)),
            _ => None,
        }))
    }
}

impl InputType for String {
    fn input_parser(registry: &mut TypeRegistry) -> Result<(InputParser<Self>, Option<TypeRef>)> {
        Ok(builtin_parser(registry, "String", |value| match value {
            Value::String(s) => Some(Ok(s.clone())),
            _ => None,
        }))
    }
}

impl InputType for bool {
    fn input_parser(registry: &mut TypeRegistry) -> Result<(InputParser<Self>, Option<TypeRef>)> {
        Ok(builtin_parser(registry, "Boolean", |value| value.as_bool().map(Ok)))
    }
}

impl InputType for ID {
    fn input_parser(registry: &mut TypeRegistry) -> Result<(InputParser<Self>, Option<TypeRef>)> {
        Ok(builtin_parser(registry, "ID", |value| match value {
            Value::String(s) => Some(Ok(ID(s.clone()))),
            Value::Int(i) => Some(Ok(ID(i.to_string()))),
            _ => None,
        }))
    }
}

/// `null` or an absent value decodes to `None`.
impl<T: InputType> InputType for Option<T> {
    fn input_parser(registry: &mut TypeRegistry) -> Result<(InputParser<Self>, Option<TypeRef>)> {
        let (inner, type_ref) = T::input_parser(registry)?;
        let parser: InputParser<Option<T>> = Arc::new(move |value: &Value| {
            if value.is_null() {
                Ok(None)
            } else {
                inner(value).map(Some)
            }
        });
        Ok((parser, type_ref.map(|type_ref| registry.nullable(type_ref))))
    }
}

impl<T: InputType> InputType for Vec<T> {
    fn input_parser(registry: &mut TypeRegistry) -> Result<(InputParser<Self>, Option<TypeRef>)> {
        let (inner, type_ref) = T::input_parser(registry)?;
        let parser: InputParser<Vec<T>> = Arc::new(move |value: &Value| match value {
            Value::Null => Err(ArgumentError::required()),
            Value::List(items) => items.iter()
                .enumerate()
                .map(|(idx, item)| inner(item).map_err(|err| err.nest(idx)))
                .collect(),
            _ => Err(ArgumentError::new("not a list")),
        });
        let type_ref = type_ref.map(|type_ref| {
            let list_ref = registry.list(type_ref);
            registry.non_null(list_ref)
        });
        Ok((parser, type_ref))
    }
}
