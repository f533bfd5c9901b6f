use crate::error::FieldError;
use crate::schema::ID;
use crate::schema::SchemaBuildError;
use crate::schema::TypeRegistry;
use crate::types::FieldValue;
use crate::types::Resolution;
use crate::types::TypeRef;
use crate::value::Value;
use std::sync::Arc;
use std::sync::mpsc;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// A Rust type that can be returned from a field resolver.
///
/// `output_type` registers (or looks up) the type node describing `Self`;
/// `into_field_value` erases a value so the executor can walk it against
/// that node. Plain Rust values map to `NonNull` types and `Option<T>` strips
/// the `NonNull`.
///
/// Object, enum, custom-scalar, and union/interface types get their impl
/// from [`graphql_object!`](crate::graphql_object),
/// [`graphql_enum!`](crate::graphql_enum),
/// [`graphql_scalar!`](crate::graphql_scalar), and
/// [`graphql_one_of!`](crate::graphql_one_of).
pub trait OutputType: Send + Sync + 'static {
    fn output_type(registry: &mut TypeRegistry) -> Result<TypeRef>;
    fn into_field_value(self) -> FieldValue;
}

/// Marks a Rust type registered as a GraphQL object, which also makes
/// `Arc<Self>` usable as a field result.
pub trait GraphQLObject: OutputType {}

impl<T: GraphQLObject> OutputType for Arc<T> {
    fn output_type(registry: &mut TypeRegistry) -> Result<TypeRef> {
        T::output_type(registry)
    }

    fn into_field_value(self) -> FieldValue {
        FieldValue::Object(self)
    }
}

fn builtin(registry: &mut TypeRegistry, name: &str) -> TypeRef {
    let scalar_ref = registry.builtin(name);
    registry.non_null(scalar_ref)
}

macro_rules! scalar_output_type {
    ($scalar_name:literal => $($ty:ty),* ; |$value:ident| $into:expr) => {
        $(
            impl OutputType for $ty {
                fn output_type(registry: &mut TypeRegistry) -> Result<TypeRef> {
                    Ok(builtin(registry, $scalar_name))
                }

                fn into_field_value(self) -> FieldValue {
                    let $value = self;
                    FieldValue::Scalar($into)
                }
            }
        )*
    };
}
scalar_output_type!("Int" => i8, i16, i32, i64, u8, u16, u32; |i| Value::Int(i64::from(i)));
scalar_output_type!("Float" => f32, f64; |f| Value::Float(f64::from(f)));
scalar_output_type!("String" => String, &'static str; |s| Value::from(s));
scalar_output_type!("Boolean" => bool; |b| Value::Bool(b));
scalar_output_type!("ID" => ID; |id| Value::String(id.0));

impl<T: OutputType> OutputType for Option<T> {
    fn output_type(registry: &mut TypeRegistry) -> Result<TypeRef> {
        let type_ref = T::output_type(registry)?;
        Ok(registry.nullable(type_ref))
    }

    fn into_field_value(self) -> FieldValue {
        self.map(OutputType::into_field_value).unwrap_or(FieldValue::Null)
    }
}

impl<T: OutputType> OutputType for Vec<T> {
    fn output_type(registry: &mut TypeRegistry) -> Result<TypeRef> {
        let item_ref = T::output_type(registry)?;
        let list_ref = registry.list(item_ref);
        Ok(registry.non_null(list_ref))
    }

    fn into_field_value(self) -> FieldValue {
        FieldValue::List(self.into_iter().map(OutputType::into_field_value).collect())
    }
}

/// A value a lazy field's resolver promises to produce later.
///
/// The executor runs the computation during a later pass over the result
/// tree, after every field that was ready immediately has been resolved.
/// Work started before the `Deferred` is returned (on another thread, say)
/// therefore overlaps with the rest of the query.
pub struct Deferred<T> {
    thunk: Box<dyn FnOnce() -> std::result::Result<T, FieldError> + Send>,
}
impl<T: Send + 'static> Deferred<T> {
    pub fn new(
        thunk: impl FnOnce() -> std::result::Result<T, FieldError> + Send + 'static,
    ) -> Self {
        Self {
            thunk: Box::new(thunk),
        }
    }

    pub fn ready(value: T) -> Self {
        Self::new(move || Ok(value))
    }

    /// A `Deferred` that blocks, when run, until the paired [`Completer`]
    /// delivers a result.
    pub fn channel() -> (Completer<T>, Self) {
        let (sender, receiver) = mpsc::sync_channel(1);
        let deferred = Self::new(move || match receiver.recv() {
            Ok(result) => result,
            Err(_) => Err(FieldError::new("deferred value was dropped before completion")),
        });
        (Completer { sender }, deferred)
    }

    fn run(self) -> std::result::Result<T, FieldError> {
        (self.thunk)()
    }
}

/// The producing half of [`Deferred::channel`].
pub struct Completer<T> {
    sender: mpsc::SyncSender<std::result::Result<T, FieldError>>,
}
impl<T> Completer<T> {
    pub fn complete(self, result: std::result::Result<T, FieldError>) {
        // The receiving side is gone when its query was abandoned.
        let _ = self.sender.send(result);
    }
}

#[doc(hidden)]
pub mod markers {
    pub struct Value;
    pub struct Fallible;
    pub struct Lazy;
    pub struct FallibleLazy;
}

/// The shapes a field resolver may return: a value, a `Result` of a value, a
/// [`Deferred`] value, or a `Result` of a `Deferred` value.
///
/// `Marker` only serves to keep the four impls apart.
pub trait IntoFieldResult<Marker> {
    type Output: OutputType;
    const LAZY: bool;

    fn into_resolution(self) -> std::result::Result<Resolution, FieldError>;
}

impl<T: OutputType> IntoFieldResult<markers::Value> for T {
    type Output = T;
    const LAZY: bool = false;

    fn into_resolution(self) -> std::result::Result<Resolution, FieldError> {
        Ok(Resolution::Ready(self.into_field_value()))
    }
}

impl<T: OutputType, E: Into<FieldError>> IntoFieldResult<markers::Fallible> for std::result::Result<T, E> {
    type Output = T;
    const LAZY: bool = false;

    fn into_resolution(self) -> std::result::Result<Resolution, FieldError> {
        self.map(|value| Resolution::Ready(value.into_field_value()))
            .map_err(Into::into)
    }
}

impl<T: OutputType> IntoFieldResult<markers::Lazy> for Deferred<T> {
    type Output = T;
    const LAZY: bool = true;

    fn into_resolution(self) -> std::result::Result<Resolution, FieldError> {
        Ok(Resolution::Deferred(Box::new(move || {
            self.run().map(OutputType::into_field_value)
        })))
    }
}

impl<T: OutputType, E: Into<FieldError>> IntoFieldResult<markers::FallibleLazy>
    for std::result::Result<Deferred<T>, E>
{
    type Output = T;
    const LAZY: bool = true;

    fn into_resolution(self) -> std::result::Result<Resolution, FieldError> {
        let deferred = self.map_err(Into::<FieldError>::into)?;
        <Deferred<T> as IntoFieldResult<markers::Lazy>>::into_resolution(deferred)
    }
}
