use crate::types::EnumRepr;
use crate::value::Value;
use std::any::Any;
use std::any::TypeId;
use std::fmt;
use std::sync::Arc;

/// A type-erased value produced by a resolver, on its way to being turned
/// into a result [`Value`] by the executor.
///
/// Which variant is expected depends on the field's declared type: scalars
/// produce `Scalar` (or `Native` for custom scalars), enums `Enum`, objects
/// `Object`, lists `List`, and unions and interfaces `Members`. `Null` is
/// accepted everywhere.
#[derive(Clone, Default)]
pub enum FieldValue {
    #[default]
    Null,
    Scalar(Value),
    Native(Arc<dyn Any + Send + Sync>),
    Enum(EnumRepr),
    Object(Arc<dyn Any + Send + Sync>),
    List(Vec<FieldValue>),
    Members(Vec<Member>),
}
impl FieldValue {
    /// A union or interface value holding exactly one member.
    pub fn member<T: Any + Send + Sync>(value: T) -> Self {
        Self::Members(vec![Member::new(value)])
    }

    pub fn object<T: Any + Send + Sync>(value: T) -> Self {
        Self::Object(Arc::new(value))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub(crate) fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Scalar(_) => "scalar",
            Self::Native(_) => "native scalar",
            Self::Enum(_) => "enum",
            Self::Object(_) => "object",
            Self::List(_) => "list",
            Self::Members(_) => "members",
        }
    }
}
impl fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Scalar(value) => f.debug_tuple("Scalar").field(value).finish(),
            Self::Native(_) => f.write_str("Native(..)"),
            Self::Enum(repr) => f.debug_tuple("Enum").field(repr).finish(),
            Self::Object(_) => f.write_str("Object(..)"),
            Self::List(items) => f.debug_tuple("List").field(items).finish(),
            Self::Members(members) => f.debug_tuple("Members").field(members).finish(),
        }
    }
}

/// One populated member of a union or interface value.
///
/// The member is identified by the Rust type of its value, which the executor
/// matches against each member object type's
/// [`native_type`](crate::types::ObjectType::native_type).
#[derive(Clone)]
pub struct Member {
    pub(crate) type_id: TypeId,
    pub(crate) type_name: &'static str,
    pub(crate) value: FieldValue,
}
impl Member {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }

    pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            value: FieldValue::Object(value),
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }
}
impl fmt::Debug for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("type", &self.type_name)
            .finish()
    }
}
