use crate::error::FieldError;
use crate::value::Value;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Converts a custom scalar's native value into its output [`Value`].
pub type ScalarSerializer = Arc<
    dyn Fn(&(dyn Any + Send + Sync)) -> Result<Value, FieldError> + Send + Sync
>;

/// Information associated with [`GraphQLType::Scalar`](crate::types::GraphQLType::Scalar).
///
/// Built-in scalars (`Int`, `Float`, `String`, `Boolean`, `ID`) carry no
/// serializer: their resolved values are already [`Value`]s. Custom scalars
/// registered through
/// [`SchemaBuilder::scalar`](crate::schema::SchemaBuilder::scalar) always
/// carry one.
#[derive(Clone)]
pub struct ScalarType {
    pub(crate) name: String,
    pub(crate) serialize: Option<ScalarSerializer>,
}
impl ScalarType {
    pub(crate) fn builtin(name: &str) -> Self {
        Self {
            name: name.to_string(),
            serialize: None,
        }
    }

    pub fn is_builtin(&self) -> bool {
        self.serialize.is_none()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
impl fmt::Debug for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarType")
            .field("name", &self.name)
            .field("builtin", &self.is_builtin())
            .finish()
    }
}
