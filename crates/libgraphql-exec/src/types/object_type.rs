use crate::types::Field;
use indexmap::IndexMap;
use std::any::Any;
use std::any::TypeId;
use std::fmt;
use std::sync::Arc;

/// Information associated with [`GraphQLType::Object`](crate::types::GraphQLType::Object).
#[derive(Clone)]
pub struct ObjectType {
    pub(crate) default_source: Option<Arc<dyn Any + Send + Sync>>,
    pub(crate) description: Option<String>,
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) key_field: Option<Field>,
    pub(crate) name: String,
    pub(crate) native_type: TypeId,
}
impl ObjectType {
    /// The value resolvers of this type receive when the executor is handed
    /// no source value. Only the `Query` and `Mutation` roots have one.
    pub(crate) fn default_source(&self) -> Option<&Arc<dyn Any + Send + Sync>> {
        self.default_source.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// This type's fields, in registration order.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    /// The field that is resolved for every value of this type, whether or
    /// not it was selected, and reported under the `__key` output key.
    pub fn key_field(&self) -> Option<&Field> {
        self.key_field.as_ref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The identity of the Rust type whose values back this object type.
    pub fn native_type(&self) -> TypeId {
        self.native_type
    }
}
impl fmt::Debug for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectType")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("fields", &self.fields)
            .field("key_field", &self.key_field.as_ref().map(|field| field.name()))
            .finish()
    }
}
