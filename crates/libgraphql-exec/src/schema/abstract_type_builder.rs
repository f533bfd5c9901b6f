use crate::schema::SchemaBuilder;
use crate::schema::TypeRegistry;
use std::any::Any;
use std::any::TypeId;

/// Registers the member object types of a union or interface.
///
/// Each member must itself be registered with
/// [`SchemaBuilder::object`]; a value of the abstract type is matched to a
/// member by the Rust type of the value it holds.
pub struct AbstractTypeBuilder<'a> {
    builder: &'a mut SchemaBuilder,
    type_id: TypeId,
}
impl<'a> AbstractTypeBuilder<'a> {
    pub(crate) fn new(builder: &'a mut SchemaBuilder, type_id: TypeId) -> Self {
        Self {
            builder,
            type_id,
        }
    }

    pub fn member<M: Any>(&mut self) -> &mut Self {
        if let Some(descriptor) = self.builder.abstract_types.get_mut(&self.type_id) {
            descriptor.members.insert(TypeId::of::<M>(), TypeRegistry::object_ref::<M>);
        }
        self
    }
}
