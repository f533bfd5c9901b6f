use crate::types::TypeRef;
use indexmap::IndexMap;

/// Information associated with
/// [`GraphQLType::InputObject`](crate::types::GraphQLType::InputObject).
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub(crate) fields: IndexMap<String, TypeRef>,
    pub(crate) name: String,
}
impl InputObjectType {
    pub fn fields(&self) -> &IndexMap<String, TypeRef> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
