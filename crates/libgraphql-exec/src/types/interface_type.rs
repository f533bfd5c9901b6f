use crate::types::Field;
use crate::types::TypeRef;
use indexmap::IndexMap;

/// Information associated with
/// [`GraphQLType::Interface`](crate::types::GraphQLType::Interface).
///
/// An interface's fields are the fields every member object declares with the
/// same name, type, and argument shape. Selections of those fields run the
/// matched member's own resolvers.
#[derive(Clone, Debug)]
pub struct InterfaceType {
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) members: IndexMap<String, TypeRef>,
    pub(crate) name: String,
}
impl InterfaceType {
    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    /// Member object types keyed by their names, in registration order.
    pub fn members(&self) -> &IndexMap<String, TypeRef> {
        &self.members
    }

    pub fn member_type_names(&self) -> Vec<&str> {
        self.members.keys().map(|name| name.as_str()).collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
