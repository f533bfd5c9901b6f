use crate::types::TypeRef;
use indexmap::IndexMap;

/// Information associated with [`GraphQLType::Union`](crate::types::GraphQLType::Union).
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub(crate) members: IndexMap<String, TypeRef>,
    pub(crate) name: String,
}
impl UnionType {
    /// Member object types keyed by their names.
    ///
    /// The order of this map is the order in which members were registered on
    /// the union.
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
