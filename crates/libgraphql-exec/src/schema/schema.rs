use crate::operation::OperationKind;
use crate::schema::SchemaBuilder;
use crate::types::GraphQLType;
use crate::types::TypeRef;
use std::collections::HashMap;

/// An immutable, fully built type graph.
///
/// A `Schema` is shared read-only by every query executed against it.
#[derive(Clone, Debug)]
pub struct Schema {
    pub(crate) mutation_type: TypeRef,
    names: HashMap<String, TypeRef>,
    pub(crate) query_type: TypeRef,
    pub(crate) subscription_type: TypeRef,
    pub(crate) types: Vec<GraphQLType>,
}
impl Schema {
    pub(crate) fn new(
        types: Vec<GraphQLType>,
        query_type: TypeRef,
        mutation_type: TypeRef,
        subscription_type: TypeRef,
    ) -> Self {
        let names = types.iter()
            .enumerate()
            .filter_map(|(idx, type_)| type_.name().map(|name| (name.to_string(), TypeRef(idx))))
            .collect();
        Self {
            mutation_type,
            names,
            query_type,
            subscription_type,
            types,
        }
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Looks up the node behind a [`TypeRef`] produced by this schema.
    ///
    /// # Panics
    ///
    /// Panics if `type_ref` was produced by a different schema with more
    /// types than this one.
    pub fn get(&self, type_ref: TypeRef) -> &GraphQLType {
        &self.types[type_ref.0]
    }

    /// The root `Mutation` object type.
    pub fn mutation_type(&self) -> TypeRef {
        self.mutation_type
    }

    /// The root `Query` object type.
    pub fn query_type(&self) -> TypeRef {
        self.query_type
    }

    /// The root object type an operation of the given kind executes against.
    pub fn root_type(&self, kind: OperationKind) -> TypeRef {
        match kind {
            OperationKind::Mutation => self.mutation_type,
            OperationKind::Query => self.query_type,
            OperationKind::Subscription => self.subscription_type,
        }
    }

    /// The root `Subscription` object type.
    pub fn subscription_type(&self) -> TypeRef {
        self.subscription_type
    }

    /// Finds a named type (not a `List` or `NonNull` wrapper) by its name.
    pub fn type_by_name(&self, name: &str) -> Option<TypeRef> {
        self.names.get(name).copied()
    }

    /// Whether a fragment conditioned on `type_condition` applies to values
    /// of the object type `object_name`: the condition is absent, names the
    /// object itself, or names an interface or union the object belongs to.
    pub fn fragment_applies(&self, type_condition: Option<&str>, object_name: &str) -> bool {
        let Some(type_condition) = type_condition else {
            return true;
        };
        if type_condition == object_name {
            return true;
        }
        match self.type_by_name(type_condition).map(|type_ref| self.get(type_ref)) {
            Some(GraphQLType::Interface(interface)) => interface.members.contains_key(object_name),
            Some(GraphQLType::Union(union_)) => union_.members.contains_key(object_name),
            _ => false,
        }
    }

    /// Every node in the type graph, wrappers included.
    pub fn types(&self) -> impl Iterator<Item = (TypeRef, &GraphQLType)> {
        self.types.iter()
            .enumerate()
            .map(|(idx, type_)| (TypeRef(idx), type_))
    }
}
