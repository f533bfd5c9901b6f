use crate::error::FieldError;
use crate::schema::AbstractTypeBuilder;
use crate::schema::ArgumentError;
use crate::schema::GraphQLEnum;
use crate::schema::InputParser;
use crate::schema::MutationRoot;
use crate::schema::ObjectBuilder;
use crate::schema::QueryRoot;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::schema::SubscriptionEvent;
use crate::schema::TypeRegistry;
use crate::schema::descriptors::AbstractDescriptor;
use crate::schema::descriptors::AbstractKind;
use crate::schema::descriptors::EnumDescriptor;
use crate::schema::descriptors::ObjectDescriptor;
use crate::schema::descriptors::ScalarDescriptor;
use crate::schema::type_registry::RegisteredTypes;
use crate::types::EnumRepr;
use crate::types::ScalarSerializer;
use crate::value::Value;
use indexmap::IndexMap;
use std::any::Any;
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Collects type and field registrations and builds them into a [`Schema`].
///
/// Registration never fails eagerly: conflicting or duplicate registrations
/// are recorded and the first one is reported by [`SchemaBuilder::build`].
pub struct SchemaBuilder {
    pub(crate) abstract_types: IndexMap<TypeId, AbstractDescriptor>,
    enums: IndexMap<TypeId, EnumDescriptor>,
    pub(crate) errors: Vec<SchemaBuildError>,
    names: HashMap<String, TypeId>,
    pub(crate) objects: IndexMap<TypeId, ObjectDescriptor>,
    scalars: IndexMap<TypeId, ScalarDescriptor>,
}
impl SchemaBuilder {
    pub fn new() -> Self {
        let mut builder = Self {
            abstract_types: IndexMap::new(),
            enums: IndexMap::new(),
            errors: vec![],
            names: TypeRegistry::builtin_names().into_iter()
                .map(|(name, type_id)| (name.to_string(), type_id))
                .collect(),
            objects: IndexMap::new(),
            scalars: IndexMap::new(),
        };
        builder.register_object::<QueryRoot>("Query", Some(Arc::new(QueryRoot)));
        builder.register_object::<MutationRoot>("Mutation", Some(Arc::new(MutationRoot)));
        builder.register_object::<SubscriptionEvent>("Subscription", None);
        builder
    }

    /// Fields of the root `Query` type.
    pub fn query(&mut self) -> ObjectBuilder<'_, QueryRoot> {
        ObjectBuilder::new(self)
    }

    /// Fields of the root `Mutation` type.
    pub fn mutation(&mut self) -> ObjectBuilder<'_, MutationRoot> {
        ObjectBuilder::new(self)
    }

    /// Fields of the root `Subscription` type. Their resolvers receive the
    /// [`SubscriptionEvent`] being dispatched.
    pub fn subscription(&mut self) -> ObjectBuilder<'_, SubscriptionEvent> {
        ObjectBuilder::new(self)
    }

    /// Registers `T` as the Rust type backing the object type `name`, or
    /// returns the existing registration so more fields can be added to it.
    pub fn object<T: Send + Sync + 'static>(&mut self, name: &str) -> ObjectBuilder<'_, T> {
        self.register_object::<T>(name, None);
        ObjectBuilder::new(self)
    }

    fn register_object<T: 'static>(
        &mut self,
        name: &str,
        default_source: Option<Arc<dyn Any + Send + Sync>>,
    ) {
        let type_id = TypeId::of::<T>();
        let rust_type = std::any::type_name::<T>();
        if let Some(existing) = self.objects.get(&type_id) {
            if existing.name != name {
                self.errors.push(SchemaBuildError::ConflictingRegistration {
                    first_name: existing.name.clone(),
                    rust_type,
                    second_name: name.to_string(),
                });
            }
            return;
        }
        if !self.claim_name(name, type_id, rust_type) {
            return;
        }
        self.objects.insert(type_id, ObjectDescriptor {
            default_source,
            description: None,
            fields: IndexMap::new(),
            key: None,
            name: name.to_string(),
            rust_type,
        });
    }

    /// Registers `T` as a union type. Values of `T` must convert into
    /// [`FieldValue::Members`](crate::types::FieldValue::Members) holding
    /// exactly one member.
    pub fn union<T: 'static>(&mut self, name: &str) -> AbstractTypeBuilder<'_> {
        self.register_abstract::<T>(name, AbstractKind::Union)
    }

    /// Registers `T` as an interface type whose fields are those shared by
    /// all of its members.
    pub fn interface<T: 'static>(&mut self, name: &str) -> AbstractTypeBuilder<'_> {
        self.register_abstract::<T>(name, AbstractKind::Interface)
    }

    fn register_abstract<T: 'static>(
        &mut self,
        name: &str,
        kind: AbstractKind,
    ) -> AbstractTypeBuilder<'_> {
        let type_id = TypeId::of::<T>();
        let rust_type = std::any::type_name::<T>();
        match self.abstract_types.get(&type_id) {
            Some(existing) if existing.name != name || existing.kind != kind => {
                self.errors.push(SchemaBuildError::ConflictingRegistration {
                    first_name: existing.name.clone(),
                    rust_type,
                    second_name: name.to_string(),
                });
            },
            Some(_) => (),
            None => if self.claim_name(name, type_id, rust_type) {
                self.abstract_types.insert(type_id, AbstractDescriptor {
                    kind,
                    members: IndexMap::new(),
                    name: name.to_string(),
                    rust_type,
                });
            },
        }
        AbstractTypeBuilder::new(self, type_id)
    }

    /// Registers `T` as the Rust type behind the enum `name`, declaring each
    /// of `values` under its GraphQL name.
    pub fn enum_type<'v, T: GraphQLEnum>(
        &mut self,
        name: &str,
        values: impl IntoIterator<Item = (&'v str, T)>,
    ) -> &mut Self {
        let type_id = TypeId::of::<T>();
        let rust_type = std::any::type_name::<T>();
        if let Some(existing) = self.enums.get(&type_id) {
            self.errors.push(SchemaBuildError::ConflictingRegistration {
                first_name: existing.name.clone(),
                rust_type,
                second_name: name.to_string(),
            });
            return self;
        }
        match build_enum_descriptor(name, rust_type, values) {
            Ok(descriptor) => if self.claim_name(name, type_id, rust_type) {
                self.enums.insert(type_id, descriptor);
            },
            Err(err) => self.errors.push(err),
        }
        self
    }

    /// Registers `T` as the Rust type behind the custom scalar `name`.
    ///
    /// `serialize` produces the output value for a resolved `T`; `parse`
    /// decodes a non-null argument value into a `T`.
    pub fn scalar<T: Send + Sync + 'static>(
        &mut self,
        name: &str,
        serialize: impl Fn(&T) -> std::result::Result<Value, FieldError> + Send + Sync + 'static,
        parse: impl Fn(&Value) -> std::result::Result<T, ArgumentError> + Send + Sync + 'static,
    ) -> &mut Self {
        let type_id = TypeId::of::<T>();
        let rust_type = std::any::type_name::<T>();
        if let Some(existing) = self.scalars.get(&type_id) {
            self.errors.push(SchemaBuildError::ConflictingRegistration {
                first_name: existing.name.clone(),
                rust_type,
                second_name: name.to_string(),
            });
            return self;
        }
        if !self.claim_name(name, type_id, rust_type) {
            return self;
        }

        let serialize: ScalarSerializer = Arc::new(move |native: &(dyn Any + Send + Sync)| {
            match native.downcast_ref::<T>() {
                Some(value) => serialize(value),
                None => Err(FieldError::new(format!("expected a value of type {rust_type}"))),
            }
        });
        let parser: InputParser<T> = Arc::new(move |value: &Value| {
            if value.is_null() {
                Err(ArgumentError::required())
            } else {
                parse(value)
            }
        });
        self.scalars.insert(type_id, ScalarDescriptor {
            name: name.to_string(),
            parser: Arc::new(parser),
            rust_type,
            serialize,
        });
        self
    }

    fn claim_name(&mut self, name: &str, type_id: TypeId, rust_type: &'static str) -> bool {
        match self.names.get(name) {
            Some(claimed) if *claimed != type_id => {
                self.errors.push(SchemaBuildError::DuplicateTypeName {
                    type_name: name.to_string(),
                });
                false
            },
            Some(_) => {
                // The same Rust type may back at most one kind of named type.
                self.errors.push(SchemaBuildError::ConflictingRegistration {
                    first_name: name.to_string(),
                    rust_type,
                    second_name: name.to_string(),
                });
                false
            },
            None => {
                self.names.insert(name.to_string(), type_id);
                true
            },
        }
    }

    /// Builds every registered type, starting from the three roots.
    pub fn build(self) -> Result<Schema> {
        if let Some(err) = self.errors.into_iter().next() {
            return Err(err);
        }

        let mut registry = TypeRegistry::new(RegisteredTypes {
            abstract_types: self.abstract_types,
            enums: self.enums,
            names: self.names,
            objects: self.objects,
            scalars: self.scalars,
        });
        let query = registry.object_ref::<QueryRoot>()?;
        let mutation = registry.object_ref::<MutationRoot>()?;
        let subscription = registry.object_ref::<SubscriptionEvent>()?;
        let schema = registry.finish(query, mutation, subscription)?;
        tracing::debug!(types = schema.types.len(), "built schema");
        Ok(schema)
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn build_enum_descriptor<'v, T: GraphQLEnum>(
    enum_name: &str,
    rust_type: &'static str,
    entries: impl IntoIterator<Item = (&'v str, T)>,
) -> Result<EnumDescriptor> {
    let mut natives = IndexMap::new();
    let mut reverse: HashMap<EnumRepr, String> = HashMap::new();
    let mut values = IndexMap::new();
    let mut kind: Option<EnumRepr> = None;

    for (value_name, native) in entries {
        if values.contains_key(value_name) {
            return Err(SchemaBuildError::DuplicateEnumValue {
                enum_name: enum_name.to_string(),
                value_name: value_name.to_string(),
            });
        }

        let repr = native.repr();
        match &kind {
            Some(first) if !first.same_kind(&repr) => {
                return Err(SchemaBuildError::MixedEnumKinds {
                    enum_name: enum_name.to_string(),
                    expected: first.kind_name(),
                    found: repr.kind_name(),
                    value_name: value_name.to_string(),
                });
            },
            Some(_) => (),
            None => kind = Some(repr.clone()),
        }

        if let Some(first) = reverse.get(&repr) {
            return Err(SchemaBuildError::CollidingEnumValues {
                enum_name: enum_name.to_string(),
                first: first.clone(),
                repr,
                second: value_name.to_string(),
            });
        }

        reverse.insert(repr.clone(), value_name.to_string());
        values.insert(value_name.to_string(), repr);
        natives.insert(value_name.to_string(), native);
    }

    Ok(EnumDescriptor {
        name: enum_name.to_string(),
        natives: Arc::new(natives),
        reverse,
        rust_type,
        values,
    })
}
