use crate::schema::ArgumentError;
use crate::schema::GraphQLEnum;
use crate::schema::ID;
use crate::schema::InputParser;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::schema::descriptors::AbstractDescriptor;
use crate::schema::descriptors::AbstractKind;
use crate::schema::descriptors::EnumDescriptor;
use crate::schema::descriptors::ObjectDescriptor;
use crate::schema::descriptors::ScalarDescriptor;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeRef;
use crate::types::UnionType;
use crate::value::Value;
use indexmap::IndexMap;
use std::any::Any;
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaBuildError>;

pub(crate) struct RegisteredTypes {
    pub(crate) abstract_types: IndexMap<TypeId, AbstractDescriptor>,
    pub(crate) enums: IndexMap<TypeId, EnumDescriptor>,
    pub(crate) names: HashMap<String, TypeId>,
    pub(crate) objects: IndexMap<TypeId, ObjectDescriptor>,
    pub(crate) scalars: IndexMap<TypeId, ScalarDescriptor>,
}

/// The arena a [`Schema`] is built into.
///
/// Output and input types look up (or build) their nodes through the
/// registry while the schema is being built. Every named type is keyed by
/// the identity of the Rust type backing it. A node's slot is reserved and
/// recorded in that cache *before* the node's own fields are built, so a
/// type that refers back to itself resolves to its reserved slot instead of
/// being built again.
pub struct TypeRegistry {
    abstract_types: IndexMap<TypeId, AbstractDescriptor>,
    built: HashMap<(GraphQLTypeKind, TypeId), TypeRef>,
    builtins: HashMap<&'static str, TypeRef>,
    enum_natives: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
    enums: IndexMap<TypeId, EnumDescriptor>,
    input_objects: HashMap<TypeId, (TypeRef, Arc<dyn Any + Send + Sync>)>,
    names: HashMap<String, TypeId>,
    objects: IndexMap<TypeId, ObjectDescriptor>,
    scalar_parsers: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
    scalars: IndexMap<TypeId, ScalarDescriptor>,
    slot_names: HashMap<TypeRef, String>,
    types: Vec<Option<GraphQLType>>,
    wrappers: HashMap<(GraphQLTypeKind, TypeRef), TypeRef>,
}
impl TypeRegistry {
    pub(crate) fn new(registered: RegisteredTypes) -> Self {
        let mut registry = Self {
            abstract_types: registered.abstract_types,
            built: HashMap::new(),
            builtins: HashMap::new(),
            enum_natives: HashMap::new(),
            enums: registered.enums,
            input_objects: HashMap::new(),
            names: registered.names,
            objects: registered.objects,
            scalar_parsers: HashMap::new(),
            scalars: registered.scalars,
            slot_names: HashMap::new(),
            types: vec![],
            wrappers: HashMap::new(),
        };
        for name in ["Boolean", "Float", "ID", "Int", "String"] {
            let type_ref = registry.reserve(name);
            registry.fill(type_ref, GraphQLType::Scalar(ScalarType::builtin(name)));
            registry.builtins.insert(name, type_ref);
        }
        registry
    }

    /// The names claimed by the built-in scalars, keyed to the Rust type that
    /// stands for each.
    pub(crate) fn builtin_names() -> [(&'static str, TypeId); 5] {
        [
            ("Boolean", TypeId::of::<bool>()),
            ("Float", TypeId::of::<f64>()),
            ("ID", TypeId::of::<ID>()),
            ("Int", TypeId::of::<i64>()),
            ("String", TypeId::of::<String>()),
        ]
    }

    fn reserve(&mut self, name: &str) -> TypeRef {
        let type_ref = TypeRef(self.types.len());
        self.types.push(None);
        self.slot_names.insert(type_ref, name.to_string());
        type_ref
    }

    fn fill(&mut self, type_ref: TypeRef, type_: GraphQLType) {
        self.types[type_ref.0] = Some(type_);
    }

    fn wrap(&mut self, kind: GraphQLTypeKind, inner: TypeRef) -> TypeRef {
        if let Some(type_ref) = self.wrappers.get(&(kind, inner)) {
            return *type_ref;
        }
        let type_ref = TypeRef(self.types.len());
        self.types.push(Some(match kind {
            GraphQLTypeKind::List => GraphQLType::List(inner),
            _ => GraphQLType::NonNull(inner),
        }));
        self.wrappers.insert((kind, inner), type_ref);
        type_ref
    }

    /// One of the built-in scalars: `Boolean`, `Float`, `ID`, `Int`, or
    /// `String`.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not one of the built-in scalar names.
    pub fn builtin(&self, name: &str) -> TypeRef {
        self.builtins[name]
    }

    pub fn list(&mut self, inner: TypeRef) -> TypeRef {
        self.wrap(GraphQLTypeKind::List, inner)
    }

    pub fn non_null(&mut self, inner: TypeRef) -> TypeRef {
        self.wrap(GraphQLTypeKind::NonNull, inner)
    }

    /// Strips one level of `NonNull` wrapping, if present.
    pub fn nullable(&self, type_ref: TypeRef) -> TypeRef {
        match self.types.get(type_ref.0) {
            Some(Some(GraphQLType::NonNull(inner))) => *inner,
            _ => type_ref,
        }
    }

    pub fn object_ref<T: Any>(&mut self) -> Result<TypeRef> {
        self.build_object(TypeId::of::<T>(), std::any::type_name::<T>())
    }

    fn build_object(&mut self, type_id: TypeId, rust_type: &'static str) -> Result<TypeRef> {
        if let Some(type_ref) = self.built.get(&(GraphQLTypeKind::Object, type_id)) {
            return Ok(*type_ref);
        }
        let descriptor = self.objects.shift_remove(&type_id)
            .ok_or(SchemaBuildError::UnregisteredObject { rust_type })?;
        let type_ref = self.reserve(&descriptor.name);
        self.built.insert((GraphQLTypeKind::Object, type_id), type_ref);

        let mut fields = IndexMap::with_capacity(descriptor.fields.len());
        for (field_name, field_descriptor) in descriptor.fields {
            let field_type = (field_descriptor.output)(self)?;
            let arguments = (field_descriptor.arguments)(self)?;
            fields.insert(field_name.clone(), Field {
                arguments: arguments.parser,
                arguments_native: arguments.native,
                arguments_type: arguments.type_ref,
                lazy: field_descriptor.lazy,
                name: field_name,
                resolver: field_descriptor.resolver,
                type_ref: field_type,
            });
        }

        let key_field = match descriptor.key {
            Some(key) => Some(fields.get(&key).cloned().ok_or_else(|| {
                SchemaBuildError::UnknownKeyField {
                    field_name: key.clone(),
                    type_name: descriptor.name.clone(),
                }
            })?),
            None => None,
        };

        self.fill(type_ref, GraphQLType::Object(ObjectType {
            default_source: descriptor.default_source,
            description: descriptor.description,
            fields,
            key_field,
            name: descriptor.name,
            native_type: type_id,
        }));
        Ok(type_ref)
    }

    /// The union or interface registered for `T`.
    pub fn abstract_ref<T: Any>(&mut self) -> Result<TypeRef> {
        self.build_abstract(TypeId::of::<T>(), std::any::type_name::<T>())
    }

    fn build_abstract(&mut self, type_id: TypeId, rust_type: &'static str) -> Result<TypeRef> {
        for kind in [GraphQLTypeKind::Interface, GraphQLTypeKind::Union] {
            if let Some(type_ref) = self.built.get(&(kind, type_id)) {
                return Ok(*type_ref);
            }
        }
        let descriptor = self.abstract_types.shift_remove(&type_id)
            .ok_or(SchemaBuildError::UnregisteredAbstractType { rust_type })?;
        let kind = match descriptor.kind {
            AbstractKind::Interface => GraphQLTypeKind::Interface,
            AbstractKind::Union => GraphQLTypeKind::Union,
        };
        let type_ref = self.reserve(&descriptor.name);
        self.built.insert((kind, type_id), type_ref);

        let mut members = IndexMap::with_capacity(descriptor.members.len());
        for member_fn in descriptor.members.values() {
            let member_ref = member_fn(self)?;
            let member_name = self.slot_names.get(&member_ref)
                .cloned()
                .ok_or(SchemaBuildError::UnbuiltType { type_ref: member_ref })?;
            members.insert(member_name, member_ref);
        }

        self.fill(type_ref, match descriptor.kind {
            // Interface fields depend on every member being fully built, so
            // they are filled in by `finish()`.
            AbstractKind::Interface => GraphQLType::Interface(InterfaceType {
                fields: IndexMap::new(),
                members,
                name: descriptor.name,
            }),
            AbstractKind::Union => GraphQLType::Union(UnionType {
                members,
                name: descriptor.name,
            }),
        });
        Ok(type_ref)
    }

    pub fn enum_ref<T: GraphQLEnum>(&mut self) -> Result<TypeRef> {
        self.build_enum(TypeId::of::<T>(), std::any::type_name::<T>())
    }

    fn build_enum(&mut self, type_id: TypeId, rust_type: &'static str) -> Result<TypeRef> {
        if let Some(type_ref) = self.built.get(&(GraphQLTypeKind::Enum, type_id)) {
            return Ok(*type_ref);
        }
        let descriptor = self.enums.shift_remove(&type_id)
            .ok_or(SchemaBuildError::UnregisteredEnum { rust_type })?;
        let type_ref = self.reserve(&descriptor.name);
        self.built.insert((GraphQLTypeKind::Enum, type_id), type_ref);
        self.enum_natives.insert(type_id, descriptor.natives);
        self.fill(type_ref, GraphQLType::Enum(EnumType {
            name: descriptor.name,
            reverse: descriptor.reverse,
            values: descriptor.values,
        }));
        Ok(type_ref)
    }

    /// An argument parser for the enum registered for `T`, accepting a
    /// declared value name.
    pub fn enum_input<T: GraphQLEnum>(&mut self) -> Result<(InputParser<T>, Option<TypeRef>)> {
        let type_ref = self.enum_ref::<T>()?;
        let natives = self.enum_natives.get(&TypeId::of::<T>())
            .cloned()
            .and_then(|natives| natives.downcast::<IndexMap<String, T>>().ok())
            .ok_or(SchemaBuildError::UnregisteredEnum {
                rust_type: std::any::type_name::<T>(),
            })?;
        let parser: InputParser<T> = Arc::new(move |value: &Value| match value {
            Value::Null => Err(ArgumentError::required()),
            Value::String(name) | Value::Enum(name) => natives.get(name)
                .cloned()
                .ok_or_else(|| ArgumentError::new(format!("unknown enum value {name}"))),
            _ => Err(ArgumentError::new("not a string")),
        });
        Ok((parser, Some(self.non_null(type_ref))))
    }

    pub fn scalar_ref<T: Any>(&mut self) -> Result<TypeRef> {
        self.build_scalar(TypeId::of::<T>(), std::any::type_name::<T>())
    }

    fn build_scalar(&mut self, type_id: TypeId, rust_type: &'static str) -> Result<TypeRef> {
        if let Some(type_ref) = self.built.get(&(GraphQLTypeKind::Scalar, type_id)) {
            return Ok(*type_ref);
        }
        let descriptor = self.scalars.shift_remove(&type_id)
            .ok_or(SchemaBuildError::UnregisteredScalar { rust_type })?;
        let type_ref = self.reserve(&descriptor.name);
        self.built.insert((GraphQLTypeKind::Scalar, type_id), type_ref);
        self.scalar_parsers.insert(type_id, descriptor.parser);
        self.fill(type_ref, GraphQLType::Scalar(ScalarType {
            name: descriptor.name,
            serialize: Some(descriptor.serialize),
        }));
        Ok(type_ref)
    }

    /// The argument parser registered along with the custom scalar for `T`.
    pub fn scalar_input<T: Any + Send + Sync>(&mut self) -> Result<(InputParser<T>, Option<TypeRef>)> {
        let type_ref = self.scalar_ref::<T>()?;
        let parser = self.scalar_parsers.get(&TypeId::of::<T>())
            .and_then(|parser| parser.downcast_ref::<InputParser<T>>())
            .cloned()
            .ok_or(SchemaBuildError::UnregisteredScalar {
                rust_type: std::any::type_name::<T>(),
            })?;
        Ok((parser, Some(self.non_null(type_ref))))
    }

    fn claim_name(&mut self, name: &str, type_id: TypeId) -> Result<()> {
        match self.names.get(name) {
            Some(claimed) if *claimed != type_id => Err(SchemaBuildError::DuplicateTypeName {
                type_name: name.to_string(),
            }),
            Some(_) => Ok(()),
            None => {
                self.names.insert(name.to_string(), type_id);
                Ok(())
            },
        }
    }

    /// The input object slot reserved for `type_id`, along with the cell its
    /// parser is published through once built.
    pub(crate) fn input_object(&self, type_id: TypeId) -> Option<(TypeRef, Arc<dyn Any + Send + Sync>)> {
        self.input_objects.get(&type_id).cloned()
    }

    pub(crate) fn reserve_input_object(
        &mut self,
        name: &str,
        type_id: TypeId,
        cell: Arc<dyn Any + Send + Sync>,
    ) -> Result<TypeRef> {
        self.claim_name(name, type_id)?;
        let type_ref = self.reserve(name);
        self.input_objects.insert(type_id, (type_ref, cell));
        Ok(type_ref)
    }

    pub(crate) fn fill_input_object(&mut self, type_ref: TypeRef, type_: InputObjectType) {
        self.fill(type_ref, GraphQLType::InputObject(type_));
    }

    /// Builds every registered type not reached from the roots, computes
    /// interface fields, and seals the arena into a [`Schema`].
    pub(crate) fn finish(
        mut self,
        query: TypeRef,
        mutation: TypeRef,
        subscription: TypeRef,
    ) -> Result<Schema> {
        while let Some((type_id, descriptor)) = self.objects.first() {
            let (type_id, rust_type) = (*type_id, descriptor.rust_type);
            self.build_object(type_id, rust_type)?;
        }
        while let Some((type_id, descriptor)) = self.abstract_types.first() {
            let (type_id, rust_type) = (*type_id, descriptor.rust_type);
            self.build_abstract(type_id, rust_type)?;
        }
        while let Some((type_id, descriptor)) = self.enums.first() {
            let (type_id, rust_type) = (*type_id, descriptor.rust_type);
            self.build_enum(type_id, rust_type)?;
        }
        while let Some((type_id, descriptor)) = self.scalars.first() {
            let (type_id, rust_type) = (*type_id, descriptor.rust_type);
            self.build_scalar(type_id, rust_type)?;
        }

        let mut types = Vec::with_capacity(self.types.len());
        for (idx, type_) in self.types.into_iter().enumerate() {
            types.push(type_.ok_or(SchemaBuildError::UnbuiltType {
                type_ref: TypeRef(idx),
            })?);
        }

        let interface_fields: Vec<(usize, IndexMap<String, Field>)> = types.iter()
            .enumerate()
            .filter_map(|(idx, type_)| match type_ {
                GraphQLType::Interface(interface) =>
                    Some((idx, common_fields(&types, interface.members.values()))),
                _ => None,
            })
            .collect();
        for (idx, fields) in interface_fields {
            if let GraphQLType::Interface(interface) = &mut types[idx] {
                interface.fields = fields;
            }
        }

        Ok(Schema::new(types, query, mutation, subscription))
    }
}

/// The fields declared with the same shape by every one of `members`.
fn common_fields<'a>(
    types: &[GraphQLType],
    members: impl Iterator<Item = &'a TypeRef>,
) -> IndexMap<String, Field> {
    let mut members = members.filter_map(|member_ref| match &types[member_ref.0] {
        GraphQLType::Object(object) => Some(object),
        _ => None,
    });
    let mut fields = match members.next() {
        Some(first) => first.fields.clone(),
        None => return IndexMap::new(),
    };
    for member in members {
        fields.retain(|name, field| {
            member.fields.get(name).is_some_and(|other| field.same_shape(other))
        });
    }
    fields
}
