use crate::schema::SchemaBuildError;
use crate::schema::TypeRegistry;
use crate::types::ArgumentParser;
use crate::types::EnumRepr;
use crate::types::Resolver;
use crate::types::ScalarSerializer;
use crate::types::TypeRef;
use indexmap::IndexMap;
use std::any::Any;
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaBuildError>;

pub(crate) type TypeFn = fn(&mut TypeRegistry) -> Result<TypeRef>;

/// A field's argument parser with its Rust and GraphQL shapes erased.
pub(crate) struct ErasedArguments {
    pub(crate) native: TypeId,
    pub(crate) parser: ArgumentParser,
    pub(crate) type_ref: Option<TypeRef>,
}

pub(crate) struct FieldDescriptor {
    pub(crate) arguments: fn(&mut TypeRegistry) -> Result<ErasedArguments>,
    pub(crate) lazy: bool,
    pub(crate) output: TypeFn,
    pub(crate) resolver: Resolver,
}

pub(crate) struct ObjectDescriptor {
    pub(crate) default_source: Option<Arc<dyn Any + Send + Sync>>,
    pub(crate) description: Option<String>,
    pub(crate) fields: IndexMap<String, FieldDescriptor>,
    pub(crate) key: Option<String>,
    pub(crate) name: String,
    pub(crate) rust_type: &'static str,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum AbstractKind {
    Interface,
    Union,
}

pub(crate) struct AbstractDescriptor {
    pub(crate) kind: AbstractKind,
    pub(crate) members: IndexMap<TypeId, TypeFn>,
    pub(crate) name: String,
    pub(crate) rust_type: &'static str,
}

pub(crate) struct EnumDescriptor {
    pub(crate) name: String,
    /// An `Arc<IndexMap<String, T>>` of the enum's native values.
    pub(crate) natives: Arc<dyn Any + Send + Sync>,
    pub(crate) reverse: HashMap<EnumRepr, String>,
    pub(crate) rust_type: &'static str,
    pub(crate) values: IndexMap<String, EnumRepr>,
}

pub(crate) struct ScalarDescriptor {
    pub(crate) name: String,
    /// An `InputParser<T>` for the scalar's Rust type.
    pub(crate) parser: Arc<dyn Any + Send + Sync>,
    pub(crate) rust_type: &'static str,
    pub(crate) serialize: ScalarSerializer,
}
