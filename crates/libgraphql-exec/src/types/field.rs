use crate::context::Context;
use crate::error::FieldError;
use crate::operation::SelectionSet;
use crate::schema::ArgumentError;
use crate::types::FieldValue;
use crate::types::TypeRef;
use crate::value::Value;
use std::any::Any;
use std::any::TypeId;
use std::fmt;
use std::sync::Arc;

/// A field's decoded arguments. The concrete type behind the `Any` is the
/// argument type the field's resolver was registered with.
pub type ParsedArguments = Arc<dyn Any + Send + Sync>;

/// Decodes a selection's raw argument object into [`ParsedArguments`].
pub type ArgumentParser = Arc<
    dyn Fn(&Value) -> Result<ParsedArguments, ArgumentError> + Send + Sync
>;

/// A computation handed back by a lazy field's resolver. The executor runs it
/// during a later pass over the result tree.
pub type Thunk = Box<dyn FnOnce() -> Result<FieldValue, FieldError> + Send>;

/// The callable behind a [`Field`].
pub type Resolver = Arc<
    dyn Fn(
        &Context,
        &FieldValue,
        &ParsedArguments,
        Option<&SelectionSet>,
    ) -> Result<Resolution, FieldError>
    + Send
    + Sync
>;

/// What a [`Resolver`] produces: either a value ready for the executor to
/// recurse into, or a [`Thunk`] that must be run first.
pub enum Resolution {
    Ready(FieldValue),
    Deferred(Thunk),
}
impl fmt::Debug for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready(value) => f.debug_tuple("Ready").field(value).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

/// A named, typed output slot on an object or interface type.
#[derive(Clone)]
pub struct Field {
    pub(crate) arguments: ArgumentParser,
    pub(crate) arguments_native: TypeId,
    pub(crate) arguments_type: Option<TypeRef>,
    pub(crate) lazy: bool,
    pub(crate) name: String,
    pub(crate) resolver: Resolver,
    pub(crate) type_ref: TypeRef,
}
impl Field {
    /// The input type describing this field's arguments, or `None` for a
    /// field that takes none.
    pub fn arguments_type(&self) -> Option<TypeRef> {
        self.arguments_type
    }

    /// Whether this field's resolver hands back a deferred computation.
    pub fn is_lazy(&self) -> bool {
        self.lazy
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parse_arguments(&self, args: &Value) -> Result<ParsedArguments, ArgumentError> {
        (self.arguments)(args)
    }

    pub fn resolve(
        &self,
        ctx: &Context,
        source: &FieldValue,
        args: &ParsedArguments,
        selection_set: Option<&SelectionSet>,
    ) -> Result<Resolution, FieldError> {
        (self.resolver)(ctx, source, args, selection_set)
    }

    /// Two fields have the same shape when a selection validated against one
    /// can be executed against the other.
    pub(crate) fn same_shape(&self, other: &Field) -> bool {
        self.type_ref == other.type_ref
            && self.arguments_type == other.arguments_type
            && self.arguments_native == other.arguments_native
    }

    pub fn type_ref(&self) -> TypeRef {
        self.type_ref
    }
}
impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("type_ref", &self.type_ref)
            .field("arguments_type", &self.arguments_type)
            .field("lazy", &self.lazy)
            .finish()
    }
}
