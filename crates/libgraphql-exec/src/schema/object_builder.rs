use crate::context::Context;
use crate::error::ErrorCode;
use crate::error::FieldError;
use crate::operation::SelectionSet;
use crate::schema::InputType;
use crate::schema::IntoFieldResult;
use crate::schema::OutputType;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use crate::schema::TypeRegistry;
use crate::schema::descriptors::ErasedArguments;
use crate::schema::descriptors::FieldDescriptor;
use crate::types::FieldValue;
use crate::types::ParsedArguments;
use crate::types::Resolver;
use crate::value::Value;
use std::any::TypeId;
use std::marker::PhantomData;
use std::sync::Arc;

/// Registers fields on the object type backed by the Rust type `T`.
///
/// Resolvers come in three shapes, by what they receive: the source value
/// ([`field_func`](Self::field_func)), the source value and decoded arguments
/// ([`field_func_with_args`](Self::field_func_with_args)), or the execution
/// [`Context`] as well
/// ([`field_func_with_context`](Self::field_func_with_context)). Each may
/// return any [`IntoFieldResult`] shape; returning a
/// [`Deferred`](crate::schema::Deferred) marks the field as lazy.
pub struct ObjectBuilder<'a, T> {
    builder: &'a mut SchemaBuilder,
    marker: PhantomData<fn() -> T>,
}
impl<'a, T: Send + Sync + 'static> ObjectBuilder<'a, T> {
    pub(crate) fn new(builder: &'a mut SchemaBuilder) -> Self {
        Self {
            builder,
            marker: PhantomData,
        }
    }

    pub fn description(&mut self, description: &str) -> &mut Self {
        if let Some(descriptor) = self.builder.objects.get_mut(&TypeId::of::<T>()) {
            descriptor.description = Some(description.to_string());
        }
        self
    }

    /// Names the field whose value identifies an object of this type. It is
    /// resolved for every such object and reported under `__key`.
    pub fn key(&mut self, field_name: &str) -> &mut Self {
        if let Some(descriptor) = self.builder.objects.get_mut(&TypeId::of::<T>()) {
            descriptor.key = Some(field_name.to_string());
        }
        self
    }

    pub fn field_func<F, R, M>(&mut self, name: &str, func: F) -> &mut Self
    where
        F: Fn(&T) -> R + Send + Sync + 'static,
        R: IntoFieldResult<M>,
    {
        let resolver: Resolver = Arc::new(move |
            _ctx: &Context,
            source: &FieldValue,
            _args: &ParsedArguments,
            _selection_set: Option<&SelectionSet>,
        | {
            func(downcast_source::<T>(source)?).into_resolution()
        });
        self.register::<(), R, M>(name, resolver)
    }

    pub fn field_func_with_args<A, F, R, M>(&mut self, name: &str, func: F) -> &mut Self
    where
        A: InputType,
        F: Fn(&T, &A) -> R + Send + Sync + 'static,
        R: IntoFieldResult<M>,
    {
        let resolver: Resolver = Arc::new(move |
            _ctx: &Context,
            source: &FieldValue,
            args: &ParsedArguments,
            _selection_set: Option<&SelectionSet>,
        | {
            func(downcast_source::<T>(source)?, downcast_args::<A>(args)?).into_resolution()
        });
        self.register::<A, R, M>(name, resolver)
    }

    pub fn field_func_with_context<A, F, R, M>(&mut self, name: &str, func: F) -> &mut Self
    where
        A: InputType,
        F: Fn(&Context, &T, &A) -> R + Send + Sync + 'static,
        R: IntoFieldResult<M>,
    {
        let resolver: Resolver = Arc::new(move |
            ctx: &Context,
            source: &FieldValue,
            args: &ParsedArguments,
            _selection_set: Option<&SelectionSet>,
        | {
            func(ctx, downcast_source::<T>(source)?, downcast_args::<A>(args)?).into_resolution()
        });
        self.register::<A, R, M>(name, resolver)
    }

    fn register<A, R, M>(&mut self, name: &str, resolver: Resolver) -> &mut Self
    where
        A: InputType,
        R: IntoFieldResult<M>,
    {
        let Some(descriptor) = self.builder.objects.get_mut(&TypeId::of::<T>()) else {
            // The object's own registration failed and was recorded.
            return self;
        };
        if descriptor.fields.contains_key(name) {
            self.builder.errors.push(SchemaBuildError::DuplicateField {
                field_name: name.to_string(),
                type_name: descriptor.name.clone(),
            });
            return self;
        }
        descriptor.fields.insert(name.to_string(), FieldDescriptor {
            arguments: erase_arguments::<A>,
            lazy: R::LAZY,
            output: <R::Output as OutputType>::output_type,
            resolver,
        });
        self
    }
}

fn erase_arguments<A: InputType>(
    registry: &mut TypeRegistry,
) -> Result<ErasedArguments, SchemaBuildError> {
    let (parser, type_ref) = A::input_parser(registry)?;
    Ok(ErasedArguments {
        native: TypeId::of::<A>(),
        parser: Arc::new(move |value: &Value| {
            parser(value).map(|args| Arc::new(args) as ParsedArguments)
        }),
        type_ref,
    })
}

fn downcast_source<T: 'static>(source: &FieldValue) -> Result<&T, FieldError> {
    match source {
        FieldValue::Object(object) => object.downcast_ref::<T>(),
        _ => None,
    }.ok_or_else(|| FieldError::new(format!(
        "expected a source value of type {}, found {}",
        std::any::type_name::<T>(),
        source.kind_name(),
    )).with_code(ErrorCode::Internal))
}

fn downcast_args<A: 'static>(args: &ParsedArguments) -> Result<&A, FieldError> {
    args.downcast_ref::<A>().ok_or_else(|| FieldError::new(format!(
        "expected arguments of type {}",
        std::any::type_name::<A>(),
    )).with_code(ErrorCode::Internal))
}
