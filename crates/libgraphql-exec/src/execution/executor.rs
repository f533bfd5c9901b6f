use crate::context::Context;
use crate::error::ErrorCode;
use crate::error::ExecutionError;
use crate::error::FieldError;
use crate::execution::flatten::flatten;
use crate::execution::output::Output;
use crate::execution::output::Pending;
use crate::operation::Query;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::operation::should_include;
use crate::schema::Schema;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::FieldValue;
use crate::types::GraphQLType;
use crate::types::Member;
use crate::types::ObjectType;
use crate::types::ParsedArguments;
use crate::types::Resolution;
use crate::types::ScalarType;
use crate::types::TypeRef;
use crate::types::UnionType;
use crate::value::Value;
use indexmap::IndexMap;
use std::any::Any;
use std::backtrace::Backtrace;
use std::panic;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

type Result<T> = std::result::Result<T, ExecutionError>;

/// Evaluates validated queries against a [`Schema`].
///
/// Execution is a synchronous walk of the result tree. Lazy fields leave a
/// placeholder in the tree; once the walk finishes, the executor makes
/// further passes over the tree, each running every placeholder found and
/// executing its value, until a pass leaves no placeholder behind. Lazy
/// fields discovered during a pass are run by the next pass, so the lazy
/// fields of one depth all run before any of the next depth.
///
/// The first error raised within an object discards the whole object: no
/// partial results are produced.
#[derive(Clone, Copy, Debug)]
pub struct Executor<'s> {
    schema: &'s Schema,
}
impl<'s> Executor<'s> {
    pub fn new(schema: &'s Schema) -> Self {
        Self {
            schema,
        }
    }

    /// Executes `query` against the type `type_ref`, starting from `source`.
    ///
    /// A null `source` is replaced by the root object's own default value
    /// (the `Query` and `Mutation` roots have one).
    pub fn execute(
        &self,
        ctx: &Context,
        type_ref: TypeRef,
        source: FieldValue,
        query: &Query,
    ) -> Result<Value> {
        self.execute_counting_passes(ctx, type_ref, source, query)
            .map(|(value, _passes)| value)
    }

    pub(crate) fn execute_counting_passes(
        &self,
        ctx: &Context,
        type_ref: TypeRef,
        source: FieldValue,
        query: &Query,
    ) -> Result<(Value, usize)> {
        let source = match (source, self.schema.get(type_ref)) {
            (FieldValue::Null, GraphQLType::Object(object)) => object.default_source()
                .map(|default| FieldValue::Object(default.clone()))
                .unwrap_or_default(),
            (source, _) => source,
        };

        tracing::debug!(
            kind = query.kind().as_str(),
            name = query.name().unwrap_or(""),
            "executing operation",
        );
        let mut run = Run {
            ctx,
            pending: 0,
            schema: self.schema,
        };
        let mut output = run.execute_type(type_ref, source, Some(query.selection_set()))?;

        let mut passes = 0;
        while run.pending > 0 {
            passes += 1;
            tracing::debug!(pass = passes, pending = run.pending, "resolving lazy fields");
            run.pending = 0;
            run.resolve_pending(&mut output)?;
        }
        Ok((output.into_value(), passes))
    }
}

/// The state of one execution.
struct Run<'r> {
    ctx: &'r Context,
    /// Placeholders added to the tree since the last pass started.
    pending: usize,
    schema: &'r Schema,
}
impl Run<'_> {
    fn execute_type(
        &mut self,
        type_ref: TypeRef,
        value: FieldValue,
        selection_set: Option<&SelectionSet>,
    ) -> Result<Output> {
        self.ctx.check()?;

        let schema = self.schema;
        match schema.get(type_ref) {
            GraphQLType::Scalar(scalar) => execute_scalar(scalar, value),

            GraphQLType::Enum(enum_type) => execute_enum(enum_type, value),

            GraphQLType::NonNull(inner) => self.execute_type(*inner, value, selection_set),

            GraphQLType::List(inner) => match value {
                FieldValue::Null => Ok(Output::List(vec![])),
                FieldValue::List(items) => {
                    let mut outputs = Vec::with_capacity(items.len());
                    for (idx, item) in items.into_iter().enumerate() {
                        outputs.push(
                            self.execute_type(*inner, item, selection_set)
                                .map_err(|err| err.nest(idx))?,
                        );
                    }
                    Ok(Output::List(outputs))
                },
                other => Err(mismatch("a list", &other)),
            },

            GraphQLType::Object(object) => self.execute_object(object, value, selection_set),

            GraphQLType::Union(union_) => self.execute_union(union_, value, selection_set),

            GraphQLType::Interface(interface) => {
                let members = match value {
                    FieldValue::Null => return Ok(Output::null()),
                    FieldValue::Members(members) => members,
                    other => return Err(mismatch("an interface value", &other)),
                };
                // Several populated members are tolerated; the first wins.
                match members.into_iter().next() {
                    Some(member) => self.execute_member(
                        interface.name(),
                        &interface.members,
                        member,
                        selection_set,
                    ),
                    None => Ok(Output::null()),
                }
            },

            GraphQLType::InputObject(input_object) => Err(ExecutionError::new(
                format!("input type \"{}\" cannot be executed", input_object.name()),
                ErrorCode::Internal,
            )),
        }
    }

    /// A union's own `__typename` selections report the union's name. The
    /// populated member's object result, built from the fragments that apply
    /// to it, is merged over them.
    fn execute_union(
        &mut self,
        union_: &UnionType,
        value: FieldValue,
        selection_set: Option<&SelectionSet>,
    ) -> Result<Output> {
        let schema = self.schema;
        let members = match value {
            FieldValue::Null => return Ok(Output::null()),
            FieldValue::Members(members) => members,
            other => return Err(mismatch("a union value", &other)),
        };
        if members.len() > 1 {
            let names: Vec<&str> = members.iter()
                .map(|member| {
                    member_object(schema, &union_.members, member)
                        .map_or(member.type_name, ObjectType::name)
                })
                .collect();
            return Err(ExecutionError::new(
                format!(
                    "union type field should only return one value, but received: {}",
                    names.join(" "),
                ),
                ErrorCode::Unknown,
            ));
        }
        let selection_set = selection_set.ok_or_else(|| ExecutionError::new(
            "union field must have selections",
            ErrorCode::Internal,
        ))?;

        let mut fields = IndexMap::new();
        for selection in &selection_set.selections {
            let included = should_include(&selection.directives)
                .map_err(|err| ExecutionError::new(err.to_string(), ErrorCode::InvalidArgument))?;
            if included && selection.name == "__typename" {
                fields.insert(selection.alias.clone(), Output::Value(Value::String(union_.name().to_string())));
            }
        }

        let Some(member) = members.into_iter().next() else {
            return Ok(Output::Object(fields));
        };
        let object = member_object(schema, &union_.members, &member).ok_or_else(|| ExecutionError::new(
            format!("{} is not a member of {}", member.type_name, union_.name()),
            ErrorCode::Internal,
        ))?;
        let fragments_only = SelectionSet {
            fragments: selection_set.fragments.clone(),
            selections: vec![],
        };
        let output = self.execute_object(object, member.value, Some(&fragments_only))
            .map_err(|err| err.nest(object.name()))?;
        match output {
            Output::Object(member_fields) => fields.extend(member_fields),
            Output::Value(Value::Null) => (),
            other => return Ok(other),
        }
        Ok(Output::Object(fields))
    }

    fn execute_member(
        &mut self,
        abstract_name: &str,
        candidates: &IndexMap<String, TypeRef>,
        member: Member,
        selection_set: Option<&SelectionSet>,
    ) -> Result<Output> {
        let object = member_object(self.schema, candidates, &member).ok_or_else(|| ExecutionError::new(
            format!("{} is not a member of {abstract_name}", member.type_name),
            ErrorCode::Internal,
        ))?;
        self.execute_object(object, member.value, selection_set)
    }

    fn execute_object(
        &mut self,
        object: &ObjectType,
        source: FieldValue,
        selection_set: Option<&SelectionSet>,
    ) -> Result<Output> {
        if source.is_null() {
            return Ok(Output::null());
        }
        let selection_set = selection_set.ok_or_else(|| ExecutionError::new(
            "object field must have selections",
            ErrorCode::Internal,
        ))?;
        let selections = flatten(self.schema, &object.name, selection_set)
            .map_err(|err| ExecutionError::new(err.to_string(), ErrorCode::InvalidArgument))?;

        let mut fields = IndexMap::with_capacity(selections.len() + 1);
        for selection in selections {
            if selection.name == "__typename" {
                fields.insert(selection.alias.clone(), Output::Value(Value::String(object.name.clone())));
                continue;
            }
            let output = self.execute_selection(object, &source, &selection)
                .map_err(|err| err.nest(selection.alias()))?;
            fields.insert(selection.alias.clone(), output);
        }

        if let Some(key_field) = &object.key_field {
            let output = key_field.parse_arguments(&Value::Null)
                .map_err(|err| ExecutionError::new(err.to_string(), ErrorCode::InvalidArgument))
                .and_then(|args| self.execute_field(key_field, &source, &args, None))
                .map_err(|err| err.nest("__key"))?;
            fields.insert("__key".to_string(), output);
        }
        Ok(Output::Object(fields))
    }

    fn execute_selection(
        &mut self,
        object: &ObjectType,
        source: &FieldValue,
        selection: &Selection,
    ) -> Result<Output> {
        let field = object.fields.get(&selection.name).ok_or_else(|| ExecutionError::new(
            format!("unknown field \"{}\"", selection.name),
            ErrorCode::InvalidArgument,
        ))?;

        if !selection.is_parsed() {
            let parsed = field.parse_arguments(&selection.args)
                .map_err(|err| ExecutionError::new(
                    format!("error parsing args for \"{}\": {err}", selection.name),
                    ErrorCode::InvalidArgument,
                ))?;
            let _ = selection.parsed_args.set(parsed);
        }
        let args = selection.parsed_args.get().cloned().ok_or_else(|| ExecutionError::new(
            "arguments were not decoded",
            ErrorCode::Internal,
        ))?;

        tracing::trace!(object = object.name(), field = selection.name(), "resolving field");
        self.execute_field(field, source, &args, selection.selection_set.as_ref())
    }

    fn execute_field(
        &mut self,
        field: &Field,
        source: &FieldValue,
        args: &ParsedArguments,
        selection_set: Option<&Arc<SelectionSet>>,
    ) -> Result<Output> {
        let ctx = self.ctx;
        let resolution = contain_panic(field.name(), || {
            field.resolve(ctx, source, args, selection_set.map(Arc::as_ref))
        })?;
        match resolution {
            Resolution::Ready(value) =>
                self.execute_type(field.type_ref(), value, selection_set.map(Arc::as_ref)),

            Resolution::Deferred(thunk) => {
                self.pending += 1;
                Ok(Output::Pending(Pending {
                    selection_set: selection_set.cloned(),
                    thunk,
                    type_ref: field.type_ref(),
                }))
            },
        }
    }

    /// Runs every placeholder present in `output` when the pass starts.
    /// Placeholders produced along the way are left for the next pass.
    fn resolve_pending(&mut self, output: &mut Output) -> Result<()> {
        self.ctx.check()?;
        match output {
            Output::Value(_) => Ok(()),

            Output::List(items) => {
                for (idx, item) in items.iter_mut().enumerate() {
                    self.resolve_pending(item).map_err(|err| err.nest(idx))?;
                }
                Ok(())
            },

            Output::Object(fields) => {
                for (key, field) in fields.iter_mut() {
                    self.resolve_pending(field).map_err(|err| err.nest(key.as_str()))?;
                }
                Ok(())
            },

            Output::Pending(_) => {
                let resolved = match std::mem::replace(output, Output::null()) {
                    Output::Pending(pending) => {
                        let Pending { selection_set, thunk, type_ref } = pending;
                        let value = contain_panic("lazy field", thunk)?;
                        self.execute_type(type_ref, value, selection_set.as_deref())?
                    },
                    other => other,
                };
                *output = resolved;
                Ok(())
            },
        }
    }
}

/// The member object type of an abstract type whose Rust type is that of
/// `member`'s value.
fn member_object<'s>(
    schema: &'s Schema,
    candidates: &IndexMap<String, TypeRef>,
    member: &Member,
) -> Option<&'s ObjectType> {
    candidates.values().find_map(|type_ref| match schema.get(*type_ref) {
        GraphQLType::Object(object) if object.native_type == member.type_id => Some(object),
        _ => None,
    })
}

fn execute_scalar(scalar: &ScalarType, value: FieldValue) -> Result<Output> {
    match value {
        FieldValue::Null => Ok(Output::null()),
        FieldValue::Scalar(value) => Ok(Output::Value(value)),
        FieldValue::Native(native) => match &scalar.serialize {
            Some(serialize) => Ok(Output::Value(serialize(native.as_ref())?)),
            None => Err(ExecutionError::new(
                format!("scalar {} has no serializer", scalar.name()),
                ErrorCode::Internal,
            )),
        },
        other => Err(mismatch("a scalar value", &other)),
    }
}

fn execute_enum(enum_type: &EnumType, value: FieldValue) -> Result<Output> {
    match value {
        FieldValue::Null => Ok(Output::null()),
        FieldValue::Enum(repr) => enum_type.name_of(&repr)
            .map(|name| Output::Value(Value::Enum(name.to_string())))
            .ok_or_else(|| ExecutionError::new("enum is not valid", ErrorCode::Unknown)),
        other => Err(mismatch("an enum value", &other)),
    }
}

fn mismatch(expected: &str, found: &FieldValue) -> ExecutionError {
    ExecutionError::new(
        format!("expected {expected}, found {}", found.kind_name()),
        ErrorCode::Internal,
    )
}

/// Runs a resolver (or a lazy field's computation), turning a panic into an
/// `Internal` error that carries the panic message and a backtrace.
fn contain_panic<T>(
    field_name: &str,
    resolve: impl FnOnce() -> std::result::Result<T, FieldError>,
) -> Result<T> {
    match panic::catch_unwind(AssertUnwindSafe(resolve)) {
        Ok(result) => result.map_err(ExecutionError::from),
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            tracing::warn!(field = field_name, panic = message.as_str(), "resolver panicked");
            Err(ExecutionError::new(
                format!("graphql: panic: {message}\n{}", Backtrace::force_capture()),
                ErrorCode::Internal,
            ))
        },
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
