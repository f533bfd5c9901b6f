use crate::schema::ArgumentError;
use crate::schema::InputParser;
use crate::schema::InputType;
use crate::schema::SchemaBuildError;
use crate::schema::TypeRegistry;
use crate::types::InputObjectType;
use crate::types::TypeRef;
use crate::value::Value;
use indexmap::IndexMap;
use std::any::TypeId;
use std::sync::Arc;
use std::sync::OnceLock;

type Result<T> = std::result::Result<T, SchemaBuildError>;

type Setter<T> = Box<dyn Fn(&mut T, &Value) -> std::result::Result<(), ArgumentError> + Send + Sync>;
type FieldFn<T> = Box<dyn FnOnce(&mut TypeRegistry) -> Result<(Setter<T>, Option<TypeRef>)>>;

static NULL_VALUE: Value = Value::Null;

/// Describes how a Rust struct is decoded from an input object value, one
/// field setter at a time.
///
/// ```ignore
/// impl InputType for Filter {
///     fn input_parser(registry: &mut TypeRegistry) -> Result<(InputParser<Self>, Option<TypeRef>), SchemaBuildError> {
///         InputObject::<Filter>::new("Filter")
///             .field("name", |filter: &mut Filter, name: String| filter.name = name)
///             .field("or", |filter: &mut Filter, or: Option<Vec<Filter>>| filter.or = or)
///             .build(registry)
///     }
/// }
/// ```
///
/// Decoding starts from `T::default()`. Keys of the input value that name no
/// declared field are rejected, and a field that is absent from the input is
/// decoded from `null`, so only `Option` fields may be omitted.
pub struct InputObject<T> {
    duplicate_field: Option<String>,
    fields: IndexMap<String, FieldFn<T>>,
    name: String,
}
impl<T: Default + Send + Sync + 'static> InputObject<T> {
    pub fn new(name: &str) -> Self {
        Self {
            duplicate_field: None,
            fields: IndexMap::new(),
            name: name.to_string(),
        }
    }

    pub fn field<V: InputType>(
        mut self,
        name: &str,
        set: impl Fn(&mut T, V) + Send + Sync + 'static,
    ) -> Self {
        if self.fields.contains_key(name) {
            self.duplicate_field.get_or_insert_with(|| name.to_string());
            return self;
        }
        self.fields.insert(name.to_string(), Box::new(move |registry| {
            let (parser, type_ref) = V::input_parser(registry)?;
            let setter: Setter<T> = Box::new(move |target: &mut T, value: &Value| {
                set(target, parser(value)?);
                Ok(())
            });
            Ok((setter, type_ref))
        }));
        self
    }

    /// Registers this input object (once per Rust type) and returns its
    /// parser.
    ///
    /// The type's slot and parser cell are published before any field type is
    /// built, so a field that refers back to `T` gets a parser that reads the
    /// cell at decode time.
    pub fn build(self, registry: &mut TypeRegistry) -> Result<(InputParser<T>, Option<TypeRef>)> {
        let type_id = TypeId::of::<T>();
        if let Some((type_ref, cell)) = registry.input_object(type_id) {
            let cell = cell.downcast::<OnceLock<InputParser<T>>>()
                .map_err(|_| SchemaBuildError::DuplicateTypeName {
                    type_name: self.name.clone(),
                })?;
            let parser: InputParser<T> = Arc::new(move |value: &Value| match cell.get() {
                Some(parser) => parser(value),
                None => Err(ArgumentError::new("input object used before it was built")),
            });
            return Ok((parser, Some(registry.non_null(type_ref))));
        }

        if let Some(field_name) = self.duplicate_field {
            return Err(SchemaBuildError::DuplicateInputField {
                field_name,
                type_name: self.name,
            });
        }

        let cell: Arc<OnceLock<InputParser<T>>> = Arc::new(OnceLock::new());
        let type_ref = registry.reserve_input_object(&self.name, type_id, cell.clone())?;

        let mut setters = IndexMap::with_capacity(self.fields.len());
        let mut field_types = IndexMap::with_capacity(self.fields.len());
        for (field_name, field_fn) in self.fields {
            let (setter, field_type) = field_fn(registry)?;
            let field_type = field_type.ok_or_else(|| SchemaBuildError::InvalidInputField {
                field_name: field_name.clone(),
                type_name: self.name.clone(),
            })?;
            setters.insert(field_name.clone(), setter);
            field_types.insert(field_name, field_type);
        }

        let parser: InputParser<T> = Arc::new(move |value: &Value| {
            let entries = match value {
                Value::Object(entries) => entries,
                Value::Null => return Err(ArgumentError::required()),
                _ => return Err(ArgumentError::new("not an object")),
            };
            if let Some(unknown) = entries.keys().find(|key| !setters.contains_key(*key)) {
                return Err(ArgumentError::new(format!("unknown arg {unknown}")));
            }
            let mut target = T::default();
            for (field_name, setter) in &setters {
                let field_value = entries.get(field_name).unwrap_or(&NULL_VALUE);
                setter(&mut target, field_value).map_err(|err| err.nest(field_name))?;
            }
            Ok(target)
        });
        let _ = cell.set(parser.clone());

        registry.fill_input_object(type_ref, InputObjectType {
            fields: field_types,
            name: self.name,
        });
        Ok((parser, Some(registry.non_null(type_ref))))
    }
}
