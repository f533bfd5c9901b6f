use crate::operation::Directive;
use crate::operation::FragmentDefinition;
use crate::operation::FragmentSpread;
use crate::operation::OperationKind;
use crate::operation::ParseError;
use crate::operation::Query;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::operation::alias_conflicts::check_alias_conflicts;
use crate::operation::fragment_graph::FragmentDefs;
use crate::operation::fragment_graph::FragmentGraph;
use crate::value::Value;
use crate::value::Variables;
use graphql_parser::query as ast;
use indexmap::IndexMap;
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

type Result<T> = std::result::Result<T, ParseError>;

/// Parses a query document holding exactly one operation.
///
/// Variable references are substituted with the values in `variables` (or
/// the defaults the document declares for them); a reference to a variable
/// that has neither becomes `null`. Every fragment spread is resolved to its
/// definition, and the fragment graph and output aliases are checked before
/// the [`Query`] is returned.
pub fn parse(source: &str, variables: &Variables) -> Result<Query> {
    let document = ast::parse_query::<String>(source)
        .map_err(|err| ParseError::Syntax(err.to_string()))?;

    let mut operation = None;
    let mut fragment_defs: FragmentDefs = IndexMap::new();
    for definition in &document.definitions {
        match definition {
            ast::Definition::Fragment(fragment) => {
                if fragment_defs.contains_key(&fragment.name) {
                    return Err(ParseError::DuplicateFragment {
                        fragment_name: fragment.name.clone(),
                    });
                }
                fragment_defs.insert(fragment.name.clone(), fragment);
            },

            ast::Definition::Operation(op) => {
                if operation.is_some() {
                    return Err(ParseError::MultipleOperations);
                }
                operation = Some(op);
            },
        }
    }
    let operation = operation.ok_or(ParseError::NoOperation)?;

    let (kind, name, variable_definitions, selection_set) = match operation {
        ast::OperationDefinition::SelectionSet(selection_set) =>
            (OperationKind::Query, None, &[][..], selection_set),
        ast::OperationDefinition::Query(query) => (
            OperationKind::Query,
            query.name.clone(),
            query.variable_definitions.as_slice(),
            &query.selection_set,
        ),
        ast::OperationDefinition::Mutation(mutation) => (
            OperationKind::Mutation,
            mutation.name.clone(),
            mutation.variable_definitions.as_slice(),
            &mutation.selection_set,
        ),
        ast::OperationDefinition::Subscription(subscription) => (
            OperationKind::Subscription,
            subscription.name.clone(),
            subscription.variable_definitions.as_slice(),
            &subscription.selection_set,
        ),
    };

    let variables = apply_variable_defaults(variable_definitions, variables)?;
    FragmentGraph::new(&fragment_defs).check(selection_set)?;

    let mut translator = Translator {
        fragment_defs: &fragment_defs,
        fragments: HashMap::new(),
        variables: &variables,
    };
    let selection_set = translator.selection_set(selection_set)?;
    check_alias_conflicts(&selection_set)?;

    tracing::trace!(
        kind = kind.as_str(),
        name = name.as_deref().unwrap_or(""),
        fragments = fragment_defs.len(),
        "parsed query",
    );
    Ok(Query {
        kind,
        name,
        selection_set: Arc::new(selection_set),
    })
}

/// Fills in declared defaults for variables that were not supplied (or were
/// supplied as `null`), leaving the caller's mapping untouched.
fn apply_variable_defaults<'v>(
    definitions: &[ast::VariableDefinition<'_, String>],
    variables: &'v Variables,
) -> Result<Cow<'v, Variables>> {
    let mut effective = Cow::Borrowed(variables);
    for definition in definitions {
        let Some(default_value) = &definition.default_value else {
            continue;
        };
        if let ast::Type::NonNullType(_) = definition.var_type {
            return Err(ParseError::RequiredVariableWithDefault {
                variable_name: definition.name.clone(),
            });
        }
        if variables.get(&definition.name).is_none_or(Value::is_null) {
            let default_value = literal(default_value, &Variables::new())?;
            effective.to_mut().insert(definition.name.clone(), default_value);
        }
    }
    Ok(effective)
}

/// Converts a literal from the syntax tree, substituting variables.
fn literal(value: &ast::Value<'_, String>, variables: &Variables) -> Result<Value> {
    Ok(match value {
        ast::Value::Variable(name) => variables.get(name).cloned().unwrap_or_default(),
        ast::Value::Int(number) => Value::Int(number.as_i64().ok_or(ParseError::InvalidInt)?),
        ast::Value::Float(f) => Value::Float(*f),
        ast::Value::String(s) => Value::String(s.clone()),
        ast::Value::Boolean(b) => Value::Bool(*b),
        ast::Value::Null => Value::Null,
        ast::Value::Enum(name) => Value::Enum(name.clone()),
        ast::Value::List(items) => Value::List(
            items.iter()
                .map(|item| literal(item, variables))
                .collect::<Result<_>>()?,
        ),
        ast::Value::Object(entries) => {
            let mut object = IndexMap::with_capacity(entries.len());
            for (key, entry) in entries {
                object.insert(key.clone(), literal(entry, variables)?);
            }
            Value::Object(object)
        },
    })
}

/// Translates syntax-tree selection sets into the document model.
///
/// Each named fragment is translated once, the first time it is spread, and
/// every later spread shares the same [`FragmentDefinition`]. The fragment
/// graph has already been checked for cycles and unknown names.
struct Translator<'t, 'd, 'a> {
    fragment_defs: &'t FragmentDefs<'d, 'a>,
    fragments: HashMap<String, Arc<FragmentDefinition>>,
    variables: &'t Variables,
}
impl<'t, 'd, 'a> Translator<'t, 'd, 'a> {
    fn selection_set(&mut self, selection_set: &ast::SelectionSet<'a, String>) -> Result<SelectionSet> {
        let mut fragments = vec![];
        let mut selections = vec![];
        for item in &selection_set.items {
            match item {
                ast::Selection::Field(field) => {
                    let nested = if field.selection_set.items.is_empty() {
                        None
                    } else {
                        Some(Arc::new(self.selection_set(&field.selection_set)?))
                    };
                    selections.push(Arc::new(Selection::new(
                        field.name.clone(),
                        field.alias.clone(),
                        self.arguments(&field.arguments)?,
                        self.directives(&field.directives)?,
                        nested,
                    )));
                },

                ast::Selection::FragmentSpread(spread) => {
                    let fragment = self.fragment(&spread.fragment_name)?;
                    fragments.push(FragmentSpread {
                        directives: self.directives(&spread.directives)?,
                        fragment,
                    });
                },

                ast::Selection::InlineFragment(inline) => {
                    let type_condition = inline.type_condition.as_ref().map(|condition| {
                        let ast::TypeCondition::On(type_name) = condition;
                        type_name.clone()
                    });
                    let nested = self.selection_set(&inline.selection_set)?;
                    fragments.push(FragmentSpread {
                        directives: self.directives(&inline.directives)?,
                        fragment: Arc::new(FragmentDefinition {
                            name: None,
                            selection_set: Arc::new(nested),
                            type_condition,
                        }),
                    });
                },
            }
        }
        Ok(SelectionSet {
            fragments,
            selections,
        })
    }

    fn fragment(&mut self, fragment_name: &str) -> Result<Arc<FragmentDefinition>> {
        if let Some(fragment) = self.fragments.get(fragment_name) {
            return Ok(fragment.clone());
        }
        let definition = self.fragment_defs.get(fragment_name)
            .copied()
            .ok_or_else(|| ParseError::UnknownFragment {
                fragment_name: fragment_name.to_string(),
            })?;

        let ast::TypeCondition::On(type_condition) = &definition.type_condition;
        let selection_set = self.selection_set(&definition.selection_set)?;
        let fragment = Arc::new(FragmentDefinition {
            name: Some(fragment_name.to_string()),
            selection_set: Arc::new(selection_set),
            type_condition: Some(type_condition.clone()),
        });
        self.fragments.insert(fragment_name.to_string(), fragment.clone());
        Ok(fragment)
    }

    fn arguments(&self, arguments: &[(String, ast::Value<'a, String>)]) -> Result<Value> {
        Ok(Value::Object(self.argument_map(arguments)?))
    }

    fn argument_map(
        &self,
        arguments: &[(String, ast::Value<'a, String>)],
    ) -> Result<IndexMap<String, Value>> {
        let mut args = IndexMap::with_capacity(arguments.len());
        for (arg_name, arg_value) in arguments {
            if args.contains_key(arg_name) {
                return Err(ParseError::DuplicateArgument {
                    argument_name: arg_name.clone(),
                });
            }
            args.insert(arg_name.clone(), literal(arg_value, self.variables)?);
        }
        Ok(args)
    }

    fn directives(&self, directives: &[ast::Directive<'a, String>]) -> Result<Vec<Directive>> {
        directives.iter()
            .map(|directive| Ok(Directive {
                args: self.argument_map(&directive.arguments)?,
                name: directive.name.clone(),
            }))
            .collect()
    }
}
