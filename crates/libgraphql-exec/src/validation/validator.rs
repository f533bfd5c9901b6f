use crate::operation::Directive;
use crate::operation::FragmentSpread;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::operation::should_include;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::TypeRef;
use crate::validation::ValidationError;
use crate::validation::ValidationErrorKind;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, ValidationError>;

/// Checks that `selection_set` can be executed against the type `type_ref`,
/// decoding each selection's arguments along the way.
///
/// A selection's arguments are decoded with its field's argument parser the
/// first time the selection is visited; the result is cached on the
/// selection, so validating the same document again (or reaching a
/// selection a second time through a shared fragment) never re-runs a
/// parser.
pub fn validate(schema: &Schema, type_ref: TypeRef, selection_set: &SelectionSet) -> Result<()> {
    Validator { schema }.validate_type(type_ref, Some(selection_set))
}

struct Validator<'s> {
    schema: &'s Schema,
}
impl Validator<'_> {
    fn validate_type(&self, type_ref: TypeRef, selection_set: Option<&SelectionSet>) -> Result<()> {
        match self.schema.get(type_ref) {
            GraphQLType::Scalar(_) => match selection_set {
                Some(_) => Err(ValidationErrorKind::ScalarWithSelection.into()),
                None => Ok(()),
            },

            GraphQLType::Enum(_) => match selection_set {
                Some(_) => Err(ValidationErrorKind::EnumWithSelection.into()),
                None => Ok(()),
            },

            GraphQLType::List(inner) | GraphQLType::NonNull(inner) =>
                self.validate_type(*inner, selection_set),

            GraphQLType::Object(object) => {
                let selection_set = selection_set.ok_or(ValidationErrorKind::MissingSelection)?;
                self.validate_selections(&object.name, Some(&object.fields), selection_set)?;
                for spread in &selection_set.fragments {
                    self.validate_spread(spread, |type_condition| {
                        match type_condition {
                            None => Some(type_ref),
                            Some(name) if name == object.name => Some(type_ref),
                            // A fragment on an interface or union is checked
                            // against that type's own rules.
                            Some(name) if self.schema.fragment_applies(Some(name), &object.name) =>
                                self.schema.type_by_name(name),
                            Some(_) => None,
                        }
                    }, &object.name)?;
                }
                Ok(())
            },

            GraphQLType::Interface(interface) => {
                let selection_set = selection_set.ok_or(ValidationErrorKind::MissingSelection)?;
                self.validate_selections(&interface.name, Some(&interface.fields), selection_set)?;
                for spread in &selection_set.fragments {
                    self.validate_spread(spread, |type_condition| match type_condition {
                        None => Some(type_ref),
                        Some(name) if name == interface.name => Some(type_ref),
                        Some(name) => interface.members.get(name).copied(),
                    }, &interface.name)?;
                }
                Ok(())
            },

            GraphQLType::Union(union_) => {
                let selection_set = selection_set.ok_or(ValidationErrorKind::MissingSelection)?;
                // Only `__typename` may be selected on a union directly.
                self.validate_selections(&union_.name, None, selection_set)?;
                for spread in &selection_set.fragments {
                    self.validate_spread(spread, |type_condition| match type_condition {
                        None => Some(type_ref),
                        Some(name) if name == union_.name => Some(type_ref),
                        Some(name) => union_.members.get(name).copied(),
                    }, &union_.name)?;
                }
                Ok(())
            },

            GraphQLType::InputObject(input_object) => Err(ValidationErrorKind::UnselectableType {
                type_name: input_object.name.clone(),
            }.into()),
        }
    }

    fn validate_selections(
        &self,
        type_name: &str,
        fields: Option<&IndexMap<String, Field>>,
        selection_set: &SelectionSet,
    ) -> Result<()> {
        for selection in &selection_set.selections {
            validate_directives(&selection.directives)
                .and_then(|()| self.validate_selection(type_name, fields, selection))
                .map_err(|err| err.nest(selection.alias()))?;
        }
        Ok(())
    }

    fn validate_selection(
        &self,
        type_name: &str,
        fields: Option<&IndexMap<String, Field>>,
        selection: &Selection,
    ) -> Result<()> {
        if selection.name == "__typename" {
            if !selection.args.is_empty_args() {
                return Err(ValidationErrorKind::TypenameWithArguments.into());
            }
            if selection.selection_set.is_some() {
                return Err(ValidationErrorKind::TypenameWithSelection.into());
            }
            return Ok(());
        }

        let field = fields
            .and_then(|fields| fields.get(&selection.name))
            .ok_or_else(|| ValidationErrorKind::UnknownField {
                field_name: selection.name.clone(),
                type_name: type_name.to_string(),
            })?;

        if !selection.is_parsed() {
            let parsed = field.parse_arguments(&selection.args)
                .map_err(|err| ValidationErrorKind::InvalidArguments {
                    field_name: selection.name.clone(),
                    message: err.to_string(),
                })?;
            // Only the first decode of a selection is kept.
            let _ = selection.parsed_args.set(parsed);
        }

        self.validate_type(field.type_ref(), selection.selection_set())
    }

    fn validate_spread(
        &self,
        spread: &FragmentSpread,
        target: impl FnOnce(Option<&str>) -> Option<TypeRef>,
        type_name: &str,
    ) -> Result<()> {
        validate_directives(&spread.directives)?;
        let type_condition = spread.fragment.type_condition();
        let target = target(type_condition).ok_or_else(|| ValidationErrorKind::InapplicableFragment {
            type_condition: type_condition.unwrap_or_default().to_string(),
            type_name: type_name.to_string(),
        })?;
        self.validate_type(target, Some(&spread.fragment.selection_set))
    }
}

fn validate_directives(directives: &[Directive]) -> Result<()> {
    match should_include(directives) {
        Ok(_) => Ok(()),
        Err(err) => Err(ValidationErrorKind::InvalidDirective {
            message: err.to_string(),
        }.into()),
    }
}
