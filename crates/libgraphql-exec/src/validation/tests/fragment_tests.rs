use crate::tests::fixtures;
use crate::validation::ValidationError;
use crate::validation::ValidationErrorKind;
use super::check;

fn inapplicable(type_condition: &str, type_name: &str) -> ValidationErrorKind {
    ValidationErrorKind::InapplicableFragment {
        type_condition: type_condition.to_string(),
        type_name: type_name.to_string(),
    }
}

#[test]
fn fragment_on_other_object_is_rejected() {
    let schema = fixtures::schema();
    let err = check(&schema, "{ user { ... on Dog { name } } }").unwrap_err();
    assert_eq!(err.kind(), &inapplicable("Dog", "User"));
    assert_eq!(err.to_string(), "fragment on \"Dog\" cannot apply to \"User\"");
}

#[test]
fn fragment_on_unknown_type_is_rejected() {
    let schema = fixtures::schema();
    let err = check(&schema, "{ ... on Nothing { nums } }").unwrap_err();
    assert_eq!(err.kind(), &inapplicable("Nothing", "Query"));
}

#[test]
fn union_fragments_are_checked_against_their_member() {
    let schema = fixtures::schema();
    assert!(check(
        &schema,
        "{ pet(kind: \"dog\") { ... on Dog { barks } ... on Cat { lives } } }",
    ).is_ok());

    let err = check(&schema, "{ pet(kind: \"dog\") { ... on Cat { barks } } }").unwrap_err();
    assert_eq!(err.kind(), &ValidationErrorKind::UnknownField {
        field_name: "barks".to_string(),
        type_name: "Cat".to_string(),
    });

    let err = check(&schema, "{ pet(kind: \"dog\") { ... on User { id } } }").unwrap_err();
    assert_eq!(err.kind(), &inapplicable("User", "Pet"));
}

#[test]
fn untyped_fragment_on_union_allows_only_typename() -> Result<(), ValidationError> {
    let schema = fixtures::schema();
    check(&schema, "{ pet(kind: \"dog\") { ... { __typename } ... on Pet { __typename } } }")
}

#[test]
fn fragment_on_interface_inside_member_uses_interface_fields() {
    let schema = fixtures::schema();
    assert!(check(&schema, "{ maybeDogs { ... on Named { name } } }").is_ok());

    let err = check(&schema, "{ maybeDogs { ... on Named { barks } } }").unwrap_err();
    assert_eq!(err.kind(), &ValidationErrorKind::UnknownField {
        field_name: "barks".to_string(),
        type_name: "Named".to_string(),
    });
}

#[test]
fn fragment_on_union_inside_non_member_is_rejected() {
    let schema = fixtures::schema();
    let err = check(&schema, "{ user { ... on Pet { __typename } } }").unwrap_err();
    assert_eq!(err.kind(), &inapplicable("Pet", "User"));
}

#[test]
fn named_fragment_fields_are_validated() {
    let schema = fixtures::schema();
    let err = check(
        &schema,
        "{ user { ...UserFields } } fragment UserFields on User { id email }",
    ).unwrap_err();
    assert_eq!(err.kind(), &ValidationErrorKind::UnknownField {
        field_name: "email".to_string(),
        type_name: "User".to_string(),
    });
}
