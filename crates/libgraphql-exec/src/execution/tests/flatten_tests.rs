use crate::context::Context;
use crate::error::ExecutionError;
use crate::execution::Executor;
use crate::execution::flatten::flatten;
use crate::operation::ParseError;
use crate::operation::parse;
use crate::schema::InputObject;
use crate::schema::InputParser;
use crate::schema::InputType;
use crate::schema::QueryRoot;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::schema::TypeRegistry;
use crate::tests::fixtures;
use crate::types::FieldValue;
use crate::types::TypeRef;
use crate::validation::validate;
use crate::value::Value;
use crate::value::Variables;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

#[test]
fn same_alias_selections_merge_their_children() -> Result<(), ParseError> {
    let schema = fixtures::schema();
    let query = parse(
        r#"
            { user { name } ...MoreUser }
            fragment MoreUser on Query { user { id } }
        "#,
        &Variables::new(),
    )?;
    let flat = flatten(&schema, "Query", query.selection_set())
        .expect("directives are well formed");

    assert_eq!(flat.len(), 1);
    assert_eq!(flat[0].alias(), "user");
    let nested = flat[0].selection_set().expect("user has a selection set");
    let names: Vec<&str> = nested.selections().iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["name", "id"]);
    Ok(())
}

#[test]
fn merged_selections_execute_as_one_field() -> Result<(), ExecutionError> {
    let schema = fixtures::schema();
    let query = r#"
        {
            user { name }
            ...MoreUser
        }
        fragment MoreUser on Query { user { id } }
    "#;
    let result = fixtures::execute(&schema, query)?;
    assert_eq!(
        fixtures::to_json(&result),
        json!({"user": {"name": "ann", "id": "u1", "__key": "u1"}}),
    );
    Ok(())
}

#[test]
fn fragment_spread_twice_at_one_level_is_expanded_once() -> Result<(), ParseError> {
    let schema = fixtures::schema();
    let query = parse(
        r#"
            { ...Nums ...Nums }
            fragment Nums on Query { nums }
        "#,
        &Variables::new(),
    )?;
    let flat = flatten(&schema, "Query", query.selection_set())
        .expect("directives are well formed");
    assert_eq!(flat.len(), 1);
    assert_eq!(flat[0].alias(), "nums");
    Ok(())
}

#[test]
fn inapplicable_fragments_are_dropped() -> Result<(), ParseError> {
    let schema = fixtures::schema();
    let query = parse(
        r#"
            {
                pet(kind: "dog") {
                    ... on Dog { name }
                    ... on Cat { lives }
                }
            }
        "#,
        &Variables::new(),
    )?;
    let pet = &query.selection_set().selections()[0];
    let pet_selections = pet.selection_set().expect("pet has a selection set");

    let as_dog = flatten(&schema, "Dog", pet_selections).expect("directives are well formed");
    let aliases: Vec<&str> = as_dog.iter().map(|s| s.alias()).collect();
    assert_eq!(aliases, vec!["name"]);

    let as_cat = flatten(&schema, "Cat", pet_selections).expect("directives are well formed");
    let aliases: Vec<&str> = as_cat.iter().map(|s| s.alias()).collect();
    assert_eq!(aliases, vec!["lives"]);
    Ok(())
}

#[test]
fn malformed_directive_is_reported() -> Result<(), ParseError> {
    let schema = fixtures::schema();
    let query = parse("{ nums @include(if: 3) }", &Variables::new())?;
    let err = flatten(&schema, "Query", query.selection_set()).unwrap_err();
    assert_eq!(err.message(), "expected type Boolean, found 3");
    Ok(())
}

static COUNTED_PARSES: AtomicUsize = AtomicUsize::new(0);

#[derive(Default)]
struct CountedArgs {
    n: i64,
}
impl InputType for CountedArgs {
    fn input_parser(
        registry: &mut TypeRegistry,
    ) -> Result<(InputParser<Self>, Option<TypeRef>), SchemaBuildError> {
        let (parser, type_ref) = InputObject::<CountedArgs>::new("CountedArgs")
            .field("n", |args: &mut CountedArgs, n: i64| args.n = n)
            .build(registry)?;
        let counting: InputParser<Self> = Arc::new(move |value: &Value| {
            COUNTED_PARSES.fetch_add(1, Ordering::SeqCst);
            parser(value)
        });
        Ok((counting, type_ref))
    }
}

struct Holder;
crate::graphql_object!(Holder);

fn counting_schema() -> Schema {
    let mut builder = Schema::builder();
    builder.object::<Holder>("Holder")
        .field_func_with_args("counted", |_holder: &Holder, args: &CountedArgs| args.n);
    builder.query()
        .field_func("a", |_root: &QueryRoot| Holder)
        .field_func("b", |_root: &QueryRoot| Holder);
    builder.build().expect("schema should build")
}

#[test]
fn shared_fragment_arguments_are_parsed_once() -> Result<(), ExecutionError> {
    let schema = counting_schema();
    let query = parse(
        r#"
            { a { ...Counted } b { ...Counted } }
            fragment Counted on Holder { counted(n: 2) }
        "#,
        &Variables::new(),
    ).expect("query should parse");
    let root = schema.root_type(query.kind());

    validate(&schema, root, query.selection_set()).expect("query should validate");
    assert_eq!(COUNTED_PARSES.load(Ordering::SeqCst), 1);

    validate(&schema, root, query.selection_set()).expect("query should validate");
    assert_eq!(COUNTED_PARSES.load(Ordering::SeqCst), 1);

    let result = Executor::new(&schema).execute(&Context::new(), root, FieldValue::Null, &query)?;
    assert_eq!(
        fixtures::to_json(&result),
        json!({"a": {"counted": 2}, "b": {"counted": 2}}),
    );
    assert_eq!(COUNTED_PARSES.load(Ordering::SeqCst), 1);
    Ok(())
}
