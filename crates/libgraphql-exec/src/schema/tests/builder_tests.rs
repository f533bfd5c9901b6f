use crate::schema::QueryRoot;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::tests::fixtures;
use crate::tests::fixtures::Cat;
use crate::tests::fixtures::Dog;
use crate::tests::fixtures::User;
use crate::types::GraphQLType;

#[derive(Clone)]
struct Node {
    children: Vec<Node>,
    label: String,
}
crate::graphql_object!(Node);

struct Orphan;
crate::graphql_object!(Orphan);

#[test]
fn roots_are_always_present() -> Result<(), SchemaBuildError> {
    let schema = Schema::builder().build()?;
    for (type_ref, name) in [
        (schema.query_type(), "Query"),
        (schema.mutation_type(), "Mutation"),
        (schema.subscription_type(), "Subscription"),
    ] {
        assert_eq!(schema.get(type_ref).name(), Some(name));
        assert_eq!(schema.type_by_name(name), Some(type_ref));
    }
    Ok(())
}

#[test]
fn builtin_scalars_are_named() -> Result<(), SchemaBuildError> {
    let schema = Schema::builder().build()?;
    for name in ["Boolean", "Float", "ID", "Int", "String"] {
        let type_ref = schema.type_by_name(name).expect("builtin scalar is registered");
        match schema.get(type_ref) {
            GraphQLType::Scalar(scalar) => assert!(scalar.is_builtin()),
            other => panic!("expected a scalar, found {other:?}"),
        }
    }
    Ok(())
}

#[test]
fn duplicate_field_is_reported() {
    let mut builder = Schema::builder();
    builder.object::<Dog>("Dog")
        .field_func("name", |dog: &Dog| dog.name.clone())
        .field_func("name", |dog: &Dog| dog.barks);
    assert_eq!(builder.build().unwrap_err(), SchemaBuildError::DuplicateField {
        field_name: "name".to_string(),
        type_name: "Dog".to_string(),
    });
}

#[test]
fn one_rust_type_under_two_names_is_reported() {
    let mut builder = Schema::builder();
    builder.object::<Dog>("Dog");
    builder.object::<Dog>("Hound");
    assert_eq!(builder.build().unwrap_err(), SchemaBuildError::ConflictingRegistration {
        first_name: "Dog".to_string(),
        rust_type: std::any::type_name::<Dog>(),
        second_name: "Hound".to_string(),
    });
}

#[test]
fn registering_again_under_the_same_name_adds_fields() -> Result<(), SchemaBuildError> {
    let mut builder = Schema::builder();
    builder.object::<Dog>("Dog").field_func("name", |dog: &Dog| dog.name.clone());
    builder.object::<Dog>("Dog").field_func("barks", |dog: &Dog| dog.barks);
    let schema = builder.build()?;

    let dog = schema.type_by_name("Dog").expect("Dog is registered");
    let fields = schema.get(dog).fields().expect("objects have fields");
    assert_eq!(fields.keys().collect::<Vec<_>>(), vec!["name", "barks"]);
    Ok(())
}

#[test]
fn two_rust_types_under_one_name_is_reported() {
    let mut builder = Schema::builder();
    builder.object::<Dog>("Pet");
    builder.object::<Cat>("Pet");
    assert_eq!(builder.build().unwrap_err(), SchemaBuildError::DuplicateTypeName {
        type_name: "Pet".to_string(),
    });
}

#[test]
fn builtin_scalar_names_are_reserved() {
    let mut builder = Schema::builder();
    builder.object::<Dog>("String");
    assert_eq!(builder.build().unwrap_err(), SchemaBuildError::DuplicateTypeName {
        type_name: "String".to_string(),
    });
}

#[test]
fn unknown_key_field_is_reported() {
    let mut builder = Schema::builder();
    builder.object::<User>("User")
        .key("email")
        .field_func("id", |user: &User| user.id.clone());
    assert_eq!(builder.build().unwrap_err(), SchemaBuildError::UnknownKeyField {
        field_name: "email".to_string(),
        type_name: "User".to_string(),
    });
}

#[test]
fn unregistered_output_object_is_reported() {
    let mut builder = Schema::builder();
    builder.query().field_func("orphan", |_root: &QueryRoot| Orphan);
    assert_eq!(builder.build().unwrap_err(), SchemaBuildError::UnregisteredObject {
        rust_type: std::any::type_name::<Orphan>(),
    });
}

#[test]
fn self_referential_object_points_back_to_itself() -> Result<(), SchemaBuildError> {
    let mut builder = Schema::builder();
    builder.object::<Node>("Node")
        .field_func("label", |node: &Node| node.label.clone())
        .field_func("children", |node: &Node| node.children.clone());
    let schema = builder.build()?;

    let node_ref = schema.type_by_name("Node").expect("Node is registered");
    let GraphQLType::Object(node) = schema.get(node_ref) else {
        panic!("Node should be an object");
    };
    let children = node.field("children").expect("children is declared");

    // NonNull(List(NonNull(Node)))
    let list_ref = schema.get(children.type_ref()).inner().expect("non-null wrapper");
    let item_ref = schema.get(list_ref).inner().expect("list wrapper");
    let node_again = schema.get(item_ref).inner().expect("non-null wrapper");
    assert_eq!(node_again, node_ref);
    Ok(())
}

#[test]
fn unreachable_types_are_still_built() -> Result<(), SchemaBuildError> {
    let mut builder = Schema::builder();
    builder.object::<Dog>("Dog").field_func("name", |dog: &Dog| dog.name.clone());
    let schema = builder.build()?;
    assert!(schema.type_by_name("Dog").is_some());
    Ok(())
}

#[test]
fn fragment_applicability_follows_membership() {
    let schema = fixtures::schema();
    assert!(schema.fragment_applies(None, "Dog"));
    assert!(schema.fragment_applies(Some("Dog"), "Dog"));
    assert!(schema.fragment_applies(Some("Pet"), "Dog"));
    assert!(schema.fragment_applies(Some("Named"), "Cat"));
    assert!(!schema.fragment_applies(Some("Cat"), "Dog"));
    assert!(!schema.fragment_applies(Some("Pet"), "User"));
    assert!(!schema.fragment_applies(Some("Nothing"), "Dog"));
}

#[test]
fn object_metadata_is_kept() -> Result<(), SchemaBuildError> {
    let mut builder = Schema::builder();
    builder.object::<User>("User")
        .description("A person with an account")
        .key("id")
        .field_func("id", |user: &User| user.id.clone());
    let schema = builder.build()?;

    let user_ref = schema.type_by_name("User").expect("User is registered");
    let GraphQLType::Object(user) = schema.get(user_ref) else {
        panic!("User should be an object");
    };
    assert_eq!(user.description(), Some("A person with an account"));
    assert_eq!(user.key_field().map(|field| field.name()), Some("id"));
    assert_eq!(user.native_type(), std::any::TypeId::of::<User>());
    Ok(())
}
