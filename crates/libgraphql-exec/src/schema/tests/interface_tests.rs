use crate::schema::QueryRoot;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::tests::fixtures;
use crate::tests::fixtures::Cat;
use crate::tests::fixtures::Dog;
use crate::types::GraphQLType;

struct Robot {
    serial: i64,
}
crate::graphql_object!(Robot);

enum Machine {
    Dog(Dog),
    Robot(Robot),
}
crate::graphql_one_of!(Machine { Dog, Robot });

#[test]
fn interface_fields_are_those_every_member_shares() {
    let schema = fixtures::schema();
    let named = schema.type_by_name("Named").expect("Named is registered");
    let GraphQLType::Interface(interface) = schema.get(named) else {
        panic!("Named should be an interface");
    };
    assert_eq!(interface.fields().keys().collect::<Vec<_>>(), vec!["name"]);
    assert_eq!(interface.member_type_names(), vec!["Dog", "Cat"]);
}

#[test]
fn fields_of_differing_shape_are_not_shared() -> Result<(), SchemaBuildError> {
    let mut builder = Schema::builder();
    builder.object::<Dog>("Dog")
        .field_func("name", |dog: &Dog| dog.name.clone())
        .field_func("barks", |dog: &Dog| dog.barks);
    builder.object::<Robot>("Robot")
        .field_func("name", |robot: &Robot| robot.serial)
        .field_func("barks", |_robot: &Robot| false);
    builder.interface::<Machine>("Machine").member::<Dog>().member::<Robot>();
    builder.query().field_func("machine", |_root: &QueryRoot| {
        Machine::Robot(Robot { serial: 7 })
    });
    let schema = builder.build()?;

    let machine = schema.type_by_name("Machine").expect("Machine is registered");
    let fields = schema.get(machine).fields().expect("interfaces have fields");
    assert_eq!(fields.keys().collect::<Vec<_>>(), vec!["barks"]);
    Ok(())
}

#[test]
fn union_lists_its_members() {
    let schema = fixtures::schema();
    let pet = schema.type_by_name("Pet").expect("Pet is registered");
    let GraphQLType::Union(union_) = schema.get(pet) else {
        panic!("Pet should be a union");
    };
    assert_eq!(union_.member_type_names(), vec!["Dog", "Cat"]);
    assert!(schema.get(pet).fields().is_none());
}

#[test]
fn abstract_type_kind_cannot_change() {
    let mut builder = Schema::builder();
    builder.object::<Dog>("Dog");
    builder.object::<Cat>("Cat");
    builder.union::<Machine>("Machine").member::<Dog>();
    builder.interface::<Machine>("Machine").member::<Cat>();
    assert_eq!(builder.build().unwrap_err(), SchemaBuildError::ConflictingRegistration {
        first_name: "Machine".to_string(),
        rust_type: std::any::type_name::<Machine>(),
        second_name: "Machine".to_string(),
    });
}

#[test]
fn unregistered_abstract_type_is_reported() {
    let mut builder = Schema::builder();
    builder.object::<Dog>("Dog");
    builder.query().field_func("machine", |_root: &QueryRoot| Machine::Dog(fixtures::rex()));
    assert_eq!(builder.build().unwrap_err(), SchemaBuildError::UnregisteredAbstractType {
        rust_type: std::any::type_name::<Machine>(),
    });
}
