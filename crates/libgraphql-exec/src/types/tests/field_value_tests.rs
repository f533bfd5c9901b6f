use crate::schema::OutputType;
use crate::tests::fixtures;
use crate::tests::fixtures::Dog;
use crate::tests::fixtures::Level;
use crate::tests::fixtures::Pet;
use crate::types::EnumRepr;
use crate::types::FieldValue;
use crate::types::Member;
use crate::value::Value;
use std::any::TypeId;
use std::sync::Arc;

#[test]
fn plain_values_become_scalars() {
    assert!(matches!(5_i32.into_field_value(), FieldValue::Scalar(Value::Int(5))));
    assert!(matches!(
        "hi".to_string().into_field_value(),
        FieldValue::Scalar(Value::String(s)) if s == "hi",
    ));
    assert!(None::<i64>.into_field_value().is_null());
}

#[test]
fn lists_keep_element_order() {
    let FieldValue::List(items) = vec![Some(1_i64), None].into_field_value() else {
        panic!("expected a list");
    };
    assert_eq!(items.len(), 2);
    assert!(matches!(items[0], FieldValue::Scalar(Value::Int(1))));
    assert!(items[1].is_null());
}

#[test]
fn enums_carry_their_repr() {
    assert!(matches!(
        Level::High.into_field_value(),
        FieldValue::Enum(EnumRepr::Int(1)),
    ));
}

#[test]
fn one_of_values_hold_one_member() {
    let FieldValue::Members(members) = Pet::Dog(fixtures::rex()).into_field_value() else {
        panic!("expected members");
    };
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].type_id(), TypeId::of::<Dog>());
}

#[test]
fn shared_objects_keep_their_type() {
    let dog = Arc::new(fixtures::rex());
    let member = Member::from_arc(dog.clone());
    assert_eq!(member.type_id(), TypeId::of::<Dog>());

    let FieldValue::Object(object) = dog.into_field_value() else {
        panic!("expected an object");
    };
    assert_eq!(object.downcast_ref::<Dog>().map(|dog| dog.name.as_str()), Some("Rex"));
}
