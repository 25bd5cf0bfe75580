use crate::tests::fixtures::json_value_strategy;
use crate::tests::fixtures::object;
use crate::tests::fixtures::string;
use crate::Value;
use proptest::prelude::*;

#[test]
fn graphql_literal_of_scalars() {
    assert_eq!(Value::Null.to_graphql_literal(), "null");
    assert_eq!(Value::Bool(true).to_graphql_literal(), "true");
    assert_eq!(Value::Int(-42).to_graphql_literal(), "-42");
    assert_eq!(Value::Float(1.5).to_graphql_literal(), "1.5");
    assert_eq!(Value::Float(2.0).to_graphql_literal(), "2.0");
    assert_eq!(Value::Enum("ADMIN".to_string()).to_graphql_literal(), "ADMIN");
}

#[test]
fn graphql_literal_escapes_strings() {
    assert_eq!(
        string("say \"hi\"\n").to_graphql_literal(),
        r#""say \"hi\"\n""#,
    );
}

#[test]
fn graphql_literal_of_nested_input_object() {
    let value = object(vec![
        ("name", string("x")),
        ("role", Value::Enum("ADMIN".to_string())),
        ("tags", Value::List(vec![Value::Int(1), Value::Null])),
        ("address", object(vec![("city", string("Paris"))])),
    ]);

    assert_eq!(
        value.to_graphql_literal(),
        r#"{name:"x",role:ADMIN,tags:[1,null],address:{city:"Paris"}}"#,
    );
}

#[test]
fn without_null_fields_recurses_into_objects_and_lists() {
    let value = object(vec![
        ("name", string("x")),
        ("age", Value::Null),
        ("friends", Value::List(vec![
            object(vec![("nick", Value::Null), ("id", Value::Int(1))]),
            Value::Null,
        ])),
    ]);

    assert_eq!(
        value.without_null_fields(),
        object(vec![
            ("name", string("x")),
            ("friends", Value::List(vec![
                object(vec![("id", Value::Int(1))]),
                Value::Null,
            ])),
        ]),
    );
}

#[test]
fn without_null_fields_keeps_top_level_null() {
    assert_eq!(Value::Null.without_null_fields(), Value::Null);
}

#[test]
fn as_str_only_for_strings() {
    assert_eq!(string("x").as_str(), Some("x"));
    assert_eq!(Value::Enum("X".to_string()).as_str(), None);
}

#[test]
fn get_returns_first_entry_with_name() {
    let value = Value::Object(vec![
        ("a".to_string(), Value::Int(1)),
        ("a".to_string(), Value::Int(2)),
    ]);

    assert_eq!(value.get("a"), Some(&Value::Int(1)));
    assert_eq!(value.get("b"), None);
    assert_eq!(Value::Int(1).get("a"), None);
}

#[test]
fn from_json_numbers() {
    assert_eq!(Value::from(serde_json::json!(7)), Value::Int(7));
    assert_eq!(Value::from(serde_json::json!(7.25)), Value::Float(7.25));
    assert_eq!(Value::from(serde_json::json!(u64::MAX)), Value::UInt(u64::MAX));
}

#[test]
fn integers_above_i64_survive_json_round_trip() {
    let value: Value = serde_json::from_str("18446744073709551615").unwrap();

    assert_eq!(value, Value::UInt(u64::MAX));
    assert_eq!(serde_json::to_string(&value).unwrap(), "18446744073709551615");
    assert_eq!(value.to_graphql_literal(), "18446744073709551615");
}

#[test]
fn u64_conversion_prefers_int() {
    assert_eq!(Value::from(7u64), Value::Int(7));
    assert_eq!(Value::from(i64::MAX as u64 + 1), Value::UInt(9_223_372_036_854_775_808));
}

#[test]
fn enum_encodes_as_json_string() {
    assert_eq!(
        serde_json::Value::from(Value::Enum("ADMIN".to_string())),
        serde_json::json!("ADMIN"),
    );
}

#[test]
fn non_finite_float_encodes_as_json_null() {
    assert_eq!(
        serde_json::Value::from(Value::Float(f64::INFINITY)),
        serde_json::Value::Null,
    );
}

#[test]
fn json_object_order_is_preserved() {
    let value: Value = serde_json::from_str(r#"{"b": 1, "a": 2}"#).unwrap();
    assert_eq!(
        value,
        object(vec![("b", Value::Int(1)), ("a", Value::Int(2))]),
    );
}

proptest! {
    #[test]
    fn json_round_trip(value in json_value_strategy()) {
        let json = serde_json::to_string(&value).unwrap();
        let decoded: Value = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(decoded, value);
    }
}
