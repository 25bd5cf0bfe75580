use crate::decoding::DecodingError;
use crate::decoding::ScalarDecoder;
use crate::tests::fixtures::object;
use crate::tests::fixtures::string;
use crate::Value;

#[test]
fn strings() {
    assert_eq!(String::decode(&string("hi")), Ok("hi".to_string()));
    assert_eq!(
        String::decode(&Value::Int(1)).unwrap_err().message(),
        "Can't build a String from input 1",
    );
}

#[test]
fn booleans() {
    assert_eq!(bool::decode(&Value::Bool(false)), Ok(false));
    assert_eq!(
        bool::decode(&string("true")).unwrap_err().message(),
        "Can't build a Boolean from input \"true\"",
    );
}

#[test]
fn integers_accept_numeric_strings() {
    assert_eq!(i32::decode(&Value::Int(-4)), Ok(-4));
    assert_eq!(i64::decode(&string("9000000000")), Ok(9_000_000_000));
    assert_eq!(u64::decode(&Value::Int(12)), Ok(12));
}

#[test]
fn integers_out_of_range() {
    let err = i32::decode(&Value::Int(i64::from(i32::MAX) + 1)).unwrap_err();
    assert_eq!(err.message(), "Can't build an Int from input 2147483648");
    assert!(std::error::Error::source(&err).is_some());

    assert_eq!(
        u32::decode(&Value::Int(-1)).unwrap_err().message(),
        "Can't build an unsigned Int from input -1",
    );
}

#[test]
fn u64_beyond_i64_range() {
    assert_eq!(u64::decode(&Value::UInt(u64::MAX)), Ok(u64::MAX));
    assert_eq!(f64::decode(&Value::UInt(u64::MAX)), Ok(u64::MAX as f64));
    assert_eq!(
        i64::decode(&Value::UInt(u64::MAX)).unwrap_err().message(),
        "Can't build a Long from input 18446744073709551615",
    );
}

#[test]
fn integers_reject_floats() {
    assert_eq!(
        i32::decode(&Value::Float(1.5)).unwrap_err().message(),
        "Can't build an Int from input 1.5",
    );
}

#[test]
fn floats_accept_ints_and_strings() {
    assert_eq!(f64::decode(&Value::Float(2.5)), Ok(2.5));
    assert_eq!(f64::decode(&Value::Int(3)), Ok(3.0));
    assert_eq!(f64::decode(&string("0.25")), Ok(0.25));
    assert_eq!(f32::decode(&Value::Float(0.5)), Ok(0.5));
    assert_eq!(
        f64::decode(&Value::Null).unwrap_err().message(),
        "Can't build a Float from input null",
    );
}

#[test]
fn passthrough_decoders() {
    let value = object(vec![("a", Value::List(vec![Value::Int(1)]))]);

    assert_eq!(Value::decode(&value), Ok(value.clone()));
    assert_eq!(
        serde_json::Value::decode(&value),
        Ok(serde_json::json!({ "a": [1] })),
    );
    assert_eq!(<()>::decode(&Value::Null), Ok(()));
}

#[test]
fn error_equality_ignores_source() {
    let with_source = DecodingError::with_source(
        "bad",
        std::io::Error::other("io"),
    );

    assert_eq!(with_source, DecodingError::new("bad"));
    assert_eq!(with_source.to_string(), "Cannot decode response: bad");
}
