use crate::decoding::DecodingError;
use crate::Value;

/// Leaf decoding capability: turns the [`Value`] located at a scalar field into
/// a concrete Rust type.
///
/// Implement this for custom scalars (dates, ids, money, ...) to select them
/// with [`Scalar`](crate::builder::Scalar).
pub trait ScalarDecoder: Sized {
    fn decode(value: &Value) -> Result<Self, DecodingError>;
}

fn cannot_build(type_name: &str, value: &Value) -> DecodingError {
    DecodingError::new(format!(
        "Can't build {type_name} from input {}",
        value.describe(),
    ))
}

impl ScalarDecoder for String {
    fn decode(value: &Value) -> Result<Self, DecodingError> {
        match value {
            Value::String(s) => Ok(s.to_owned()),
            other => Err(cannot_build("a String", other)),
        }
    }
}

impl ScalarDecoder for bool {
    fn decode(value: &Value) -> Result<Self, DecodingError> {
        match value {
            Value::Bool(b) => Ok(*b),
            other => Err(cannot_build("a Boolean", other)),
        }
    }
}

macro_rules! integer_decoder {
    ($ty:ty, $label:literal) => {
        impl ScalarDecoder for $ty {
            fn decode(value: &Value) -> Result<Self, DecodingError> {
                match value {
                    Value::Int(i) =>
                        <$ty>::try_from(*i).map_err(|e| DecodingError::with_source(
                            format!("Can't build {} from input {i}", $label),
                            e,
                        )),
                    Value::UInt(u) =>
                        <$ty>::try_from(*u).map_err(|e| DecodingError::with_source(
                            format!("Can't build {} from input {u}", $label),
                            e,
                        )),
                    Value::String(s) =>
                        s.parse::<$ty>().map_err(|e| DecodingError::with_source(
                            format!("Can't build {} from input \"{s}\"", $label),
                            e,
                        )),
                    other => Err(cannot_build($label, other)),
                }
            }
        }
    };
}

integer_decoder!(i32, "an Int");
integer_decoder!(i64, "a Long");
integer_decoder!(u32, "an unsigned Int");
integer_decoder!(u64, "an unsigned Long");

impl ScalarDecoder for f64 {
    fn decode(value: &Value) -> Result<Self, DecodingError> {
        match value {
            Value::Float(f) => Ok(*f),
            Value::Int(i) => Ok(*i as f64),
            Value::UInt(u) => Ok(*u as f64),
            Value::String(s) =>
                s.parse::<f64>().map_err(|e| DecodingError::with_source(
                    format!("Can't build a Float from input \"{s}\""),
                    e,
                )),
            other => Err(cannot_build("a Float", other)),
        }
    }
}

impl ScalarDecoder for f32 {
    fn decode(value: &Value) -> Result<Self, DecodingError> {
        f64::decode(value).map(|f| f as f32)
    }
}

impl ScalarDecoder for Value {
    fn decode(value: &Value) -> Result<Self, DecodingError> {
        Ok(value.to_owned())
    }
}

impl ScalarDecoder for serde_json::Value {
    fn decode(value: &Value) -> Result<Self, DecodingError> {
        Ok(serde_json::Value::from(value.to_owned()))
    }
}

/// Decodes anything to `()`. Useful for fields selected only for their side
/// effects (e.g. mutation payloads nobody reads).
impl ScalarDecoder for () {
    fn decode(_value: &Value) -> Result<Self, DecodingError> {
        Ok(())
    }
}
