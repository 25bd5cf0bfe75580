use crate::Value;

/// Encodes a Rust value into the [`Value`] literal used as a field or
/// directive argument.
///
/// Implement this for custom input types (input objects, custom scalars,
/// enums) so they can be passed to [`Argument::new`](crate::selection::Argument::new).
pub trait ArgEncoder {
    fn encode(&self) -> Value;
}

impl ArgEncoder for Value {
    fn encode(&self) -> Value {
        self.to_owned()
    }
}

impl ArgEncoder for serde_json::Value {
    fn encode(&self) -> Value {
        Value::from(self.to_owned())
    }
}

impl ArgEncoder for String {
    fn encode(&self) -> Value {
        Value::String(self.to_owned())
    }
}

impl ArgEncoder for &str {
    fn encode(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl ArgEncoder for bool {
    fn encode(&self) -> Value {
        Value::Bool(*self)
    }
}

macro_rules! int_encoder {
    ($($ty:ty),+) => {
        $(
            impl ArgEncoder for $ty {
                fn encode(&self) -> Value {
                    Value::Int(i64::from(*self))
                }
            }
        )+
    };
}

int_encoder!(i8, i16, i32, i64, u8, u16, u32);

impl ArgEncoder for u64 {
    fn encode(&self) -> Value {
        Value::from(*self)
    }
}

impl ArgEncoder for f32 {
    fn encode(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl ArgEncoder for f64 {
    fn encode(&self) -> Value {
        Value::Float(*self)
    }
}

impl<T: ArgEncoder> ArgEncoder for Option<T> {
    fn encode(&self) -> Value {
        match self {
            Some(value) => value.encode(),
            None => Value::Null,
        }
    }
}

impl<T: ArgEncoder> ArgEncoder for Vec<T> {
    fn encode(&self) -> Value {
        Value::List(self.iter().map(ArgEncoder::encode).collect())
    }
}
