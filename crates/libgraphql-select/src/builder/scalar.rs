use crate::builder::FieldBuilder;
use crate::decoding::DecodingError;
use crate::decoding::ScalarDecoder;
use crate::selection::Selection;
use crate::Value;
use inherent::inherent;
use std::marker::PhantomData;

/// A leaf field decoded with `T`'s [`ScalarDecoder`].
pub struct Scalar<T> {
    _decoded: PhantomData<fn() -> T>,
}
impl<T> Scalar<T> {
    pub fn new() -> Self {
        Self {
            _decoded: PhantomData,
        }
    }
}
impl<T> std::default::Default for Scalar<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[inherent]
impl<T: ScalarDecoder> FieldBuilder<T> for Scalar<T> {
    pub fn from_graphql(&self, value: &Value) -> Result<T, DecodingError> {
        T::decode(value)
    }

    pub fn to_selection_set(&self) -> Vec<Selection> {
        vec![]
    }
}
