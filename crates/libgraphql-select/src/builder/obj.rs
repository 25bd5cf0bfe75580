use crate::builder::FieldBuilder;
use crate::builder::SelectionBuilder;
use crate::decoding::DecodingError;
use crate::selection::Selection;
use crate::Value;
use inherent::inherent;

/// An object-typed field whose sub-fields are described by a nested
/// [`SelectionBuilder`] over the field's type `Origin`.
pub struct Obj<Origin, A> {
    builder: SelectionBuilder<Origin, A>,
}
impl<Origin, A> Obj<Origin, A> {
    pub fn new(builder: SelectionBuilder<Origin, A>) -> Self {
        Self { builder }
    }
}

#[inherent]
impl<Origin: 'static, A: 'static> FieldBuilder<A> for Obj<Origin, A> {
    pub fn from_graphql(&self, value: &Value) -> Result<A, DecodingError> {
        match value {
            Value::Object(_) => self.builder.from_graphql(value),
            other => Err(DecodingError::new(format!(
                "Field {} is not an object",
                other.describe(),
            ))),
        }
    }

    pub fn to_selection_set(&self) -> Vec<Selection> {
        self.builder.to_selection_set()
    }
}
