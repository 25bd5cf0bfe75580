use crate::builder::FieldBuilder;
use crate::decoding::DecodingError;
use crate::selection::Selection;
use crate::Value;
use inherent::inherent;
use std::sync::Arc;

/// A list-typed field; every item is decoded with the wrapped builder.
pub struct ListOf<A> {
    item_builder: Arc<dyn FieldBuilder<A>>,
}
impl<A> ListOf<A> {
    pub fn new(item_builder: impl FieldBuilder<A> + 'static) -> Self {
        Self {
            item_builder: Arc::new(item_builder),
        }
    }
}

#[inherent]
impl<A> FieldBuilder<Vec<A>> for ListOf<A> {
    pub fn from_graphql(&self, value: &Value) -> Result<Vec<A>, DecodingError> {
        match value {
            Value::List(items) =>
                items.iter()
                    .map(|item| self.item_builder.from_graphql(item))
                    .collect(),
            other => Err(DecodingError::new(format!(
                "Field {} is not a list",
                other.describe(),
            ))),
        }
    }

    pub fn to_selection_set(&self) -> Vec<Selection> {
        self.item_builder.to_selection_set()
    }
}
