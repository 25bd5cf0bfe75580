use crate::builder::FieldBuilder;
use crate::decoding::DecodingError;
use crate::selection::Selection;
use crate::Value;
use inherent::inherent;
use std::sync::Arc;

/// A nullable field: `null` decodes to `None`, anything else is handed to the
/// wrapped builder.
pub struct OptionOf<A> {
    inner_builder: Arc<dyn FieldBuilder<A>>,
}
impl<A> OptionOf<A> {
    pub fn new(inner_builder: impl FieldBuilder<A> + 'static) -> Self {
        Self {
            inner_builder: Arc::new(inner_builder),
        }
    }
}

#[inherent]
impl<A> FieldBuilder<Option<A>> for OptionOf<A> {
    pub fn from_graphql(&self, value: &Value) -> Result<Option<A>, DecodingError> {
        match value {
            Value::Null => Ok(None),
            other => self.inner_builder.from_graphql(other).map(Some),
        }
    }

    pub fn to_selection_set(&self) -> Vec<Selection> {
        self.inner_builder.to_selection_set()
    }
}
