use crate::builder::FieldBuilder;
use crate::decoding::DecodingError;
use crate::selection::Selection;
use crate::Value;
use inherent::inherent;

/// A field whose value is ignored; always decodes to `None`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullField;

#[inherent]
impl FieldBuilder<Option<()>> for NullField {
    pub fn from_graphql(&self, _value: &Value) -> Result<Option<()>, DecodingError> {
        Ok(None)
    }

    pub fn to_selection_set(&self) -> Vec<Selection> {
        vec![]
    }
}
