use crate::builder::FieldBuilder;
use crate::decoding::DecodingError;
use crate::selection::FieldSelection;
use crate::selection::InlineFragment;
use crate::selection::Selection;
use crate::Value;
use indexmap::IndexMap;
use inherent::inherent;
use std::sync::Arc;

pub(crate) const TYPENAME_FIELD: &str = "__typename";

/// A union- or interface-typed field.
///
/// Selects `__typename` along with one inline fragment per registered member
/// type, then decodes with the builder registered for the concrete type named
/// by `__typename` in the response.
pub struct ChoiceOf<A> {
    members: IndexMap<String, Arc<dyn FieldBuilder<A>>>,
}
impl<A> ChoiceOf<A> {
    pub fn new() -> Self {
        Self {
            members: IndexMap::new(),
        }
    }

    /// Register the builder used when the concrete type is `type_name`.
    ///
    /// Registering the same `type_name` twice replaces the earlier builder.
    pub fn on(
        mut self,
        type_name: impl Into<String>,
        builder: impl FieldBuilder<A> + 'static,
    ) -> Self {
        self.members.insert(type_name.into(), Arc::new(builder));
        self
    }
}
impl<A> std::default::Default for ChoiceOf<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[inherent]
impl<A> FieldBuilder<A> for ChoiceOf<A> {
    pub fn from_graphql(&self, value: &Value) -> Result<A, DecodingError> {
        if !matches!(value, Value::Object(_)) {
            return Err(DecodingError::new(format!(
                "Field {} is not an object",
                value.describe(),
            )));
        }

        match value.get(TYPENAME_FIELD).and_then(Value::as_str) {
            Some(type_name) => match self.members.get(type_name) {
                Some(builder) => builder.from_graphql(value),
                None => Err(DecodingError::new(format!(
                    "Invalid type: {type_name}",
                ))),
            },
            _ => Err(DecodingError::new("__typename is not present")),
        }
    }

    pub fn to_selection_set(&self) -> Vec<Selection> {
        let typename = Selection::Field(FieldSelection {
            alias: None,
            arguments: vec![],
            directives: vec![],
            identity: 0,
            name: TYPENAME_FIELD.to_string(),
            selection_set: vec![],
        });

        std::iter::once(typename)
            .chain(self.members.iter().map(|(type_name, builder)| {
                Selection::InlineFragment(InlineFragment::new(
                    type_name.as_str(),
                    builder.to_selection_set(),
                ))
            }))
            .collect()
    }
}
