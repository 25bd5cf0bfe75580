use crate::selection::Selection;

/// An inline fragment spread: `... on <on_type> { <selection_set> }`.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub(crate) on_type: String,
    pub(crate) selection_set: Vec<Selection>,
}
impl InlineFragment {
    pub fn new(on_type: impl Into<String>, selection_set: Vec<Selection>) -> Self {
        Self {
            on_type: on_type.into(),
            selection_set,
        }
    }

    pub fn on_type(&self) -> &str {
        self.on_type.as_str()
    }

    pub fn selection_set(&self) -> &[Selection] {
        self.selection_set.as_slice()
    }
}
