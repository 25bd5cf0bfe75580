use crate::selection::FieldSelection;
use crate::selection::InlineFragment;

/// One entry of a selection set, as it will be written into a GraphQL
/// document.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(FieldSelection),
    InlineFragment(InlineFragment),
}
impl Selection {
    /// The field selection, if this is one.
    pub fn as_field(&self) -> Option<&FieldSelection> {
        if let Self::Field(field) = self {
            Some(field)
        } else {
            None
        }
    }
}
