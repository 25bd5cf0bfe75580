use crate::decoding::DecodingError;
use crate::selection::Selection;
use crate::Value;

/// Describes what gets selected *underneath* a field and how the value found
/// at that field is decoded.
///
/// Leaf fields use [`Scalar`](crate::builder::Scalar) (empty selection set);
/// object-typed fields use [`Obj`](crate::builder::Obj), and the
/// [`ListOf`](crate::builder::ListOf) / [`OptionOf`](crate::builder::OptionOf)
/// wrappers mirror GraphQL's list and nullable type modifiers.
pub trait FieldBuilder<A>: Send + Sync {
    fn from_graphql(&self, value: &Value) -> Result<A, DecodingError>;
    fn to_selection_set(&self) -> Vec<Selection>;
}
