use crate::builder::SelectionBuilder;
use crate::decoding::DecodingError;
use crate::selection::Directive;
use crate::selection::Selection;
use crate::Value;
use std::sync::Arc;

/// Type-erased interior of the [`Mapping`](crate::builder::Mapping) and
/// [`Zip`](crate::builder::Zip) variants, hiding the intermediate result types
/// of their child builders.
pub(crate) trait CompositeNode<Origin, A>: Send + Sync {
    fn from_graphql(&self, value: &Value) -> Result<A, DecodingError>;
    fn to_selection_set(&self) -> Vec<Selection>;
    fn with_alias(self: Arc<Self>, alias: &str) -> SelectionBuilder<Origin, A>;
    fn with_directive(self: Arc<Self>, directive: &Directive) -> SelectionBuilder<Origin, A>;
}
