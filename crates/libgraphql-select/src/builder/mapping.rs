use crate::builder::composite_node::CompositeNode;
use crate::builder::SelectionBuilder;
use crate::decoding::DecodingError;
use crate::selection::Directive;
use crate::selection::Selection;
use crate::Value;
use std::sync::Arc;

type MapFn<A0, A> = Arc<dyn Fn(A0) -> Result<A, DecodingError> + Send + Sync>;

/// Post-processes the decoded result of an inner builder. Does not alter what
/// gets selected.
pub struct Mapping<Origin, A> {
    pub(super) node: Arc<dyn CompositeNode<Origin, A>>,
}
impl<Origin, A> std::clone::Clone for Mapping<Origin, A> {
    fn clone(&self) -> Self {
        Self {
            node: Arc::clone(&self.node),
        }
    }
}

pub(super) struct MappingNode<Origin, A0, A> {
    inner: SelectionBuilder<Origin, A0>,
    map_fn: MapFn<A0, A>,
}
impl<Origin: 'static, A0: 'static, A: 'static> MappingNode<Origin, A0, A> {
    pub(super) fn new_builder(
        inner: SelectionBuilder<Origin, A0>,
        map_fn: MapFn<A0, A>,
    ) -> SelectionBuilder<Origin, A> {
        SelectionBuilder::Mapping(Mapping {
            node: Arc::new(Self { inner, map_fn }),
        })
    }
}

impl<Origin: 'static, A0: 'static, A: 'static> CompositeNode<Origin, A>
    for MappingNode<Origin, A0, A>
{
    fn from_graphql(&self, value: &Value) -> Result<A, DecodingError> {
        (self.map_fn)(self.inner.from_graphql(value)?)
    }

    fn to_selection_set(&self) -> Vec<Selection> {
        self.inner.to_selection_set()
    }

    fn with_alias(self: Arc<Self>, alias: &str) -> SelectionBuilder<Origin, A> {
        Self::new_builder(
            self.inner.with_alias(alias),
            Arc::clone(&self.map_fn),
        )
    }

    fn with_directive(self: Arc<Self>, directive: &Directive) -> SelectionBuilder<Origin, A> {
        Self::new_builder(
            self.inner.with_directive(directive.to_owned()),
            Arc::clone(&self.map_fn),
        )
    }
}
