use crate::builder::composite_node::CompositeNode;
use crate::builder::SelectionBuilder;
use crate::decoding::DecodingError;
use crate::selection::Directive;
use crate::selection::Selection;
use crate::Value;
use std::sync::Arc;

type PairFn<L, R, A> = Arc<dyn Fn(L, R) -> A + Send + Sync>;

/// Conjunction of two builders over the same `Origin`.
pub struct Zip<Origin, A> {
    pub(super) node: Arc<dyn CompositeNode<Origin, A>>,
}
impl<Origin, A> std::clone::Clone for Zip<Origin, A> {
    fn clone(&self) -> Self {
        Self {
            node: Arc::clone(&self.node),
        }
    }
}

pub(super) struct ZipNode<Origin, L, R, A> {
    left: SelectionBuilder<Origin, L>,
    pair_fn: PairFn<L, R, A>,
    right: SelectionBuilder<Origin, R>,
}
impl<Origin: 'static, L: 'static, R: 'static, A: 'static> ZipNode<Origin, L, R, A> {
    pub(super) fn new_builder(
        left: SelectionBuilder<Origin, L>,
        right: SelectionBuilder<Origin, R>,
        pair_fn: PairFn<L, R, A>,
    ) -> SelectionBuilder<Origin, A> {
        SelectionBuilder::Zip(Zip {
            node: Arc::new(Self { left, pair_fn, right }),
        })
    }
}

impl<Origin: 'static, L: 'static, R: 'static, A: 'static> CompositeNode<Origin, A>
    for ZipNode<Origin, L, R, A>
{
    /// Left is decoded first; its failure is reported without decoding the
    /// right side.
    fn from_graphql(&self, value: &Value) -> Result<A, DecodingError> {
        let left = self.left.from_graphql(value)?;
        let right = self.right.from_graphql(value)?;
        Ok((self.pair_fn)(left, right))
    }

    fn to_selection_set(&self) -> Vec<Selection> {
        let mut selections = self.left.to_selection_set();
        selections.extend(self.right.to_selection_set());
        selections
    }

    /// Aliasing a conjunction of fields has no single meaning, so this is a
    /// no-op.
    fn with_alias(self: Arc<Self>, _alias: &str) -> SelectionBuilder<Origin, A> {
        SelectionBuilder::Zip(Zip { node: self })
    }

    /// Applied to each side independently.
    fn with_directive(self: Arc<Self>, directive: &Directive) -> SelectionBuilder<Origin, A> {
        Self::new_builder(
            self.left.with_directive(directive.to_owned()),
            self.right.with_directive(directive.to_owned()),
            Arc::clone(&self.pair_fn),
        )
    }
}
