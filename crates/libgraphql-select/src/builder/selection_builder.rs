use crate::builder::mapping::MappingNode;
use crate::builder::zip::ZipNode;
use crate::builder::Field;
use crate::builder::FieldBuilder;
use crate::builder::Mapping;
use crate::builder::Pure;
use crate::builder::Scalar;
use crate::builder::Zip;
use crate::decoding::DecodingError;
use crate::decoding::ScalarDecoder;
use crate::selection::Argument;
use crate::selection::Directive;
use crate::selection::Selection;
use crate::Value;
use std::sync::Arc;

/// A composable, immutable description of fields to select on the GraphQL
/// type `Origin`, paired with the logic to decode them into an `A`.
///
/// `Origin` is a marker type standing in for a GraphQL object type (e.g.
/// `struct User;`). Since [`SelectionBuilder::zip`] requires both sides to
/// share the same `Origin`, selections for different parent types cannot be
/// combined by accident.
///
/// ```
/// use libgraphql_select::builder::Obj;
/// use libgraphql_select::builder::SelectionBuilder;
/// use libgraphql_select::operation::RootQuery;
/// use libgraphql_select::selection::Argument;
///
/// struct User;
///
/// let name = SelectionBuilder::<User, String>::scalar("name");
/// let age = SelectionBuilder::<User, i32>::scalar("age");
/// let user = SelectionBuilder::<RootQuery, _>::field_with_args(
///     "user",
///     Obj::new(name.zip(age)),
///     vec![Argument::new("id", 1, "ID!")],
/// );
///
/// let request = user.to_graphql(false, None, false);
/// assert_eq!(request.query, "query{user(id:1){name age}}");
/// ```
pub enum SelectionBuilder<Origin, A> {
    Field(Field<Origin, A>),
    Mapping(Mapping<Origin, A>),
    Pure(Pure<A>),
    Zip(Zip<Origin, A>),
}

impl<Origin: 'static, A: 'static> SelectionBuilder<Origin, A> {
    /// Select the field `name`, decoding its value with `builder`.
    pub fn field(
        name: impl Into<String>,
        builder: impl FieldBuilder<A> + 'static,
    ) -> Self {
        Self::field_with_args(name, builder, vec![])
    }

    /// Select the field `name` with the given arguments, decoding its value
    /// with `builder`.
    pub fn field_with_args(
        name: impl Into<String>,
        builder: impl FieldBuilder<A> + 'static,
        arguments: Vec<Argument>,
    ) -> Self {
        Self::Field(Field::new(name.into(), Arc::new(builder), arguments))
    }

    /// A builder that selects nothing and always decodes to `value`.
    pub fn pure(value: A) -> Self
    where
        A: Clone + Send + Sync,
    {
        Self::Pure(Pure::new(value))
    }

    /// Decode a result out of `value`, which is the object holding the fields
    /// this builder selected.
    pub fn from_graphql(&self, value: &Value) -> Result<A, DecodingError> {
        match self {
            Self::Field(field) => field.from_graphql(value),
            Self::Mapping(Mapping { node }) => node.from_graphql(value),
            Self::Pure(pure) => Ok(pure.value()),
            Self::Zip(Zip { node }) => node.from_graphql(value),
        }
    }

    /// The selections this builder contributes, in left-to-right order.
    pub fn to_selection_set(&self) -> Vec<Selection> {
        match self {
            Self::Field(field) => vec![field.to_selection()],
            Self::Mapping(Mapping { node }) => node.to_selection_set(),
            Self::Pure(_) => vec![],
            Self::Zip(Zip { node }) => node.to_selection_set(),
        }
    }

    /// Transform the decoded result.
    pub fn map<B: 'static>(
        self,
        map_fn: impl Fn(A) -> B + Send + Sync + 'static,
    ) -> SelectionBuilder<Origin, B> {
        self.try_map(move |a| Ok(map_fn(a)))
    }

    /// Transform the decoded result with a function that may reject it. The
    /// returned [`DecodingError`] fails decoding of the whole response.
    pub fn try_map<B: 'static>(
        self,
        map_fn: impl Fn(A) -> Result<B, DecodingError> + Send + Sync + 'static,
    ) -> SelectionBuilder<Origin, B> {
        MappingNode::new_builder(self, Arc::new(map_fn))
    }

    /// Select both `self` and `other`, decoding to a pair.
    pub fn zip<B: 'static>(
        self,
        other: SelectionBuilder<Origin, B>,
    ) -> SelectionBuilder<Origin, (A, B)> {
        self.zip_with(other, |a, b| (a, b))
    }

    /// Select both `self` and `other`, combining their results with `pair_fn`.
    ///
    /// Both sides decode against the same object. If both fail, the error
    /// from `self` is the one reported.
    pub fn zip_with<B: 'static, C: 'static>(
        self,
        other: SelectionBuilder<Origin, B>,
        pair_fn: impl Fn(A, B) -> C + Send + Sync + 'static,
    ) -> SelectionBuilder<Origin, C> {
        ZipNode::new_builder(self, other, Arc::new(pair_fn))
    }

    /// Select both, keep only the result of `self`.
    pub fn zip_left<B: 'static>(
        self,
        other: SelectionBuilder<Origin, B>,
    ) -> SelectionBuilder<Origin, A> {
        self.zip_with(other, |a, _| a)
    }

    /// Select both, keep only the result of `other`.
    pub fn zip_right<B: 'static>(
        self,
        other: SelectionBuilder<Origin, B>,
    ) -> SelectionBuilder<Origin, B> {
        self.zip_with(other, |_, b| b)
    }

    /// Set the alias of the underlying field.
    ///
    /// Has no effect on [`SelectionBuilder::Pure`] or
    /// [`SelectionBuilder::Zip`].
    pub fn with_alias(&self, alias: impl AsRef<str>) -> Self {
        match self {
            Self::Field(field) => Self::Field(field.with_alias(alias.as_ref())),
            Self::Mapping(Mapping { node }) =>
                Arc::clone(node).with_alias(alias.as_ref()),
            Self::Pure(_) | Self::Zip(_) => self.to_owned(),
        }
    }

    /// Add a directive before any existing directives of the underlying
    /// field(s). On a [`SelectionBuilder::Zip`] each side receives its own
    /// copy of the directive.
    pub fn with_directive(&self, directive: Directive) -> Self {
        match self {
            Self::Field(field) => Self::Field(field.with_directive(&directive)),
            Self::Mapping(Mapping { node }) =>
                Arc::clone(node).with_directive(&directive),
            Self::Pure(_) => self.to_owned(),
            Self::Zip(Zip { node }) =>
                Arc::clone(node).with_directive(&directive),
        }
    }

    /// Combine several builders over the same `Origin` into one that decodes
    /// to all of their results, in order.
    pub fn combine_all(
        head: Self,
        tail: impl IntoIterator<Item = Self>,
    ) -> SelectionBuilder<Origin, Vec<A>> {
        tail.into_iter().fold(
            head.map(|a| vec![a]),
            |acc, next| acc.zip_with(next, |mut results, a| {
                results.push(a);
                results
            }),
        )
    }
}

impl<Origin: 'static, A: ScalarDecoder + 'static> SelectionBuilder<Origin, A> {
    /// Select the leaf field `name`, decoding it with `A`'s [`ScalarDecoder`].
    pub fn scalar(name: impl Into<String>) -> Self {
        Self::field(name, Scalar::<A>::new())
    }
}

impl<Origin: 'static> SelectionBuilder<Origin, String> {
    /// Select the `__typename` meta field.
    pub fn typename() -> Self {
        Self::scalar("__typename")
    }
}

impl<Origin, A> std::clone::Clone for SelectionBuilder<Origin, A> {
    fn clone(&self) -> Self {
        match self {
            Self::Field(field) => Self::Field(field.clone()),
            Self::Mapping(mapping) => Self::Mapping(mapping.clone()),
            Self::Pure(pure) => Self::Pure(pure.clone()),
            Self::Zip(zip) => Self::Zip(zip.clone()),
        }
    }
}

impl<Origin, A> std::fmt::Debug for SelectionBuilder<Origin, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Field(field) => f.debug_tuple("Field").field(field).finish(),
            Self::Mapping(_) => f.write_str("Mapping(..)"),
            Self::Pure(pure) => f.debug_tuple("Pure").field(pure).finish(),
            Self::Zip(_) => f.write_str("Zip(..)"),
        }
    }
}
