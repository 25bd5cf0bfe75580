//! Typed selection of the parts of the `__schema` introspection meta field
//! that `gqlsel introspect` reports on.

use libgraphql_select::builder::ListOf;
use libgraphql_select::builder::Obj;
use libgraphql_select::builder::OptionOf;
use libgraphql_select::builder::Scalar;
use libgraphql_select::builder::SelectionBuilder;
use libgraphql_select::operation::RootQuery;
use std::collections::BTreeMap;

/// The `__Schema` meta type.
pub(crate) struct Schema;

/// The `__Type` meta type.
pub(crate) struct MetaType;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SchemaSummary {
    pub query_type: String,
    pub mutation_type: Option<String>,
    pub subscription_type: Option<String>,
    /// `(kind, name)` of every type in the schema.
    pub types: Vec<(String, Option<String>)>,
}
impl SchemaSummary {
    /// Number of types per `__TypeKind`, ordered by kind.
    pub fn count_by_kind(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for (kind, _) in &self.types {
            *counts.entry(kind.as_str()).or_default() += 1;
        }
        counts
    }
}

fn type_name() -> SelectionBuilder<MetaType, String> {
    SelectionBuilder::scalar("name")
}

fn root_type(field_name: &str) -> SelectionBuilder<Schema, Option<String>> {
    SelectionBuilder::field(field_name, OptionOf::new(Obj::new(type_name())))
}

/// `__schema { queryType { name } mutationType { name }
/// subscriptionType { name } types { kind name } }`
pub(crate) fn schema_summary() -> SelectionBuilder<RootQuery, SchemaSummary> {
    let types =
        SelectionBuilder::<MetaType, String>::scalar("kind")
            .zip(SelectionBuilder::field("name", OptionOf::new(Scalar::<String>::new())));

    let schema =
        SelectionBuilder::field("queryType", Obj::new(type_name()))
            .zip(root_type("mutationType"))
            .zip(root_type("subscriptionType"))
            .zip(SelectionBuilder::field("types", ListOf::new(Obj::new(types))))
            .map(|(((query_type, mutation_type), subscription_type), types)| {
                SchemaSummary {
                    query_type,
                    mutation_type,
                    subscription_type,
                    types,
                }
            });

    SelectionBuilder::field("__schema", Obj::new(schema))
}
