use crate::builder::SelectionBuilder;
use crate::operation::DocumentFormatter;
use crate::operation::IsOperation;
use crate::Value;
use indexmap::IndexMap;
use serde::Serialize;

/// The JSON body POSTed to a GraphQL endpoint:
/// `{ "query": ..., "variables": {...}, "operationName": ... }`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLRequest {
    pub query: String,
    pub variables: IndexMap<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
}

impl<Origin: IsOperation + 'static, A: 'static> SelectionBuilder<Origin, A> {
    /// Serialize this builder into a complete operation document.
    ///
    /// With `use_variables`, every argument value is hoisted into a variable
    /// declared on the operation; otherwise values are inlined as literals.
    /// With `drop_null_input_values`, `null` fields are removed from
    /// object-valued arguments before they are written.
    pub fn to_graphql(
        &self,
        use_variables: bool,
        operation_name: Option<&str>,
        drop_null_input_values: bool,
    ) -> GraphQLRequest {
        let (query, variables) =
            DocumentFormatter::new(use_variables, drop_null_input_values)
                .format_operation(
                    Origin::OPERATION_KIND,
                    operation_name,
                    &self.to_selection_set(),
                );

        log::trace!(
            "Serialized {} operation ({} variables): {query}",
            Origin::OPERATION_KIND,
            variables.len(),
        );

        GraphQLRequest {
            query,
            variables: variables.into_iter()
                .map(|(name, (value, _type_name))| (name, value))
                .collect(),
            operation_name: operation_name.map(str::to_string),
        }
    }
}
