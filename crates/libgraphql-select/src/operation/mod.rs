mod document_formatter;
mod graphql_request;
mod is_operation;
mod operation_kind;

pub use document_formatter::DocumentFormatter;
pub use document_formatter::VariableMap;
pub use graphql_request::GraphQLRequest;
pub use is_operation::IsOperation;
pub use is_operation::RootMutation;
pub use is_operation::RootQuery;
pub use is_operation::RootSubscription;
pub use operation_kind::OperationKind;

#[cfg(test)]
mod tests;
