use crate::operation::OperationKind;

/// Implemented by the marker types standing in for a schema's root operation
/// types. Only builders whose `Origin` implements `IsOperation` can be turned
/// into a request.
pub trait IsOperation {
    const OPERATION_KIND: OperationKind;
}

/// Marker for the schema's root `Query` type.
#[derive(Clone, Copy, Debug)]
pub struct RootQuery;
impl IsOperation for RootQuery {
    const OPERATION_KIND: OperationKind = OperationKind::Query;
}

/// Marker for the schema's root `Mutation` type.
#[derive(Clone, Copy, Debug)]
pub struct RootMutation;
impl IsOperation for RootMutation {
    const OPERATION_KIND: OperationKind = OperationKind::Mutation;
}

/// Marker for the schema's root `Subscription` type.
#[derive(Clone, Copy, Debug)]
pub struct RootSubscription;
impl IsOperation for RootSubscription {
    const OPERATION_KIND: OperationKind = OperationKind::Subscription;
}
