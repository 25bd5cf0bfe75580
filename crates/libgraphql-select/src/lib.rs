//! Typed, composable GraphQL selections.
//!
//! A [`SelectionBuilder`](builder::SelectionBuilder) describes which fields to
//! fetch from a GraphQL type and how to decode them. The same value is used
//! twice per operation: once to serialize a request document
//! ([`SelectionBuilder::to_graphql`](builder::SelectionBuilder::to_graphql)),
//! and once to decode the server's response
//! ([`SelectionBuilder::decode`](builder::SelectionBuilder::decode)). Because
//! both directions walk the same tree, the aliases written into the document
//! are always the keys the decoder looks for, even when a field is selected
//! more than once with different arguments.

pub mod builder;
mod client_error;
pub mod decoding;
pub mod encoding;
pub mod operation;
pub mod response;
pub mod selection;
#[cfg(feature = "transport")]
pub mod transport;
mod value;

pub use client_error::ClientError;
pub use decoding::DecodingError;
pub use value::Value;

#[cfg(test)]
mod tests;
