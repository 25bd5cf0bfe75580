mod decoded_response;
mod graphql_response;
mod response_error;

pub use decoded_response::DecodedResponse;
pub use graphql_response::GraphQLResponse;
pub use response_error::ErrorLocation;
pub use response_error::PathSegment;
pub use response_error::ResponseError;
