use crate::builder::SelectionBuilder;
use crate::client_error::ClientError;
use crate::decoding::DecodingError;
use crate::response::GraphQLResponse;
use crate::response::ResponseError;
use crate::Value;

/// A successfully decoded response.
///
/// `errors` and `extensions` are surfaced even on success so callers can
/// consume partial results alongside the errors reported for other fields.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedResponse<A> {
    pub data: A,
    pub errors: Vec<ResponseError>,
    pub extensions: Option<Value>,
}
impl<A> DecodedResponse<A> {
    pub fn into_parts(self) -> (A, Vec<ResponseError>, Option<Value>) {
        (self.data, self.errors, self.extensions)
    }
}

impl<Origin: 'static, A: 'static> SelectionBuilder<Origin, A> {
    /// Decode a raw response body produced by running this builder's
    /// operation.
    ///
    /// Fails with [`ClientError::Server`] when the response carries errors and
    /// no data; partial data alongside errors is decoded normally.
    pub fn decode(&self, payload: &str) -> Result<DecodedResponse<A>, ClientError> {
        self.decode_response(GraphQLResponse::from_str(payload)?)
    }

    /// Like [`SelectionBuilder::decode`], for an already parsed envelope.
    pub fn decode_response(
        &self,
        response: GraphQLResponse,
    ) -> Result<DecodedResponse<A>, ClientError> {
        if response.is_fatal() {
            log::debug!(
                "Response carried {} errors and no data.",
                response.errors.len(),
            );
            return Err(ClientError::Server(response.errors));
        }

        let data = match response.data {
            Some(data @ Value::Object(_)) => data,
            _ => return Err(DecodingError::new("Result is not an object").into()),
        };

        let decoded = self.from_graphql(&data)?;
        if !response.errors.is_empty() {
            log::debug!(
                "Decoded partial result alongside {} errors.",
                response.errors.len(),
            );
        }

        Ok(DecodedResponse {
            data: decoded,
            errors: response.errors,
            extensions: response.extensions,
        })
    }
}
