use crate::decoding::DecodingError;
use crate::response::ResponseError;
use crate::Value;
use serde::Deserialize;

/// The response envelope: `{ "data": ..., "errors": [...], "extensions": {...} }`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct GraphQLResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default, deserialize_with = "nullable_errors")]
    pub errors: Vec<ResponseError>,
    #[serde(default)]
    pub extensions: Option<Value>,
}
impl GraphQLResponse {
    /// Parse a raw response body.
    pub fn from_str(payload: &str) -> Result<Self, DecodingError> {
        Ok(serde_json::from_str(payload)?)
    }

    /// `true` when the server reported errors and returned no data at all.
    ///
    /// An explicit `"data": null` deserializes to `None`.
    pub fn is_fatal(&self) -> bool {
        !self.errors.is_empty() && self.data.is_none()
    }
}

fn nullable_errors<'de, D: serde::Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<ResponseError>, D::Error> {
    Ok(Option::<Vec<ResponseError>>::deserialize(deserializer)?.unwrap_or_default())
}
