use crate::builder::SelectionBuilder;
use crate::client_error::ClientError;
use crate::operation::GraphQLRequest;
use crate::operation::IsOperation;
use crate::response::DecodedResponse;
use crate::transport::RequestOptions;

/// Sends operations to a single GraphQL endpoint over HTTP.
#[derive(Clone, Debug)]
pub struct HttpClient {
    endpoint: String,
    headers: Vec<(String, String)>,
    http: reqwest::Client,
}
impl HttpClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    /// Use a preconfigured [`reqwest::Client`] (timeouts, proxies, TLS...).
    pub fn with_client(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            headers: vec![],
            http,
        }
    }

    /// Add a header sent with every request.
    pub fn with_header(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Serialize `builder`, send it, and decode the response.
    pub async fn execute<Origin: IsOperation + 'static, A: 'static>(
        &self,
        builder: &SelectionBuilder<Origin, A>,
        options: &RequestOptions,
    ) -> Result<DecodedResponse<A>, ClientError> {
        let request = builder.to_graphql(
            options.use_variables,
            options.operation_name.as_deref(),
            options.drop_null_input_values,
        );
        let body = self.send(&request).await?;
        builder.decode(&body)
    }

    /// Send an already serialized request and return the raw response body.
    ///
    /// Non-2xx responses are returned like any other as long as their body
    /// is a GraphQL response (`data` or non-empty `errors`), since servers
    /// commonly report GraphQL errors that way.
    pub async fn send(&self, request: &GraphQLRequest) -> Result<String, ClientError> {
        log::debug!(
            "Sending {} variables to `{}`.",
            request.variables.len(),
            self.endpoint,
        );

        let mut http_request = self.http.post(self.endpoint.as_str()).json(request);
        for (name, value) in &self.headers {
            http_request = http_request.header(name.as_str(), value.as_str());
        }

        let response = http_request.send().await.map_err(|e| {
            ClientError::communication_with_source(
                format!("Request to `{}` failed", self.endpoint),
                e,
            )
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            ClientError::communication_with_source(
                format!("Failed to read response body from `{}`", self.endpoint),
                e,
            )
        })?;
        log::debug!("Received HTTP {status} ({} bytes).", body.len());

        if !status.is_success() && !is_graphql_envelope(&body) {
            return Err(ClientError::communication(format!(
                "Unexpected HTTP status {status}: {body}",
            )));
        }

        Ok(body)
    }
}

/// Whether `body` is a JSON object carrying `data` or a non-empty `errors`
/// list.
fn is_graphql_envelope(body: &str) -> bool {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(entries)) =>
            entries.contains_key("data")
                || entries.get("errors")
                    .and_then(serde_json::Value::as_array)
                    .is_some_and(|errors| !errors.is_empty()),
        _ => false,
    }
}
