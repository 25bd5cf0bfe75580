//! A minimal HTTP transport: POSTs a serialized selection and decodes the
//! response body. One request, one response; no retries.

mod http_client;
mod request_options;

pub use http_client::HttpClient;
pub use request_options::RequestOptions;
