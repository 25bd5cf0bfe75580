use crate::decoding::DecodingError;
use crate::response::ResponseError;
use std::error::Error;
use std::sync::Arc;

/// Every way running a selection against a server can fail.
#[derive(Clone, Debug, thiserror::Error)]
pub enum ClientError {
    /// The request could not be sent or its response could not be read.
    #[error("Cannot send request: {message}")]
    Communication {
        message: String,
        #[source]
        source: Option<Arc<dyn Error + Send + Sync>>,
    },

    #[error(transparent)]
    Decoding(#[from] DecodingError),

    /// The server reported errors and returned no data.
    #[error("Server error: {}", format_errors(.0))]
    Server(Vec<ResponseError>),
}
impl ClientError {
    pub fn communication(message: impl Into<String>) -> Self {
        Self::Communication {
            message: message.into(),
            source: None,
        }
    }

    pub fn communication_with_source(
        message: impl Into<String>,
        source: impl Error + Send + Sync + 'static,
    ) -> Self {
        Self::Communication {
            message: message.into(),
            source: Some(Arc::new(source)),
        }
    }
}

fn format_errors(errors: &[ResponseError]) -> String {
    errors.iter()
        .map(|err| err.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
