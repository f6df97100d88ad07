use thiserror::Error;

/// Errors raised while talking to the REST or GraphQL endpoints.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Invalid client settings (e.g., a header value with control characters)
    #[error("Invalid client configuration: {0}")]
    Config(String),

    /// Connection, timeout or transport failure
    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Endpoint answered with a non-success status
    #[error("Upstream error: {status} - {body}")]
    Status { status: u16, body: String },

    /// Body was not the expected JSON shape
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// GraphQL answered with an `errors` array
    #[error("GraphQL error: {0}")]
    GraphQl(String),
}

impl ApiError {
    /// Error type string used in the serialized envelope.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Client(_) => "client_error",
            ApiError::Config(_) => "config_error",
            ApiError::Request { .. } => "request_error",
            ApiError::Status { .. } => "status_error",
            ApiError::Decode(_) => "decode_error",
            ApiError::GraphQl(_) => "graphql_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_message() {
        let err = ApiError::Status {
            status: 403,
            body: "APP_ID_MISSING".to_string(),
        };
        assert_eq!(err.kind(), "status_error");
        assert_eq!(err.to_string(), "Upstream error: 403 - APP_ID_MISSING");
    }

    #[test]
    fn decode_error_from_serde() {
        let err: ApiError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert_eq!(err.kind(), "decode_error");
    }
}
