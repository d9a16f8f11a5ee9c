//! Error types for product API requests.

use thiserror::Error;

/// Errors that can occur while talking to the product API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured base URL cannot carry path segments
    #[error("Invalid API base URL '{base}': {reason}")]
    InvalidBaseUrl { base: String, reason: String },

    /// Request could not be sent or the response body could not be read
    #[error("Request to '{url}' failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status
    #[error("Request to '{url}' returned status {status}")]
    Status { url: String, status: u16 },

    /// The body was not the expected JSON document
    #[error("Malformed response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Short error class name for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidBaseUrl { .. } => "invalid_base_url",
            ApiError::Connection { .. } => "connection_error",
            ApiError::Status { .. } => "status_error",
            ApiError::Decode { .. } => "decode_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_message_includes_code() {
        let err = ApiError::Status {
            url: "http://x/products".to_string(),
            status: 503,
        };
        assert_eq!(err.kind(), "status_error");
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn decode_error_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = ApiError::Decode {
            url: "http://x/products".to_string(),
            source,
        };
        assert_eq!(err.kind(), "decode_error");
        assert!(std::error::Error::source(&err).is_some());
    }
}
