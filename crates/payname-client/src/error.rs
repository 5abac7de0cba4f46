//! Error types for the Payname client.

use payname_core::ApiIssue;
use reqwest::Method;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when talking to the Payname API.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The client is missing its credentials.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request could not be sent, or the response body not read.
    #[error("{method} {url} failed: {source}")]
    Transport {
        /// HTTP method of the failed call.
        method: Method,
        /// Absolute URL of the failed call.
        url: String,
        /// Underlying HTTP error.
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not a well-formed envelope.
    #[error("{method} {url} did not send valid JSON: {body}")]
    InvalidJson {
        /// HTTP method of the failed call.
        method: Method,
        /// Absolute URL of the failed call.
        url: String,
        /// Raw response body, kept for diagnostics.
        body: String,
    },

    /// The platform reported a failure (`success: false` envelope).
    #[error("{0}")]
    Api(ApiIssue),

    /// A payload or record could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// The issue carried by an [`Error::Api`], if that is what this is.
    #[must_use]
    pub fn api_issue(&self) -> Option<&ApiIssue> {
        match self {
            Self::Api(issue) => Some(issue),
            _ => None,
        }
    }
}
