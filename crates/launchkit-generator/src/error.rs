use thiserror::Error;

/// Errors returned by the strategy-generator client.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint URL could not be parsed or a file part was rejected.
    #[error("invalid generator request: {0}")]
    InvalidRequest(String),

    /// The generator answered with a non-success status.
    #[error("generator returned status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
