use thiserror::Error;

/// Result type alias for oracle client operations
pub type Result<T> = std::result::Result<T, OracleError>;

/// Error types shared across query building, transport, and classification
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("invalid query: {}", .messages.join("; "))]
    Validation { messages: Vec<String> },

    #[error("network failure: {message}")]
    Network { message: String },

    #[error("unparseable response: {0}")]
    Parse(#[from] roxmltree::Error),

    #[error("invalid credential: {message}")]
    InvalidCredential { message: String },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTTP client error: {0}")]
    Http(reqwest::Error),
}

impl OracleError {
    /// Create a validation error from the collected rule violations
    pub fn validation(messages: Vec<String>) -> Self {
        Self::Validation { messages }
    }

    /// Create a normalized network error, keeping the original message
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create an invalid credential error
    pub fn invalid_credential<S: Into<String>>(message: S) -> Self {
        Self::InvalidCredential {
            message: message.into(),
        }
    }
}
