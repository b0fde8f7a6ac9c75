//! Error types for setup and for directory actions

use thiserror::Error;

/// Result type alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while wiring the client together
///
/// Large error variants are boxed to reduce stack size
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// The configured API base address is not an absolute http(s) URL
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// HTTP client construction failed
    #[error("HTTP client error: {0}")]
    HttpClient(Box<reqwest::Error>),

    /// Template rendering failed
    #[error("Template error: {0}")]
    Template(Box<minijinja::Error>),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}

impl From<minijinja::Error> for Error {
    fn from(err: minijinja::Error) -> Self {
        Error::Template(Box::new(err))
    }
}

/// A request that never produced an HTTP response
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    /// Description of the underlying failure
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Outcome kinds for a failed directory action
///
/// `Display` renders the raw description that follows `"Error: "` in a
/// banner: the response body for rejections, the failure text otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The request could not complete
    #[error("{message}")]
    NetworkFailure { message: String },

    /// The server answered with a non-2xx status
    #[error("{body}")]
    ServerRejected { status: u16, body: String },

    /// The list response was not a JSON array of employees
    #[error("{message}")]
    MalformedResponse { message: String },

    /// The user declined the confirmation prompt
    #[error("confirmation declined")]
    ConfirmationDeclined,
}

impl ActionError {
    /// Banner text for this failure
    pub fn banner_text(&self) -> String {
        format!("Error: {}", self)
    }
}

impl From<TransportError> for ActionError {
    fn from(err: TransportError) -> Self {
        ActionError::NetworkFailure {
            message: err.message,
        }
    }
}
