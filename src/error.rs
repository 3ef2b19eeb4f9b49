use thiserror::Error;

/// Errors that can occur when brainstorming ideas.
#[derive(Error, Debug)]
pub enum Error {
    /// A required environment variable is unset or empty.
    #[error("Missing environment variable: {variable}")]
    MissingConfiguration { variable: String },

    /// The remote text-generation call failed. The message is the
    /// underlying transport or service message, unchanged.
    #[error("{0}")]
    ServiceCall(String),

    #[error("Console I/O failed: {0}")]
    Console(#[from] std::io::Error),
}

impl Error {
    pub fn missing(variable: impl Into<String>) -> Self {
        Error::MissingConfiguration {
            variable: variable.into(),
        }
    }

    pub fn service(message: impl Into<String>) -> Self {
        Error::ServiceCall(message.into())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::ServiceCall(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ServiceCall(format!("Malformed response: {err}"))
    }
}
