use crate::Error;
use std::env;
use std::fmt;

/// Environment variable holding the IBM Cloud API key.
pub const API_KEY_VAR: &str = "WATSONX_API_KEY";

/// Environment variable holding the watsonx.ai project identifier.
pub const PROJECT_ID_VAR: &str = "WATSONX_PROJECT_ID";

/// Default watsonx.ai regional endpoint.
pub const DEFAULT_URL: &str = "https://us-south.ml.cloud.ibm.com";

/// Everything needed to authorise a call against watsonx.ai.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub url: String,
    pub api_key: String,
    pub project_id: String,
}

impl Credentials {
    /// Create credentials for the default endpoint.
    pub fn new(api_key: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            api_key: api_key.into(),
            project_id: project_id.into(),
        }
    }

    /// Point the credentials at a different service endpoint.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Load credentials from the process environment.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load credentials through an arbitrary variable lookup.
    ///
    /// Unset and empty values are both treated as missing. The API key is
    /// checked first, so when both are absent the error names
    /// `WATSONX_API_KEY`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| Error::missing(name))
        };

        let api_key = require(API_KEY_VAR)?;
        let project_id = require(PROJECT_ID_VAR)?;

        Ok(Self::new(api_key, project_id))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("url", &self.url)
            .field("api_key", &"<redacted>")
            .field("project_id", &self.project_id)
            .finish()
    }
}

/// Load credentials from the process environment.
pub fn load_credentials() -> Result<Credentials, Error> {
    Credentials::from_env()
}
