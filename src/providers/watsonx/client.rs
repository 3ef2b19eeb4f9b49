use super::types::{
    IamTokenRequest, IamTokenResponse, TextGenerationRequest, TextGenerationResponse,
    WatsonxErrorResponse, APIKEY_GRANT_TYPE,
};
use crate::provider::TextGenerator;
use crate::{Credentials, Error, GenerationRequest};
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, info, warn};

/// IBM Cloud IAM endpoint used for API key exchange.
pub const DEFAULT_IAM_URL: &str = "https://iam.cloud.ibm.com";

/// watsonx.ai REST API version date.
pub const API_VERSION: &str = "2023-05-29";

/// watsonx.ai provider implementation.
pub struct WatsonxProvider {
    client: Client,
    api_key: String,
    base_url: String,
    iam_url: String,
}

impl WatsonxProvider {
    /// Create a provider for the endpoint named in `credentials`.
    pub fn new(credentials: &Credentials) -> Result<Self, Error> {
        Self::new_with_base_url(
            credentials.api_key.clone(),
            credentials.url.clone(),
            DEFAULT_IAM_URL.to_string(),
        )
    }

    /// Create a provider with custom service and IAM base URLs (for testing).
    pub fn new_with_base_url(
        api_key: String,
        base_url: String,
        iam_url: String,
    ) -> Result<Self, Error> {
        let client = Client::builder().timeout(Duration::from_secs(60)).build()?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            iam_url: iam_url.trim_end_matches('/').to_string(),
        })
    }

    /// Exchange the API key for a short-lived IAM bearer token.
    async fn access_token(&self) -> Result<String, Error> {
        debug!(iam_url = %self.iam_url, "requesting IAM access token");

        let response = self
            .client
            .post(format!("{}/identity/token", self.iam_url))
            .header("Accept", "application/json")
            .form(&IamTokenRequest {
                grant_type: APIKEY_GRANT_TYPE,
                apikey: &self.api_key,
            })
            .send()
            .await?;

        let response = Self::check_status(response, "IAM token exchange").await?;
        let token: IamTokenResponse = serde_json::from_str(&response.text().await?)?;
        debug!(expires_in = ?token.expires_in, "received IAM access token");

        Ok(token.access_token)
    }

    /// Turn a non-2xx response into a `ServiceCall` error.
    async fn check_status(response: Response, context: &str) -> Result<Response, Error> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await?;
        let (detail, trace) = match serde_json::from_str::<WatsonxErrorResponse>(&body) {
            Ok(parsed) if !parsed.errors.is_empty() => (parsed.summary(), parsed.trace),
            _ => (body, None),
        };
        warn!(%status, context, trace = ?trace, "watsonx.ai request failed");

        Err(Error::service(format!("{context} failed ({status}): {detail}")))
    }
}

#[async_trait::async_trait]
impl TextGenerator for WatsonxProvider {
    async fn generate_text(&self, request: &GenerationRequest) -> Result<String, Error> {
        let token = self.access_token().await?;

        let body = TextGenerationRequest {
            model_id: &request.model_id,
            input: &request.input,
            parameters: &request.parameters,
            project_id: &request.project_id,
        };

        debug!(model_id = %request.model_id, "sending text generation request");
        let response = self
            .client
            .post(format!("{}/ml/v1/text/generation", self.base_url))
            .query(&[("version", API_VERSION)])
            .bearer_auth(token)
            .header("Accept", "application/json")
            .json(&body)
            .send()
            .await?;

        let response = Self::check_status(response, "Text generation").await?;
        let parsed: TextGenerationResponse = serde_json::from_str(&response.text().await?)?;

        let result = parsed
            .results
            .into_iter()
            .next()
            .ok_or_else(|| Error::service("Text generation returned no results"))?;

        info!(
            model_id = parsed.model_id.as_deref().unwrap_or(&request.model_id),
            input_tokens = ?result.input_token_count,
            generated_tokens = ?result.generated_token_count,
            stop_reason = ?result.stop_reason,
            "text generation complete"
        );

        Ok(result.generated_text)
    }
}
