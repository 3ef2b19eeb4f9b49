use crate::types::GenerationParameters;
use serde::{Deserialize, Serialize};

/// Grant type for exchanging an IBM Cloud API key for a bearer token.
pub const APIKEY_GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";

/// IAM token exchange form body.
#[derive(Debug, Clone, Serialize)]
pub struct IamTokenRequest<'a> {
    pub grant_type: &'a str,
    pub apikey: &'a str,
}

/// IAM token exchange response.
#[derive(Debug, Clone, Deserialize)]
pub struct IamTokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// watsonx.ai text generation request body.
#[derive(Debug, Clone, Serialize)]
pub struct TextGenerationRequest<'a> {
    pub model_id: &'a str,
    pub input: &'a str,
    pub parameters: &'a GenerationParameters,
    pub project_id: &'a str,
}

/// watsonx.ai text generation response body.
#[derive(Debug, Clone, Deserialize)]
pub struct TextGenerationResponse {
    #[serde(default)]
    pub model_id: Option<String>,
    #[serde(default)]
    pub results: Vec<TextGenerationResult>,
}

/// One generated completion.
#[derive(Debug, Clone, Deserialize)]
pub struct TextGenerationResult {
    pub generated_text: String,
    #[serde(default)]
    pub generated_token_count: Option<u32>,
    #[serde(default)]
    pub input_token_count: Option<u32>,
    #[serde(default)]
    pub stop_reason: Option<String>,
}

/// Error document returned by watsonx.ai on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct WatsonxErrorResponse {
    #[serde(default)]
    pub errors: Vec<WatsonxError>,
    #[serde(default)]
    pub trace: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WatsonxError {
    pub code: String,
    pub message: String,
}

impl WatsonxErrorResponse {
    /// Join the individual error entries into one line.
    pub fn summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| format!("{}: {}", e.code, e.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let parameters = GenerationParameters::creative();
        let body = TextGenerationRequest {
            model_id: "ibm/granite-3-8b-instruct",
            input: "prompt",
            parameters: &parameters,
            project_id: "project-1",
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["model_id"], json!("ibm/granite-3-8b-instruct"));
        assert_eq!(value["input"], json!("prompt"));
        assert_eq!(value["project_id"], json!("project-1"));
        assert_eq!(value["parameters"]["decoding_method"], json!("sample"));
    }

    #[test]
    fn test_response_parsing() {
        let body = r#"{
            "model_id": "ibm/granite-3-8b-instruct",
            "created_at": "2024-11-01T10:00:00.000Z",
            "results": [{
                "generated_text": " Rooftop beds\n2. Seed libraries",
                "generated_token_count": 9,
                "input_token_count": 31,
                "stop_reason": "eos_token"
            }]
        }"#;

        let response: TextGenerationResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].generated_text, " Rooftop beds\n2. Seed libraries");
        assert_eq!(response.results[0].generated_token_count, Some(9));
        assert_eq!(response.results[0].stop_reason.as_deref(), Some("eos_token"));
    }

    #[test]
    fn test_error_summary() {
        let body = r#"{
            "errors": [
                {"code": "model_not_supported", "message": "Model 'x' is not supported"},
                {"code": "invalid_project", "message": "Project not found"}
            ],
            "trace": "abc123",
            "status_code": 404
        }"#;

        let response: WatsonxErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            response.summary(),
            "model_not_supported: Model 'x' is not supported; invalid_project: Project not found"
        );
        assert_eq!(response.trace.as_deref(), Some("abc123"));
    }
}
