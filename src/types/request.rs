use super::params::GenerationParameters;

/// Model used for brainstorming.
pub const DEFAULT_MODEL_ID: &str = "ibm/granite-3-8b-instruct";

/// A single text-generation request, independent of any wire format.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub model_id: String,
    pub input: String,
    pub parameters: GenerationParameters,
    pub project_id: String,
}

impl GenerationRequest {
    /// Create a request for `input` with the creative parameter set.
    pub fn new(
        model_id: impl Into<String>,
        input: impl Into<String>,
        project_id: impl Into<String>,
    ) -> Self {
        Self {
            model_id: model_id.into(),
            input: input.into(),
            parameters: GenerationParameters::creative(),
            project_id: project_id.into(),
        }
    }
}
