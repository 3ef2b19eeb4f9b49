//! Brainstorming on top of a [`TextGenerator`].

use crate::provider::TextGenerator;
use crate::providers::WatsonxProvider;
use crate::types::{build_prompt, GenerationRequest, DEFAULT_MODEL_ID};
use crate::{Credentials, Error};
use tracing::debug;

/// Prefix re-attached to the model output, which continues from the "1."
/// the prompt ends on.
const LIST_PREFIX: &str = "1. ";

/// Generates a numbered list of ideas for a topic.
pub struct IdeaGenerator<P> {
    provider: P,
    project_id: String,
}

impl<P: TextGenerator> IdeaGenerator<P> {
    /// Create a generator using the Granite 3 8B instruct model.
    pub fn new(provider: P, project_id: impl Into<String>) -> Self {
        Self {
            provider,
            project_id: project_id.into(),
        }
    }

    /// Build the request sent for `topic`.
    pub fn request_for(&self, topic: &str) -> GenerationRequest {
        GenerationRequest::new(DEFAULT_MODEL_ID, build_prompt(topic), &self.project_id)
    }

    /// Brainstorm ideas for `topic`.
    ///
    /// The topic is not validated here; callers decide what to do with an
    /// empty one.
    pub async fn generate_ideas(&self, topic: &str) -> Result<String, Error> {
        let request = self.request_for(topic);
        debug!(model_id = %request.model_id, topic_len = topic.len(), "brainstorming");

        let raw = self.provider.generate_text(&request).await?;

        Ok(format_ideas(&raw))
    }
}

impl IdeaGenerator<WatsonxProvider> {
    /// Create a generator backed by watsonx.ai.
    pub fn from_credentials(credentials: &Credentials) -> Result<Self, Error> {
        let provider = WatsonxProvider::new(credentials)?;
        Ok(Self::new(provider, credentials.project_id.clone()))
    }
}

/// Restore the list prefix the prompt consumed and trim the raw output.
pub fn format_ideas(raw: &str) -> String {
    format!("{LIST_PREFIX}{}", raw.trim())
}

/// Brainstorm ideas for `topic` against watsonx.ai.
pub async fn generate_ideas(topic: &str, credentials: &Credentials) -> Result<String, Error> {
    IdeaGenerator::from_credentials(credentials)?
        .generate_ideas(topic)
        .await
}
