use serde::Serialize;

/// Next-token selection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodingMethod {
    Sample,
}

/// Sampling controls sent with every generation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationParameters {
    pub decoding_method: DecodingMethod,
    pub max_new_tokens: u32,
    pub min_new_tokens: u32,
    pub temperature: f64,
    pub top_k: u32,
    pub top_p: f64,
    pub repetition_penalty: f64,
}

impl GenerationParameters {
    /// The fixed parameter set used for brainstorming.
    ///
    /// Sampling at a fairly high temperature, with a light repetition
    /// penalty so the five ideas don't echo each other.
    pub fn creative() -> Self {
        Self {
            decoding_method: DecodingMethod::Sample,
            max_new_tokens: 250,
            min_new_tokens: 10,
            temperature: 0.8,
            top_k: 50,
            top_p: 1.0,
            repetition_penalty: 1.05,
        }
    }
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self::creative()
    }
}
