//! Provider implementations for text generation services.

pub mod watsonx;

// Re-export commonly used provider types
pub use watsonx::WatsonxProvider;
