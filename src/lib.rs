//! Brainstorm ideas for a topic with IBM Granite models on watsonx.ai.
//!
//! Credentials come from `WATSONX_API_KEY` and `WATSONX_PROJECT_ID`. The
//! prompt asks for five ideas and ends on a "1." list marker; the model's
//! continuation is trimmed and the marker put back in front.

pub mod config;
pub mod error;
pub mod generator;
pub mod provider;
pub mod providers;
pub mod session;
pub mod types;

// Re-export core types for easy usage
pub use config::{load_credentials, Credentials};
pub use error::Error;
pub use generator::{format_ideas, generate_ideas, IdeaGenerator};
pub use provider::TextGenerator;
pub use providers::*;
pub use session::{run_session, Outcome};
pub use types::*;
