//! IBM watsonx.ai provider implementation.

pub mod client;
pub mod types;

pub use client::WatsonxProvider;
