//! Core types used throughout the library.

pub mod params;
pub mod prompt;
pub mod request;

// Re-export commonly used types
pub use params::*;
pub use prompt::*;
pub use request::*;
