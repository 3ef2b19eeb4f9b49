use crate::{Error, GenerationRequest};

/// A backend that turns a prompt into generated text.
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// Run one generation and return the raw generated text.
    async fn generate_text(&self, request: &GenerationRequest) -> Result<String, Error>;
}

#[async_trait::async_trait]
impl<T: TextGenerator + ?Sized> TextGenerator for &T {
    async fn generate_text(&self, request: &GenerationRequest) -> Result<String, Error> {
        (**self).generate_text(request).await
    }
}
