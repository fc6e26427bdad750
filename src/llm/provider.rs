use async_trait::async_trait;

use crate::core::errors::RagError;

/// Produces embedding vectors for chunks at index time and for queries at
/// search time. Both must go through the same provider so the vectors
/// share one space.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// return the provider name (e.g. "ollama")
    fn name(&self) -> &str;

    /// embed a single text into a vector
    async fn embed(&self, text: &str) -> Result<Vec<f32>, RagError>;
}

/// Synchronous request/response text completion. No streaming.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// return the provider name (e.g. "ollama")
    fn name(&self) -> &str;

    /// complete a prompt into answer text
    async fn complete(&self, prompt: &str) -> Result<String, RagError>;
}
