pub mod ollama;
pub mod provider;

pub use ollama::{OllamaChatModel, OllamaEmbeddingModel};
pub use provider::{EmbeddingProvider, LanguageModel};
