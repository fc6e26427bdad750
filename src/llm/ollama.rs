//! Ollama-backed model clients.
//!
//! Talks to a local Ollama server over its REST API: `/api/generate` for
//! text completion and `/api/embeddings` for vectors.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use super::provider::{EmbeddingProvider, LanguageModel};
use crate::core::errors::RagError;

#[derive(Clone)]
pub struct OllamaChatModel {
    base_url: String,
    model: String,
    client: Client,
}

impl OllamaChatModel {
    pub fn new(base_url: &str, model: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            client: Client::new(),
        }
    }

    /// check if the server is reachable
    pub async fn health_check(&self) -> bool {
        let url = format!("{}/api/tags", self.base_url);
        match self.client.get(&url).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }
}

#[async_trait]
impl LanguageModel for OllamaChatModel {
    fn name(&self) -> &str {
        "ollama"
    }

    async fn complete(&self, prompt: &str) -> Result<String, RagError> {
        let url = format!("{}/api/generate", self.base_url);

        let body = json!({
            "model": self.model,
            "prompt": prompt,
            "stream": false,
        });

        let res = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(RagError::model)?;

        if !res.status().is_success() {
            let text = res.text().await.unwrap_or_default();
            return Err(RagError::ModelUnavailable(format!(
                "chat error: {text}"
            )));
        }

        let payload: Value = res.json().await.map_err(RagError::model)?;
        Ok(payload["response"].as_str().unwrap_or_default().to_string())
    }
}

#[derive(Clone)]
pub struct OllamaEmbeddingModel {
    base_url: String,
    model: String,
    client: Client,
}

impl OllamaEmbeddingModel {
    pub fn new(base_url: &str, model: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl EmbeddingProvider for OllamaEmbeddingModel {
    fn name(&self) -> &str {
        "ollama"
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>, RagError> {
        let url = format!("{}/api/embeddings", self.base_url);

        let body = json!({
            "model": self.model,
            "prompt": text,
        });

        let res = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(RagError::embedding)?;

        if !res.status().is_success() {
            let text = res.text().await.unwrap_or_default();
            return Err(RagError::Embedding(format!("embed error: {text}")));
        }

        let payload: Value = res.json().await.map_err(RagError::embedding)?;

        let embedding: Vec<f32> = payload["embedding"]
            .as_array()
            .map(|vals| {
                vals.iter()
                    .filter_map(|v| v.as_f64().map(|f| f as f32))
                    .collect()
            })
            .unwrap_or_default();

        if embedding.is_empty() {
            return Err(RagError::Embedding(
                "server returned no embedding".to_string(),
            ));
        }

        Ok(embedding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let chat = OllamaChatModel::new("http://localhost:11434/", "llama3.1");
        assert_eq!(chat.base_url, "http://localhost:11434");

        let embed = OllamaEmbeddingModel::new("http://localhost:11434///", "nomic-embed-text");
        assert_eq!(embed.base_url, "http://localhost:11434");
    }
}
