//! Retrieval-augmented answering.
//!
//! Searches the index for context relevant to a query and invokes the
//! language model with one of two prompt shapes: grounded in the
//! retrieved context, or falling back to the model's own knowledge when
//! nothing relevant is stored. The branch is a hard cutoff on result-set
//! emptiness; there is no partial-grounding mode.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;
use tracing::debug;

use super::indexer::Indexer;
use super::store::ScoredChunk;
use crate::core::config::RagConfig;
use crate::core::errors::RagError;
use crate::llm::LanguageModel;

/// Delimiter between context chunks in a grounded prompt.
const CONTEXT_DELIMITER: &str = "\n---\n";

pub struct Answerer {
    indexer: Arc<Indexer>,
    model: Arc<dyn LanguageModel>,
    config: RagConfig,
}

impl Answerer {
    pub fn new(indexer: Arc<Indexer>, model: Arc<dyn LanguageModel>, config: RagConfig) -> Self {
        Self {
            indexer,
            model,
            config,
        }
    }

    /// Answer `query`, grounded in retrieved context when any is relevant.
    ///
    /// Empty retrieval is not a failure; it selects the fallback prompt.
    /// Only model unavailability (including timeout) is an error.
    pub async fn ask(&self, query: &str) -> Result<String, RagError> {
        if query.trim().is_empty() {
            return Err(RagError::InvalidInput("query must not be empty".to_string()));
        }

        let results = self
            .indexer
            .search(query, self.config.top_k, self.config.similarity_threshold)
            .await?;

        let prompt = if results.is_empty() {
            debug!("no relevant context, answering from model knowledge");
            build_fallback_prompt(query)
        } else {
            debug!(chunks = results.len(), "answering with retrieved context");
            build_grounded_prompt(&results, query)
        };

        let call = self.model.complete(&prompt);
        match timeout(Duration::from_secs(self.config.model_timeout_secs), call).await {
            Ok(answer) => answer,
            Err(_) => Err(RagError::ModelUnavailable(format!(
                "model call exceeded {}s",
                self.config.model_timeout_secs
            ))),
        }
    }
}

fn build_grounded_prompt(results: &[ScoredChunk], query: &str) -> String {
    let context = results
        .iter()
        .map(|r| r.chunk.text.as_str())
        .collect::<Vec<&str>>()
        .join(CONTEXT_DELIMITER);

    format!(
        "You are a helpful AI assistant.\n\
         Use the following context to answer the question.\n\
         Context:\n\
         {context}\n\
         Question: {query}\n"
    )
}

fn build_fallback_prompt(query: &str) -> String {
    format!(
        "You are a helpful AI assistant.\n\
         Answer the following question using your own knowledge.\n\
         Question: {query}\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::Chunk;
    use std::collections::HashMap;

    fn scored(text: &str, score: f32) -> ScoredChunk {
        let mut metadata = HashMap::new();
        metadata.insert("filename".to_string(), "doc.txt".to_string());
        ScoredChunk {
            chunk: Chunk {
                text: text.to_string(),
                metadata,
            },
            score,
        }
    }

    #[test]
    fn grounded_prompt_contains_every_chunk_and_the_query() {
        let results = vec![scored("first chunk", 0.9), scored("second chunk", 0.5)];
        let prompt = build_grounded_prompt(&results, "what is this?");

        assert!(prompt.contains("first chunk\n---\nsecond chunk"));
        assert!(prompt.contains("what is this?"));
        assert!(prompt.contains("Use the following context"));
    }

    #[test]
    fn fallback_prompt_contains_only_the_query() {
        let prompt = build_fallback_prompt("what is this?");

        assert!(prompt.contains("what is this?"));
        assert!(prompt.contains("using your own knowledge"));
        assert!(!prompt.contains("Context:"));
    }

    #[test]
    fn single_chunk_prompt_has_no_delimiter() {
        let prompt = build_grounded_prompt(&[scored("only chunk", 0.9)], "q");
        assert!(prompt.contains("only chunk"));
        assert!(!prompt.contains(CONTEXT_DELIMITER));
    }
}
