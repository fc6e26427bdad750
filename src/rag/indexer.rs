//! Indexing and retrieval over a vector store.

use std::sync::Arc;

use tracing::debug;

use super::store::{ScoredChunk, VectorStore};
use crate::core::errors::RagError;
use crate::llm::EmbeddingProvider;
use crate::loader::Chunk;

/// Embeds chunks and queries with one provider and mediates access to the
/// vector store, so both sides of a search share the same vector space.
pub struct Indexer {
    store: Arc<dyn VectorStore>,
    embedder: Arc<dyn EmbeddingProvider>,
}

impl Indexer {
    pub fn new(store: Arc<dyn VectorStore>, embedder: Arc<dyn EmbeddingProvider>) -> Self {
        Self { store, embedder }
    }

    /// Embed `chunks` and append them to the store.
    ///
    /// Every chunk is embedded before the store is touched, so an
    /// embedding failure leaves the store exactly as it was. Indexing is
    /// additive: re-indexing the same content produces duplicate records.
    pub async fn index(&self, chunks: Vec<Chunk>) -> Result<(), RagError> {
        if chunks.is_empty() {
            return Ok(());
        }

        let mut items = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            let embedding = self.embedder.embed(&chunk.text).await?;
            items.push((chunk, embedding));
        }

        let inserted = items.len();
        self.store.insert_batch(items).await?;
        debug!(chunks = inserted, "indexed chunks");
        Ok(())
    }

    /// Return the top `k` stored chunks with similarity to `query` at or
    /// above `min_similarity`, descending by similarity.
    ///
    /// An empty store, or no record clearing the floor, yields an empty
    /// result rather than an error.
    pub async fn search(
        &self,
        query: &str,
        k: usize,
        min_similarity: f32,
    ) -> Result<Vec<ScoredChunk>, RagError> {
        let query_embedding = self.embedder.embed(query).await?;
        let results = self.store.search(&query_embedding, k).await?;
        Ok(results
            .into_iter()
            .filter(|r| r.score >= min_similarity)
            .collect())
    }
}
