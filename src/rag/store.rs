//! VectorStore trait — abstract interface for similarity-searchable storage.
//!
//! Provides a clean abstraction over vector stores for the RAG pipeline.
//! The bundled implementation is `MemoryVectorStore` in the `memory`
//! module.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::errors::RagError;
use crate::loader::Chunk;

/// Result of a similarity search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredChunk {
    pub chunk: Chunk,
    /// Similarity score (higher = better).
    pub score: f32,
}

/// Abstract trait for similarity-searchable chunk storage.
///
/// Implementations persist (chunk, embedding) pairs and support append
/// and top-K nearest-neighbor search. Appends are all-or-nothing per
/// batch, and reads stay consistent while a batch is being appended.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Append chunks with their embedding vectors. The store assigns each
    /// record an internal identifier; existing records are never updated.
    async fn insert_batch(&self, items: Vec<(Chunk, Vec<f32>)>) -> Result<(), RagError>;

    /// Return the `limit` stored chunks most similar to `query_embedding`,
    /// descending by similarity. Ties keep insertion order. An empty
    /// store yields an empty result.
    async fn search(
        &self,
        query_embedding: &[f32],
        limit: usize,
    ) -> Result<Vec<ScoredChunk>, RagError>;

    /// Total number of stored records.
    async fn count(&self) -> Result<usize, RagError>;

    /// Remove every stored record.
    async fn clear(&self) -> Result<(), RagError>;
}
