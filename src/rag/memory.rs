//! In-memory vector store.
//!
//! Brute-force cosine similarity over an append-only record list, guarded
//! by a read-write lock (shared readers for search, exclusive writer for
//! insert). Suited to desktop-sized corpora; anything larger belongs in a
//! real vector database behind the `VectorStore` trait.

use std::cmp::Ordering;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::store::{ScoredChunk, VectorStore};
use crate::core::errors::RagError;
use crate::loader::Chunk;
use crate::vector_math::cosine_similarity;

/// A stored chunk with its embedding and store-assigned identifier.
#[derive(Debug, Clone)]
struct IndexedRecord {
    #[allow(dead_code)]
    id: String,
    chunk: Chunk,
    embedding: Vec<f32>,
}

pub struct MemoryVectorStore {
    records: RwLock<Vec<IndexedRecord>>,
}

impl MemoryVectorStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryVectorStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VectorStore for MemoryVectorStore {
    async fn insert_batch(&self, items: Vec<(Chunk, Vec<f32>)>) -> Result<(), RagError> {
        let mut records = self.records.write().await;
        for (chunk, embedding) in items {
            records.push(IndexedRecord {
                id: Uuid::new_v4().to_string(),
                chunk,
                embedding,
            });
        }
        Ok(())
    }

    async fn search(
        &self,
        query_embedding: &[f32],
        limit: usize,
    ) -> Result<Vec<ScoredChunk>, RagError> {
        let records = self.records.read().await;
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let mut scored = Vec::with_capacity(records.len());
        for record in records.iter() {
            let score = cosine_similarity(query_embedding, &record.embedding)?;
            scored.push(ScoredChunk {
                chunk: record.chunk.clone(),
                score,
            });
        }

        // stable sort: equal scores keep insertion order
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        scored.truncate(limit);

        Ok(scored)
    }

    async fn count(&self) -> Result<usize, RagError> {
        Ok(self.records.read().await.len())
    }

    async fn clear(&self) -> Result<(), RagError> {
        self.records.write().await.clear();
        Ok(())
    }
}
