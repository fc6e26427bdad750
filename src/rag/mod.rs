//! RAG (Retrieval-Augmented Generation) module.
//!
//! This module provides:
//! - `Indexer`: embeds chunks and mediates access to the vector store
//! - `Answerer`: retrieval, grounded/ungrounded prompt selection, model calls
//! - `VectorStore`: abstract store interface, with the bundled `MemoryVectorStore`

mod answerer;
mod indexer;
mod memory;
mod store;

pub use answerer::Answerer;
pub use indexer::Indexer;
pub use memory::MemoryVectorStore;
pub use store::{ScoredChunk, VectorStore};
