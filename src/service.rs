//! UI-facing service facade.
//!
//! Wires the loader, indexer, and answerer together with explicit
//! construction: every collaborator arrives through the constructor, no
//! process-wide registry. The surrounding UI layer hands this service
//! file paths and queries and renders the returned strings; every entry
//! point is async so no caller thread is blocked.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::core::config::RagConfig;
use crate::core::errors::RagError;
use crate::llm::{EmbeddingProvider, LanguageModel, OllamaChatModel, OllamaEmbeddingModel};
use crate::loader::{Chunk, DocumentLoader};
use crate::rag::{Answerer, Indexer, MemoryVectorStore, VectorStore};

pub struct RagService {
    loader: DocumentLoader,
    indexer: Arc<Indexer>,
    answerer: Answerer,
}

impl RagService {
    /// Build a service from explicit collaborators.
    pub fn new(
        config: RagConfig,
        store: Arc<dyn VectorStore>,
        embedder: Arc<dyn EmbeddingProvider>,
        model: Arc<dyn LanguageModel>,
    ) -> Result<Self, RagError> {
        config.validate()?;

        let loader = DocumentLoader::new(config.chunk_size);
        let indexer = Arc::new(Indexer::new(store, embedder));
        let answerer = Answerer::new(indexer.clone(), model, config);

        Ok(Self {
            loader,
            indexer,
            answerer,
        })
    }

    /// Build a service against a local Ollama server with the bundled
    /// in-memory store.
    pub fn with_ollama(config: RagConfig) -> Result<Self, RagError> {
        let store = Arc::new(MemoryVectorStore::new());
        let embedder = Arc::new(OllamaEmbeddingModel::new(
            &config.ollama_base_url,
            &config.embedding_model,
        ));
        let model = Arc::new(OllamaChatModel::new(
            &config.ollama_base_url,
            &config.chat_model,
        ));
        Self::new(config, store, embedder, model)
    }

    /// Load the document at `path` and split it into chunks.
    pub fn load(&self, path: &Path) -> Result<Vec<Chunk>, RagError> {
        self.loader.load(path)
    }

    /// Embed `chunks` and append them to the store.
    pub async fn index(&self, chunks: Vec<Chunk>) -> Result<(), RagError> {
        self.indexer.index(chunks).await
    }

    /// Load and index a document in one step. Returns the number of
    /// chunks indexed.
    pub async fn ingest(&self, path: &Path) -> Result<usize, RagError> {
        let chunks = self.load(path)?;
        let count = chunks.len();
        self.indexer.index(chunks).await?;
        info!(file = %path.display(), chunks = count, "ingested document");
        Ok(count)
    }

    /// Answer `query`, grounded in indexed context when any is relevant.
    pub async fn ask(&self, query: &str) -> Result<String, RagError> {
        self.answerer.ask(query).await
    }
}
