//! Document-chat RAG core.
//!
//! Loads documents, splits them into fixed-size chunks, indexes them in a
//! similarity-searchable store, and answers queries with a language model
//! grounded in retrieved context, falling back to the model's own
//! knowledge when nothing relevant is stored.
//!
//! ```text
//! path  -> DocumentLoader -> chunks -> Indexer -> store
//! query -> Answerer -> Indexer.search -> grounded / fallback prompt -> model
//! ```
//!
//! The surrounding desktop UI supplies file paths and queries and renders
//! the returned strings; it is wired up through [`service::RagService`].

pub mod core;
pub mod llm;
pub mod loader;
pub mod logging;
pub mod rag;
pub mod service;
pub mod vector_math;

pub use crate::core::config::RagConfig;
pub use crate::core::errors::RagError;
pub use service::RagService;
