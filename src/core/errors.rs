use thiserror::Error;

#[derive(Debug, Error)]
pub enum RagError {
    #[error("unsupported file type: {0}")]
    UnsupportedFormat(String),
    #[error("failed to load {file}: {message}")]
    Io { file: String, message: String },
    #[error("embedding failed: {0}")]
    Embedding(String),
    #[error("model unavailable: {0}")]
    ModelUnavailable(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl RagError {
    pub fn io<E: std::fmt::Display>(file: impl Into<String>, err: E) -> Self {
        RagError::Io {
            file: file.into(),
            message: err.to_string(),
        }
    }

    pub fn embedding<E: std::fmt::Display>(err: E) -> Self {
        RagError::Embedding(err.to_string())
    }

    pub fn model<E: std::fmt::Display>(err: E) -> Self {
        RagError::ModelUnavailable(err.to_string())
    }
}
