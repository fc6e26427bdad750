//! Pipeline configuration.
//!
//! The accuracy knobs of the pipeline (chunk size, retrieval depth,
//! similarity floor) live here as named fields instead of inline
//! constants, together with the endpoints of the local model server.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::errors::RagError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RagConfig {
    /// Maximum chunk size in characters.
    pub chunk_size: usize,
    /// Number of chunks retrieved per query.
    pub top_k: usize,
    /// Minimum cosine similarity for a retrieved chunk to count as relevant.
    pub similarity_threshold: f32,
    /// Timeout for a single language-model call in seconds.
    pub model_timeout_secs: u64,
    /// Base URL of the local model server.
    pub ollama_base_url: String,
    /// Chat model name.
    pub chat_model: String,
    /// Embedding model name.
    pub embedding_model: String,
}

impl Default for RagConfig {
    fn default() -> Self {
        Self {
            chunk_size: 500,
            top_k: 3,
            similarity_threshold: 0.2,
            model_timeout_secs: 120,
            ollama_base_url: "http://127.0.0.1:11434".to_string(),
            chat_model: "llama3.1".to_string(),
            embedding_model: "nomic-embed-text".to_string(),
        }
    }
}

impl RagConfig {
    /// Load a configuration from a YAML file. Missing fields fall back to
    /// their defaults.
    pub fn from_file(path: &Path) -> Result<Self, RagError> {
        let file = path.display().to_string();
        let contents = std::fs::read_to_string(path).map_err(|e| RagError::io(&file, e))?;
        let config: RagConfig =
            serde_yaml::from_str(&contents).map_err(|e| RagError::io(&file, e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), RagError> {
        if self.chunk_size == 0 {
            return Err(RagError::InvalidInput(
                "chunk_size must be at least 1".to_string(),
            ));
        }
        if self.top_k == 0 {
            return Err(RagError::InvalidInput(
                "top_k must be at least 1".to_string(),
            ));
        }
        if !(-1.0..=1.0).contains(&self.similarity_threshold) {
            return Err(RagError::InvalidInput(format!(
                "similarity_threshold must be within [-1, 1], got {}",
                self.similarity_threshold
            )));
        }
        if self.model_timeout_secs == 0 {
            return Err(RagError::InvalidInput(
                "model_timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let config = RagConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.chunk_size, 500);
        assert_eq!(config.top_k, 3);
        assert!((config.similarity_threshold - 0.2).abs() < f32::EPSILON);
    }

    #[test]
    fn validate_rejects_zero_chunk_size() {
        let config = RagConfig {
            chunk_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(RagError::InvalidInput(_))
        ));
    }

    #[test]
    fn validate_rejects_out_of_range_threshold() {
        let config = RagConfig {
            similarity_threshold: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn from_file_merges_partial_yaml_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "chunk_size: 100\ntop_k: 5").unwrap();

        let config = RagConfig::from_file(file.path()).unwrap();
        assert_eq!(config.chunk_size, 100);
        assert_eq!(config.top_k, 5);
        assert!((config.similarity_threshold - 0.2).abs() < f32::EPSILON);
    }

    #[test]
    fn from_file_reports_missing_file() {
        let err = RagConfig::from_file(Path::new("/nonexistent/config.yml")).unwrap_err();
        assert!(matches!(err, RagError::Io { .. }));
    }
}
