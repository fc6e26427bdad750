//! Fixed-size document chunking.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Metadata key carrying the source file name of a chunk.
pub const FILENAME_KEY: &str = "filename";

/// A bounded slice of a document's text, the unit of indexing and retrieval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    /// The text content.
    pub text: String,
    /// String metadata. Always carries `filename`; chunking adds
    /// `chunk_index` and `start_offset`.
    pub metadata: HashMap<String, String>,
}

impl Chunk {
    pub fn filename(&self) -> Option<&str> {
        self.metadata.get(FILENAME_KEY).map(String::as_str)
    }
}

/// Split `content` into chunks of at most `chunk_size` characters.
///
/// Windows are cut at character offsets with no overlap, so a document's
/// chunks concatenated in order reconstruct the content exactly. Cuts do
/// not respect word or sentence boundaries; the final chunk may be
/// shorter than `chunk_size`. Empty content yields no chunks.
pub fn chunk_text(content: &str, filename: &str, chunk_size: usize) -> Vec<Chunk> {
    let chunk_size = chunk_size.max(1);
    let chars: Vec<char> = content.chars().collect();
    let total = chars.len().div_ceil(chunk_size);

    let mut chunks = Vec::with_capacity(total);
    let mut start = 0;
    let mut chunk_index = 0;

    while start < chars.len() {
        let end = (start + chunk_size).min(chars.len());
        let text: String = chars[start..end].iter().collect();

        let mut metadata = HashMap::new();
        metadata.insert(FILENAME_KEY.to_string(), filename.to_string());
        metadata.insert("chunk_index".to_string(), chunk_index.to_string());
        metadata.insert("start_offset".to_string(), start.to_string());

        chunks.push(Chunk { text, metadata });
        start = end;
        chunk_index += 1;
    }

    chunks
}
