//! Document loading.
//!
//! Dispatches on file extension to a format-specific text extractor and
//! splits the extracted text into fixed-size chunks tagged with the
//! source file name. Supported formats: plain text (`txt`, `md`), PDF,
//! CSV.

mod chunker;

pub use chunker::{chunk_text, Chunk, FILENAME_KEY};

use std::path::Path;

use tracing::debug;

use crate::core::errors::RagError;

/// A loaded document: raw text plus its source file name. Transient,
/// consumed by the chunker.
#[derive(Debug, Clone)]
pub struct Document {
    pub content: String,
    /// Base file name of the source, not its full path.
    pub source: String,
}

/// Loads files and splits them into chunks.
pub struct DocumentLoader {
    chunk_size: usize,
}

impl DocumentLoader {
    pub fn new(chunk_size: usize) -> Self {
        Self { chunk_size }
    }

    /// Load the file at `path` and split it into chunks.
    ///
    /// Reads the file only; no store or network access happens here.
    pub fn load(&self, path: &Path) -> Result<Vec<Chunk>, RagError> {
        let document = read_document(path)?;
        let chunks = chunk_text(&document.content, &document.source, self.chunk_size);
        debug!(
            source = %document.source,
            chunks = chunks.len(),
            "loaded document"
        );
        Ok(chunks)
    }
}

/// Read a file into a `Document`, dispatching on its extension.
pub fn read_document(path: &Path) -> Result<Document, RagError> {
    let source = path
        .file_name()
        .and_then(|v| v.to_str())
        .unwrap_or_default()
        .to_string();
    let extension = path
        .extension()
        .and_then(|v| v.to_str())
        .map(|v| v.to_lowercase())
        .unwrap_or_default();

    let content = match extension.as_str() {
        "txt" | "md" => std::fs::read_to_string(path).map_err(|e| RagError::io(&source, e))?,
        "pdf" => read_pdf(path, &source)?,
        "csv" => read_csv(path, &source)?,
        _ => return Err(RagError::UnsupportedFormat(path.display().to_string())),
    };

    Ok(Document { content, source })
}

/// Extract PDF text, pages concatenated in page order.
fn read_pdf(path: &Path, source: &str) -> Result<String, RagError> {
    pdf_extract::extract_text(path).map_err(|e| RagError::io(source, e))
}

/// Extract CSV content: each row's fields joined by `", "`, one row per
/// line, in file order.
fn read_csv(path: &Path, source: &str) -> Result<String, RagError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| RagError::io(source, e))?;

    let mut lines = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| RagError::io(source, e))?;
        lines.push(record.iter().collect::<Vec<&str>>().join(", "));
    }

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_plain_text_and_tags_filename() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "notes.txt", "hello world");

        let chunks = DocumentLoader::new(500).load(&path).unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "hello world");
        assert_eq!(chunks[0].filename(), Some("notes.txt"));
    }

    #[test]
    fn loaded_chunks_reconstruct_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let content = "abcdefghij".repeat(13);
        let path = write_file(&dir, "long.txt", &content);

        let chunks = DocumentLoader::new(7).load(&path).unwrap();
        let rebuilt: String = chunks.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(rebuilt, content);
    }

    #[test]
    fn empty_file_yields_no_chunks() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "empty.txt", "");

        let chunks = DocumentLoader::new(500).load(&path).unwrap();
        assert!(chunks.is_empty());
    }

    #[test]
    fn csv_rows_are_joined_with_comma_and_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "table.csv", "a,b,c\nd,e,f\n");

        let document = read_document(&path).unwrap();
        assert_eq!(document.content, "a, b, c\nd, e, f");
    }

    #[test]
    fn unknown_extension_is_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "image.png", "not text");

        let err = DocumentLoader::new(500).load(&path).unwrap_err();
        assert!(matches!(err, RagError::UnsupportedFormat(_)));
    }

    #[test]
    fn missing_file_reports_its_name() {
        let err = DocumentLoader::new(500)
            .load(Path::new("/nonexistent/ghost.txt"))
            .unwrap_err();
        match err {
            RagError::Io { file, .. } => assert_eq!(file, "ghost.txt"),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn extension_dispatch_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "NOTES.TXT", "shouting");

        let chunks = DocumentLoader::new(500).load(&path).unwrap();
        assert_eq!(chunks[0].text, "shouting");
    }
}
