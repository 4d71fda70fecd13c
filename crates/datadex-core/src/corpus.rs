//! Corpus enumeration and decoding.
//!
//! Walks a root directory for `.txt`/`.md`/`.json` files, decodes each one
//! to text, and emits ordered [`Document`]s for the index to chunk. The
//! sibling `README.md` of the root's parent directory is indexed too when
//! present, so the project introduction is searchable alongside the data.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::Result;
use crate::types::Document;

const INDEXED_EXTENSIONS: [&str; 3] = ["txt", "md", "json"];

pub struct CorpusLoader {
    root: PathBuf,
}

impl CorpusLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Enumerate and decode the whole corpus.
    ///
    /// A missing root is created empty and yields zero documents. A file
    /// that cannot be read is skipped with a warning. A traversal failure
    /// (unreadable directory, filesystem gone) aborts the load.
    pub fn load_documents(&self) -> Result<Vec<Document>> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
            debug!(root = %self.root.display(), "created empty corpus root");
            return Ok(Vec::new());
        }

        let mut files = self.list_corpus_files()?;
        if let Some(readme) = self.sibling_readme() {
            files.push(readme);
        }

        let mut documents = Vec::with_capacity(files.len());
        for path in files {
            let raw = match fs::read(&path) {
                Ok(bytes) => bytes,
                Err(err) => {
                    warn!(file = %path.display(), %err, "skipping unreadable corpus file");
                    continue;
                }
            };
            let mut text = String::from_utf8_lossy(&raw).into_owned();
            if has_extension(&path, "json") {
                text = decode_json(&text);
            }
            documents.push(Document {
                rel_path: self.relative_name(&path),
                text,
            });
        }
        Ok(documents)
    }

    fn list_corpus_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in walkdir::WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if INDEXED_EXTENSIONS.iter().any(|ext| has_extension(path, ext)) {
                files.push(path.to_path_buf());
            }
        }
        Ok(files)
    }

    /// `README.md` next to the corpus root, if any.
    fn sibling_readme(&self) -> Option<PathBuf> {
        let readme = self.root.parent()?.join("README.md");
        readme.exists().then_some(readme)
    }

    fn relative_name(&self, path: &Path) -> String {
        match path.strip_prefix(&self.root) {
            Ok(rel) => rel.display().to_string(),
            // The sibling README lives outside the root.
            Err(_) => format!(
                "../{}",
                path.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default()
            ),
        }
    }
}

fn has_extension(path: &Path, wanted: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(wanted))
}

/// Normalize `.json` content to indexable text.
///
/// A top-level JSON string is used verbatim; any other value is
/// re-serialized pretty so keys and values stay tokenizable. Content that
/// does not parse is indexed as the raw text it is.
fn decode_json(raw: &str) -> String {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::String(s)) => s,
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| raw.to_string()),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_string_is_used_verbatim() {
        assert_eq!(decode_json("\"plain text payload\""), "plain text payload");
    }

    #[test]
    fn json_structure_is_reserialized_readably() {
        let text = decode_json(r#"{"city":"Seattle","aqi":42}"#);
        assert!(text.contains("\"city\""));
        assert!(text.contains("Seattle"));
        assert!(text.contains("42"));
    }

    #[test]
    fn malformed_json_falls_back_to_raw_text() {
        let raw = "{not json at all";
        assert_eq!(decode_json(raw), raw);
    }
}
