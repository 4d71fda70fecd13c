//! Domain types shared by the corpus loader and the index engine.

use serde::{Deserialize, Serialize};

/// One decoded source file, as emitted by the corpus loader.
///
/// - `rel_path`: path relative to the corpus root (the sibling README is
///   recorded with a `../` prefix)
/// - `text`: decoded content, post JSON normalization
#[derive(Debug, Clone)]
pub struct Document {
    pub rel_path: String,
    pub text: String,
}

/// Provenance of one indexed chunk: where it came from and how long it is.
///
/// Index-aligned with the chunk sequence held by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChunkMeta {
    pub file: String,
    pub length: usize,
}

/// One ranked search result. `score` is a cosine similarity in (0, 1];
/// non-positive scores are never returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub text: String,
    pub score: f32,
    pub meta: ChunkMeta,
}

/// Corpus-level counters reported by `stats()`.
///
/// Serializes camelCase so the HTTP layer can return it verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    pub files: Vec<String>,
    pub num_files: usize,
    pub num_chunks: usize,
    pub vocabulary_size: usize,
}
