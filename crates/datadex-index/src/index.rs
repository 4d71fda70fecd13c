//! The dataset index: load-time orchestration and the snapshot it owns.

use std::path::PathBuf;

use tracing::{debug, info};

use datadex_core::chunker::{chunk_text, MAX_CHARS, OVERLAP_CHARS};
use datadex_core::corpus::CorpusLoader;
use datadex_core::error::Result;
use datadex_core::types::{ChunkMeta, IndexStats, SearchHit};

use crate::search::rank_chunks;
use crate::tfidf::{build_vector_space, VectorSpace};

/// Default result count for consumers that do not pass their own.
/// The HTTP layer clamps caller-supplied values to 1..=8.
pub const DEFAULT_TOP_K: usize = 4;

/// Everything derived from one corpus read.
///
/// `chunks`, `meta`, and the space's `vectors`/`norms` are parallel
/// sequences; index `i` refers to the same chunk in all of them. A snapshot
/// is built wholesale and never patched in place.
#[derive(Default)]
struct Snapshot {
    files: Vec<String>,
    chunks: Vec<String>,
    meta: Vec<ChunkMeta>,
    space: VectorSpace,
}

/// In-process lexical retrieval over a directory of dataset files.
///
/// `load()` is a full rebuild: corpus read, chunking, and TF-IDF model all
/// happen off to the side, and the finished snapshot is published with one
/// assignment. A failed load leaves the previous snapshot authoritative.
/// Readers (`search`, `stats`) only ever see a complete snapshot; callers
/// wanting parallel reads put the index behind their own lock.
pub struct DatasetIndex {
    root: PathBuf,
    snapshot: Snapshot,
}

impl DatasetIndex {
    /// An index with an empty snapshot; does no I/O until `load()`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            snapshot: Snapshot::default(),
        }
    }

    /// Rebuild the snapshot from the corpus on disk.
    pub fn load(&mut self) -> Result<()> {
        let documents = CorpusLoader::new(&self.root).load_documents()?;

        let mut files = Vec::with_capacity(documents.len());
        let mut chunks = Vec::new();
        let mut meta = Vec::new();
        for document in &documents {
            files.push(document.rel_path.clone());
            for chunk in chunk_text(&document.text, MAX_CHARS, OVERLAP_CHARS) {
                meta.push(ChunkMeta {
                    file: document.rel_path.clone(),
                    length: chunk.chars().count(),
                });
                chunks.push(chunk);
            }
        }

        let space = build_vector_space(&chunks);
        debug!(
            files = files.len(),
            chunks = chunks.len(),
            vocabulary = space.idf.len(),
            "vector space rebuilt"
        );

        // Publish: a single assignment swaps in the fully built snapshot.
        self.snapshot = Snapshot {
            files,
            chunks,
            meta,
            space,
        };
        info!(
            root = %self.root.display(),
            files = self.snapshot.files.len(),
            chunks = self.snapshot.chunks.len(),
            "dataset index loaded"
        );
        Ok(())
    }

    /// Rank chunks against `query`, best first. Empty corpus means no hits.
    pub fn search(&self, query: &str, top_k: usize) -> Vec<SearchHit> {
        let snapshot = &self.snapshot;
        rank_chunks(query, &snapshot.space, &snapshot.chunks, &snapshot.meta, top_k)
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            files: self.snapshot.files.clone(),
            num_files: self.snapshot.files.len(),
            num_chunks: self.snapshot.chunks.len(),
            vocabulary_size: self.snapshot.space.idf.len(),
        }
    }
}
