//! Cosine scoring and top-K selection over a built vector space.

use std::cmp::Ordering;

use datadex_core::types::{ChunkMeta, SearchHit};

use crate::tfidf::{vectorize_query, TermVector, VectorSpace};

/// Cosine similarity of two sparse vectors with precomputed norms.
///
/// The dot product iterates the sparser side and probes the other, so the
/// cost is bounded by the smaller vector.
pub fn cosine_similarity(a: &TermVector, b: &TermVector, norm_a: f32, norm_b: f32) -> f32 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let mut dot = 0.0f32;
    for (term, weight) in small {
        if let Some(other) = large.get(term) {
            dot += weight * other;
        }
    }
    dot / (norm_a * norm_b)
}

/// Score `query` against every chunk and keep the best `top_k` matches.
///
/// The scan is exhaustive — every chunk is scored, nothing is pruned.
/// Results come back sorted by descending score, ties broken by ascending
/// chunk index so ranking is deterministic. Entries scoring <= 0 are never
/// matches and are dropped even when fewer than `top_k` remain.
pub fn rank_chunks(
    query: &str,
    space: &VectorSpace,
    chunks: &[String],
    meta: &[ChunkMeta],
    top_k: usize,
) -> Vec<SearchHit> {
    if chunks.is_empty() {
        return Vec::new();
    }
    let (query_vector, query_norm) = vectorize_query(query, &space.idf);

    let mut scored: Vec<(usize, f32)> = space
        .vectors
        .iter()
        .enumerate()
        .map(|(i, vector)| {
            (
                i,
                cosine_similarity(&query_vector, vector, query_norm, space.norms[i]),
            )
        })
        .collect();
    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });

    scored
        .into_iter()
        .take(top_k)
        .take_while(|(_, score)| *score > 0.0)
        .map(|(i, score)| SearchHit {
            text: chunks[i].clone(),
            score,
            meta: meta[i].clone(),
        })
        .collect()
}
