//! datadex-index
//!
//! Sparse TF-IDF vector space over chunk texts. Weights are log-scaled term
//! frequency times smoothed inverse chunk frequency; vectors are term-keyed
//! maps so memory tracks actual (term, chunk) occurrences, never vocabulary
//! size times chunk count.

use std::collections::HashMap;

use datadex_core::tokenizer::tokenize;

/// Sparse term-weight vector for one chunk or one query.
pub type TermVector = HashMap<String, f32>;

/// Everything learned from one pass over the chunk set.
///
/// `vectors` and `norms` are index-aligned with the chunk sequence the
/// space was built from. `idf` holds a strictly positive weight for every
/// term observed in at least one chunk.
#[derive(Debug, Default)]
pub struct VectorSpace {
    pub idf: HashMap<String, f32>,
    pub vectors: Vec<TermVector>,
    pub norms: Vec<f32>,
}

/// Build the TF-IDF model for `chunks` in one pass over their token counts.
///
/// `idf(term) = ln((N+1)/(df+1)) + 1` — smoothed so every observed term
/// keeps a positive weight, non-increasing as document frequency grows.
/// A chunk with no recognized tokens gets an empty vector and norm 1, so it
/// scores 0 against any real query without risking division by zero.
pub fn build_vector_space(chunks: &[String]) -> VectorSpace {
    let mut chunk_counts: Vec<HashMap<String, u32>> = Vec::with_capacity(chunks.len());
    let mut document_frequency: HashMap<String, u32> = HashMap::new();

    for chunk in chunks {
        let mut counts: HashMap<String, u32> = HashMap::new();
        for token in tokenize(chunk) {
            *counts.entry(token).or_insert(0) += 1;
        }
        // each chunk contributes at most once per term
        for term in counts.keys() {
            *document_frequency.entry(term.clone()).or_insert(0) += 1;
        }
        chunk_counts.push(counts);
    }

    let num_chunks = chunks.len() as f32;
    let idf: HashMap<String, f32> = document_frequency
        .into_iter()
        .map(|(term, df)| (term, ((num_chunks + 1.0) / (df as f32 + 1.0)).ln() + 1.0))
        .collect();

    let mut vectors = Vec::with_capacity(chunk_counts.len());
    let mut norms = Vec::with_capacity(chunk_counts.len());
    for counts in chunk_counts {
        let mut vector = TermVector::with_capacity(counts.len());
        let mut sum_squares = 0.0f32;
        for (term, count) in counts {
            let tf = 1.0 + (count as f32).ln();
            let weight = tf * idf.get(&term).copied().unwrap_or(0.0);
            sum_squares += weight * weight;
            vector.insert(term, weight);
        }
        vectors.push(vector);
        norms.push(if sum_squares > 0.0 { sum_squares.sqrt() } else { 1.0 });
    }

    VectorSpace { idf, vectors, norms }
}

/// Weight a query against a previously learned IDF table.
///
/// The table is never re-estimated from the query; terms it does not know
/// contribute zero weight and are omitted. An empty resulting vector gets
/// norm 1 by the same convention as chunks, so it matches nothing.
pub fn vectorize_query(query: &str, idf: &HashMap<String, f32>) -> (TermVector, f32) {
    let mut counts: HashMap<String, u32> = HashMap::new();
    for token in tokenize(query) {
        *counts.entry(token).or_insert(0) += 1;
    }

    let mut vector = TermVector::new();
    let mut sum_squares = 0.0f32;
    for (term, count) in counts {
        let tf = 1.0 + (count as f32).ln();
        let weight = tf * idf.get(&term).copied().unwrap_or(0.0);
        if weight > 0.0 {
            sum_squares += weight * weight;
            vector.insert(term, weight);
        }
    }
    let norm = if sum_squares > 0.0 { sum_squares.sqrt() } else { 1.0 };
    (vector, norm)
}
