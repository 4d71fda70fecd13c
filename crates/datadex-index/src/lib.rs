pub mod index;
pub mod search;
pub mod tfidf;

pub use index::{DatasetIndex, DEFAULT_TOP_K};
pub use search::rank_chunks;
pub use tfidf::{build_vector_space, vectorize_query, VectorSpace};
