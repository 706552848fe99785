//! Semantic expansion services: neighbor lookup and reranking.
//!
//! Both services are loaded once per run and injected into the pipeline
//! as read-only handles shared across workers.

pub mod embedding;
pub mod rerank;

pub use embedding::VectorStore;
pub use rerank::TrigramReranker;

use crate::core::errors::Result;
use crate::core::types::Neighbor;

/// Looks up words contextually close to a seed.
pub trait SemanticNeighborService: Send + Sync {
    /// Returns at most `top_k` neighbors scoring at least
    /// `min_similarity`, descending by score. An out-of-vocabulary word
    /// yields an empty list, not an error.
    fn neighbors(&self, word: &str, top_k: usize, min_similarity: f32) -> Result<Vec<Neighbor>>;
}

/// Re-scores a neighbor list against its seed.
///
/// May drop low-confidence entries; never grows the list.
pub trait RerankingService: Send + Sync {
    fn rerank(&self, seed: &str, candidates: Vec<Neighbor>) -> Result<Vec<Neighbor>>;
}
