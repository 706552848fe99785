//! Immutable per-run pipeline configuration

use crate::core::errors::{Error, Result};
use crate::filter::FilterExpression;

/// Configuration for one expansion run. Built once before dispatch and
/// shared read-only with every worker.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Neighbors requested per seed from the semantic service
    pub top_k: usize,
    /// Minimum similarity score a neighbor must carry, 0.0..=1.0
    pub similarity_threshold: f32,
    /// Mutation variants allowed per source word
    pub max_mutations_per_word: usize,
    /// Dedup on exact text instead of the lowercased key
    pub case_sensitive_dedup: bool,
    /// Compiled filter applied to dedup survivors
    pub filter: FilterExpression,
    pub mutate_enabled: bool,
    pub rerank_enabled: bool,
    /// Worker pool size; always >= 1 after resolution
    pub worker_count: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            top_k: 5,
            similarity_threshold: 0.5,
            max_mutations_per_word: 50,
            case_sensitive_dedup: false,
            filter: FilterExpression::default(),
            mutate_enabled: false,
            rerank_enabled: false,
            worker_count: resolve_worker_count(0),
        }
    }
}

impl PipelineConfig {
    /// Reject configurations that would fail mid-run.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(Error::config(format!(
                "similarity threshold must be within 0.0..=1.0, got {}",
                self.similarity_threshold
            )));
        }
        if self.worker_count == 0 {
            return Err(Error::config("worker count must be at least 1"));
        }
        Ok(())
    }
}

/// Resolve the requested worker count; 0 means host parallelism.
pub fn resolve_worker_count(workers: usize) -> usize {
    if workers == 0 {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4)
    } else {
        workers
    }
}
