//! Pipeline orchestrator: fans seed words across a worker pool and
//! reassembles per-seed output deterministically.
//!
//! One task processes one seed end-to-end. Per-seed results are
//! collected keyed by seed index and concatenated in input order, never
//! completion order, so the final wordlist is identical across runs
//! regardless of worker count or timing.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, warn};
use rayon::prelude::*;

use crate::config::PipelineConfig;
use crate::core::errors::{Error, Result};
use crate::core::types::{Candidate, Neighbor};
use crate::dedup;
use crate::mutate;
use crate::semantic::{RerankingService, SemanticNeighborService};

/// Cooperative cancellation handle shared with the worker pool.
///
/// Setting the flag stops seeds that have not started from producing
/// work; seeds already in flight finish normally, so partial output
/// stays well-formed.
#[derive(Clone, Debug, Default)]
pub struct AbortFlag(Arc<AtomicBool>);

impl AbortFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn abort(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_aborted(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

pub struct PipelineOrchestrator<'a> {
    config: &'a PipelineConfig,
    neighbor_service: Option<&'a dyn SemanticNeighborService>,
    reranker: Option<&'a dyn RerankingService>,
    abort: AbortFlag,
}

impl<'a> PipelineOrchestrator<'a> {
    pub fn new(
        config: &'a PipelineConfig,
        neighbor_service: Option<&'a dyn SemanticNeighborService>,
        reranker: Option<&'a dyn RerankingService>,
    ) -> Self {
        Self {
            config,
            neighbor_service,
            reranker,
            abort: AbortFlag::new(),
        }
    }

    pub fn with_abort(mut self, abort: AbortFlag) -> Self {
        self.abort = abort;
        self
    }

    /// Expand all seeds across the worker pool and collate the result.
    pub fn run(&self, seeds: &[String]) -> Result<Vec<String>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.worker_count)
            .build()
            .map_err(|e| Error::config(format!("failed to build worker pool: {e}")))?;

        debug!(
            "expanding {} seed(s) across {} worker(s)",
            seeds.len(),
            self.config.worker_count
        );

        // Indexed collect keeps per-seed output in seed order
        let per_seed: Vec<Vec<Candidate>> =
            pool.install(|| seeds.par_iter().map(|seed| self.expand_seed(seed)).collect());

        let merged: Vec<Candidate> = per_seed.into_iter().flatten().collect();
        dedup::collate(&merged, self.config)
    }

    /// Process one seed end-to-end: the seed candidate, its semantic
    /// neighbors, an optional rerank pass, and mutations of the seed and
    /// every retained neighbor. A service failure degrades this seed to
    /// "no neighbors" and the run continues.
    fn expand_seed(&self, seed: &str) -> Vec<Candidate> {
        if self.abort.is_aborted() {
            debug!("abort requested, skipping seed '{seed}'");
            return Vec::new();
        }

        let mut candidates = vec![Candidate::seed(seed)];

        let neighbors = self.lookup_neighbors(seed);
        let neighbors = self.rerank_neighbors(seed, neighbors);

        candidates.extend(
            neighbors
                .iter()
                .map(|n| Candidate::neighbor(&n.word, seed, n.score)),
        );

        if self.config.mutate_enabled {
            self.push_mutations(seed, &mut candidates);
            for neighbor in &neighbors {
                self.push_mutations(&neighbor.word, &mut candidates);
            }
        }

        candidates
    }

    fn lookup_neighbors(&self, seed: &str) -> Vec<Neighbor> {
        let Some(service) = self.neighbor_service else {
            return Vec::new();
        };
        match service.neighbors(seed, self.config.top_k, self.config.similarity_threshold) {
            Ok(neighbors) => neighbors,
            Err(e) => {
                warn!("semantic lookup failed for '{seed}': {e}; continuing without neighbors");
                Vec::new()
            }
        }
    }

    fn rerank_neighbors(&self, seed: &str, neighbors: Vec<Neighbor>) -> Vec<Neighbor> {
        let Some(reranker) = self.reranker else {
            return neighbors;
        };
        if neighbors.is_empty() {
            return neighbors;
        }
        match reranker.rerank(seed, neighbors.clone()) {
            Ok(reranked) => reranked,
            Err(e) => {
                warn!("rerank failed for '{seed}': {e}; keeping embedding order");
                neighbors
            }
        }
    }

    fn push_mutations(&self, base: &str, out: &mut Vec<Candidate>) {
        let variants = mutate::mutate(base, self.config.max_mutations_per_word);
        out.extend(
            variants
                .into_iter()
                .map(|text| Candidate::mutation(text, base)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::AtomicUsize;

    struct StaticNeighbors(HashMap<String, Vec<Neighbor>>);

    impl SemanticNeighborService for StaticNeighbors {
        fn neighbors(
            &self,
            word: &str,
            top_k: usize,
            min_similarity: f32,
        ) -> Result<Vec<Neighbor>> {
            Ok(self
                .0
                .get(word)
                .cloned()
                .unwrap_or_default()
                .into_iter()
                .filter(|n| n.score >= min_similarity)
                .take(top_k)
                .collect())
        }
    }

    struct FailingService(AtomicUsize);

    impl SemanticNeighborService for FailingService {
        fn neighbors(&self, word: &str, _: usize, _: f32) -> Result<Vec<Neighbor>> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Err(Error::service(word, "out of vocabulary"))
        }
    }

    fn admin_service() -> StaticNeighbors {
        let mut map = HashMap::new();
        map.insert(
            "admin".to_string(),
            vec![
                Neighbor::new("administrator", 0.8),
                Neighbor::new("root", 0.6),
            ],
        );
        StaticNeighbors(map)
    }

    fn config_with_workers(workers: usize) -> PipelineConfig {
        PipelineConfig {
            worker_count: workers,
            ..PipelineConfig::default()
        }
    }

    #[test]
    fn test_seed_with_neighbors_end_to_end() {
        let config = config_with_workers(2);
        let service = admin_service();
        let orchestrator = PipelineOrchestrator::new(&config, Some(&service), None);
        let result = orchestrator.run(&["admin".to_string()]).unwrap();
        assert_eq!(result, vec!["admin", "administrator", "root"]);
    }

    #[test]
    fn test_failing_service_degrades_to_bare_seed() {
        let config = config_with_workers(2);
        let service = FailingService(AtomicUsize::new(0));
        let orchestrator = PipelineOrchestrator::new(&config, Some(&service), None);
        let result = orchestrator
            .run(&["admin".to_string(), "root".to_string()])
            .unwrap();
        assert_eq!(result, vec!["admin", "root"]);
        assert_eq!(service.0.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_seed_casing_wins_over_later_neighbor_duplicate() {
        let mut map = HashMap::new();
        map.insert("Admin".to_string(), vec![Neighbor::new("ADMIN", 0.9)]);
        let service = StaticNeighbors(map);
        let config = config_with_workers(1);
        let orchestrator = PipelineOrchestrator::new(&config, Some(&service), None);
        let result = orchestrator.run(&["Admin".to_string()]).unwrap();
        assert_eq!(result, vec!["Admin"]);
    }

    #[test]
    fn test_abort_before_dispatch_yields_empty_result() {
        let config = config_with_workers(2);
        let service = admin_service();
        let abort = AbortFlag::new();
        abort.abort();
        let orchestrator =
            PipelineOrchestrator::new(&config, Some(&service), None).with_abort(abort);
        let result = orchestrator.run(&["admin".to_string()]).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_no_services_yields_deduped_seeds() {
        let config = config_with_workers(2);
        let orchestrator = PipelineOrchestrator::new(&config, None, None);
        let result = orchestrator
            .run(&["beta".to_string(), "Alpha".to_string(), "ALPHA".to_string()])
            .unwrap();
        assert_eq!(result, vec!["Alpha", "beta"]);
    }
}
