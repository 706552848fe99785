//! Wiring for an expansion run: config construction, service loading,
//! pipeline execution, output.

use std::fs::File;
use std::io;

use anyhow::{bail, Context, Result};
use log::info;

use crate::cli::Cli;
use crate::config::{resolve_worker_count, PipelineConfig};
use crate::filter::FilterExpression;
use crate::io::{input, output};
use crate::pipeline::PipelineOrchestrator;
use crate::semantic::{RerankingService, SemanticNeighborService, TrigramReranker, VectorStore};

pub fn run(cli: Cli) -> Result<()> {
    let config = build_config(&cli)?;
    config.validate()?;

    let seeds = input::collect_seeds(&cli.input)?;
    if seeds.is_empty() {
        bail!("no seed words given (pass words, seed files, or pipe stdin)");
    }
    info!("expanding {} seed word(s)", seeds.len());

    // Services are loaded once and shared read-only across workers
    let store = match &cli.embeddings {
        Some(path) => Some(
            VectorStore::load(path)
                .with_context(|| format!("loading embeddings from {}", path.display()))?,
        ),
        None => {
            info!("no embeddings file given; semantic expansion disabled");
            None
        }
    };
    let reranker = config.rerank_enabled.then(TrigramReranker::default);

    let neighbor_service = store.as_ref().map(|s| s as &dyn SemanticNeighborService);
    let rerank_service = reranker.as_ref().map(|r| r as &dyn RerankingService);

    let orchestrator = PipelineOrchestrator::new(&config, neighbor_service, rerank_service);
    let words = orchestrator.run(&seeds)?;
    info!("final wordlist: {} word(s)", words.len());

    write_output(&cli, &words)
}

fn build_config(cli: &Cli) -> Result<PipelineConfig> {
    let filter = match cli.filter.as_deref() {
        Some(rule_string) => FilterExpression::compile(rule_string)?,
        None => FilterExpression::default(),
    };
    Ok(PipelineConfig {
        top_k: cli.top_k,
        similarity_threshold: cli.similarity_threshold,
        max_mutations_per_word: cli.num_words,
        case_sensitive_dedup: cli.case_sensitive,
        filter,
        mutate_enabled: cli.mutate,
        rerank_enabled: cli.rerank,
        worker_count: resolve_worker_count(cli.workers),
    })
}

fn write_output(cli: &Cli, words: &[String]) -> Result<()> {
    let format = output::OutputFormat::from(cli.format);
    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating output file {}", path.display()))?;
            output::create_writer(format, file).write_words(words)?;
            info!("written to {}", path.display());
        }
        None => {
            output::create_writer(format, io::stdout().lock()).write_words(words)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_build_config_maps_flags() {
        let cli = Cli::parse_from([
            "wlexpand", "-k", "7", "-s", "0.4", "-n", "20", "-c", "-m", "-w", "3", "admin",
        ]);
        let config = build_config(&cli).unwrap();
        assert_eq!(config.top_k, 7);
        assert_eq!(config.similarity_threshold, 0.4);
        assert_eq!(config.max_mutations_per_word, 20);
        assert!(config.case_sensitive_dedup);
        assert!(config.mutate_enabled);
        assert!(!config.rerank_enabled);
        assert_eq!(config.worker_count, 3);
        assert!(config.filter.is_empty());
    }

    #[test]
    fn test_build_config_compiles_filter() {
        let cli = Cli::parse_from(["wlexpand", "-f", "length>4", "admin"]);
        let config = build_config(&cli).unwrap();
        assert!(!config.filter.is_empty());
    }

    #[test]
    fn test_build_config_rejects_malformed_filter() {
        let cli = Cli::parse_from(["wlexpand", "-f", "width>4", "admin"]);
        assert!(build_config(&cli).is_err());
    }
}
