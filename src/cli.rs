use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One word per line
    Plain,
    /// JSON object with count and words
    Json,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Plain => crate::io::output::OutputFormat::Plain,
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "wlexpand")]
#[command(about = "Wordlist expansion using semantic similarity and lexical mutation", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Input file or word(s) to expand (reads stdin if omitted)
    pub input: Vec<String>,

    /// Number of top similar words to consider for expansion (qty limit)
    #[arg(short = 'k', long, default_value = "5")]
    pub top_k: usize,

    /// Similarity threshold for word expansion (0.0 - 1.0, quality filter)
    #[arg(short = 's', long, default_value = "0.5")]
    pub similarity_threshold: f32,

    /// Number of mutation variants per word
    #[arg(short = 'n', long, default_value = "50")]
    pub num_words: usize,

    /// Enable case-sensitive word expansion
    #[arg(short = 'c', long)]
    pub case_sensitive: bool,

    /// Filter criteria for expanded words (e.g. 'length>5,starts-with=a')
    #[arg(short = 'f', long)]
    pub filter: Option<String>,

    /// Enable lexical mutations (leet-speak, typos, suffixes)
    #[arg(short = 'm', long)]
    pub mutate: bool,

    /// Enable lexical re-ranking of semantic candidates
    #[arg(short = 'r', long)]
    pub rerank: bool,

    /// Number of parallel workers (default: all CPU cores)
    #[arg(short = 'w', long, default_value = "0")]
    pub workers: usize,

    /// Output file for the expanded wordlist (defaults to stdout)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "plain")]
    pub format: OutputFormat,

    /// Word vector file in word2vec text format (semantic expansion is
    /// disabled when omitted)
    #[arg(long)]
    pub embeddings: Option<PathBuf>,

    /// Increase verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}
