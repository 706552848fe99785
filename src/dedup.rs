//! Dedup and collation: a merge-ordered candidate stream in, the final
//! sorted wordlist out.

use std::collections::HashSet;

use crate::config::PipelineConfig;
use crate::core::errors::{Error, Result};
use crate::core::types::Candidate;

/// Collapse the fixed-order candidate stream into the final wordlist.
///
/// The first candidate seen for a dedup key survives in its original
/// casing; later duplicates of that key are discarded. Survivors are
/// run through the filter expression, then sorted ascending by
/// codepoint. A candidate with empty text is an internal invariant
/// violation and fails the run loudly.
pub fn collate(candidates: &[Candidate], config: &PipelineConfig) -> Result<Vec<String>> {
    let mut seen: HashSet<String> = HashSet::with_capacity(candidates.len());
    let mut survivors: Vec<&str> = Vec::new();

    for candidate in candidates {
        if candidate.text.is_empty() {
            return Err(Error::invariant(format!(
                "empty candidate text reached dedup (source '{}')",
                candidate.source_word
            )));
        }
        let key = if config.case_sensitive_dedup {
            candidate.text.clone()
        } else {
            candidate.text.to_lowercase()
        };
        if seen.insert(key) {
            survivors.push(&candidate.text);
        }
    }

    let mut words: Vec<String> = survivors
        .into_iter()
        .filter(|word| config.filter.matches(word))
        .map(str::to_string)
        .collect();
    words.sort_unstable();
    Ok(words)
}
