//! Character-trigram reranker.
//!
//! Re-scores semantic neighbors by cosine similarity over character
//! trigram sets, blended with the embedding score. Candidates whose
//! blended score falls below the floor are dropped as noise.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::core::errors::Result;
use crate::core::types::Neighbor;
use crate::semantic::RerankingService;

/// Weight of the trigram score in the blend; the remainder stays with
/// the embedding score.
const DEFAULT_BLEND_WEIGHT: f32 = 0.3;

/// Blended scores below this are dropped
const DEFAULT_SCORE_FLOOR: f32 = 0.2;

pub struct TrigramReranker {
    weight: f32,
    floor: Option<f32>,
}

impl Default for TrigramReranker {
    fn default() -> Self {
        Self {
            weight: DEFAULT_BLEND_WEIGHT,
            floor: Some(DEFAULT_SCORE_FLOOR),
        }
    }
}

impl TrigramReranker {
    /// A reranker with an explicit blend weight and score floor.
    /// `floor: None` makes the pass order-only: membership is preserved.
    pub fn new(weight: f32, floor: Option<f32>) -> Self {
        Self { weight, floor }
    }
}

impl RerankingService for TrigramReranker {
    fn rerank(&self, seed: &str, candidates: Vec<Neighbor>) -> Result<Vec<Neighbor>> {
        let mut blended: Vec<Neighbor> = candidates
            .into_iter()
            .map(|neighbor| {
                let lexical = trigram_similarity(seed, &neighbor.word);
                Neighbor {
                    score: (1.0 - self.weight) * neighbor.score + self.weight * lexical,
                    word: neighbor.word,
                }
            })
            .collect();

        if let Some(floor) = self.floor {
            blended.retain(|neighbor| neighbor.score >= floor);
        }

        blended.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.word.cmp(&b.word))
        });
        Ok(blended)
    }
}

/// Cosine similarity between the trigram sets of two words
fn trigram_similarity(a: &str, b: &str) -> f32 {
    let left = trigrams(a);
    let right = trigrams(b);
    if left.is_empty() || right.is_empty() {
        return 0.0;
    }
    let shared = left.intersection(&right).count();
    shared as f32 / ((left.len() as f32).sqrt() * (right.len() as f32).sqrt())
}

/// Character trigrams of the lowercased word. Words shorter than three
/// characters contribute themselves as a single gram.
fn trigrams(word: &str) -> HashSet<String> {
    let chars: Vec<char> = word.to_lowercase().chars().collect();
    if chars.is_empty() {
        return HashSet::new();
    }
    if chars.len() < 3 {
        return std::iter::once(chars.iter().collect()).collect();
    }
    chars
        .windows(3)
        .map(|window| window.iter().collect())
        .collect()
}
