//! Candidate types flowing through the expansion pipeline

/// Where a candidate word came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateOrigin {
    /// The seed word itself
    Seed,
    /// Returned by the semantic neighbor service
    SemanticNeighbor,
    /// Produced by the mutation engine
    Mutation,
}

/// A candidate wordlist entry, tagged with its provenance.
///
/// `text` is never empty; the dedup stage treats an empty text as an
/// internal invariant violation.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub text: String,
    pub origin: CandidateOrigin,
    /// The word this candidate was derived from (the seed for neighbors,
    /// the mutated base word for mutations).
    pub source_word: String,
    pub score: Option<f32>,
}

impl Candidate {
    pub fn seed(word: &str) -> Self {
        Self {
            text: word.to_string(),
            origin: CandidateOrigin::Seed,
            source_word: word.to_string(),
            score: None,
        }
    }

    pub fn neighbor(word: &str, seed: &str, score: f32) -> Self {
        Self {
            text: word.to_string(),
            origin: CandidateOrigin::SemanticNeighbor,
            source_word: seed.to_string(),
            score: Some(score),
        }
    }

    pub fn mutation(text: String, source: &str) -> Self {
        Self {
            text,
            origin: CandidateOrigin::Mutation,
            source_word: source.to_string(),
            score: None,
        }
    }
}

/// A scored word exchanged with the semantic services
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    pub word: String,
    pub score: f32,
}

impl Neighbor {
    pub fn new(word: impl Into<String>, score: f32) -> Self {
        Self {
            word: word.into(),
            score,
        }
    }
}
