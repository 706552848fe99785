//! Word-vector store backing the semantic neighbor lookup.
//!
//! Loads a word2vec-style text file (optional `N D` header line, then
//! one `word f1 .. fD` row per line), unit-normalizes every vector at
//! load, and answers neighbor queries with a brute-force cosine scan of
//! the vocabulary.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};

use crate::core::errors::{Error, Result};
use crate::core::types::Neighbor;
use crate::semantic::SemanticNeighborService;

pub struct VectorStore {
    words: Vec<String>,
    vectors: Vec<Vec<f32>>,
    index: HashMap<String, usize>,
    dimensions: usize,
}

impl VectorStore {
    /// Load and normalize a vector file. Fails on unreadable files,
    /// malformed rows, inconsistent dimensions, and zero vectors.
    pub fn load(path: &Path) -> Result<VectorStore> {
        let file = File::open(path)
            .map_err(|e| Error::embedding(path, format!("cannot open file: {e}")))?;
        let reader = BufReader::new(file);

        let mut store = VectorStore {
            words: Vec::new(),
            vectors: Vec::new(),
            index: HashMap::new(),
            dimensions: 0,
        };

        for (line_no, line) in reader.lines().enumerate() {
            let line =
                line.map_err(|e| Error::embedding(path, format!("line {}: {e}", line_no + 1)))?;
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }
            if line_no == 0 && is_header(line) {
                continue;
            }
            store.push_row(path, line_no + 1, line)?;
        }

        if store.words.is_empty() {
            return Err(Error::embedding(path, "file contains no word vectors"));
        }

        info!(
            "loaded {} word vectors ({} dimensions) from {}",
            store.words.len(),
            store.dimensions,
            path.display()
        );
        Ok(store)
    }

    fn push_row(&mut self, path: &Path, line_no: usize, line: &str) -> Result<()> {
        let mut fields = line.split_whitespace();
        let word = fields
            .next()
            .ok_or_else(|| Error::embedding(path, format!("line {line_no}: missing word")))?;

        let mut vector = Vec::new();
        for field in fields {
            let value: f32 = field.parse().map_err(|_| {
                Error::embedding(path, format!("line {line_no}: non-numeric value '{field}'"))
            })?;
            vector.push(value);
        }

        if vector.is_empty() {
            return Err(Error::embedding(
                path,
                format!("line {line_no}: no vector values for '{word}'"),
            ));
        }
        if self.dimensions == 0 {
            self.dimensions = vector.len();
        } else if vector.len() != self.dimensions {
            return Err(Error::embedding(
                path,
                format!(
                    "line {line_no}: expected {} dimensions, found {}",
                    self.dimensions,
                    vector.len()
                ),
            ));
        }

        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm == 0.0 {
            return Err(Error::embedding(
                path,
                format!("line {line_no}: zero vector for '{word}'"),
            ));
        }
        for value in &mut vector {
            *value /= norm;
        }

        // First occurrence of a word wins
        if self.index.contains_key(word) {
            debug!("duplicate vector for '{word}' ignored (line {line_no})");
            return Ok(());
        }

        self.index.insert(word.to_string(), self.words.len());
        self.words.push(word.to_string());
        self.vectors.push(vector);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }
}

/// A header line is exactly two integer tokens: vocabulary size and
/// dimensionality.
fn is_header(line: &str) -> bool {
    let fields: Vec<&str> = line.split_whitespace().collect();
    fields.len() == 2 && fields.iter().all(|f| f.parse::<usize>().is_ok())
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

impl SemanticNeighborService for VectorStore {
    fn neighbors(&self, word: &str, top_k: usize, min_similarity: f32) -> Result<Vec<Neighbor>> {
        let Some(&query_index) = self.index.get(word) else {
            debug!("word not in vocabulary: '{word}'");
            return Ok(Vec::new());
        };
        if top_k == 0 {
            return Ok(Vec::new());
        }

        let query = &self.vectors[query_index];
        let mut scored: Vec<Neighbor> = self
            .words
            .iter()
            .zip(self.vectors.iter())
            .enumerate()
            .filter(|(i, _)| *i != query_index)
            .map(|(_, (other, vector))| Neighbor::new(other.clone(), dot(query, vector)))
            .collect();

        scored.sort_unstable_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.word.cmp(&b.word))
        });

        // Fetch more than needed, filter by threshold, then truncate
        scored.truncate(top_k * 3);
        scored.retain(|n| n.score >= min_similarity);
        scored.truncate(top_k);
        Ok(scored)
    }
}
