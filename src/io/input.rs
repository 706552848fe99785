//! Seed word sources: positional words, seed files, piped stdin.

use std::fs;
use std::io::{self, BufRead, IsTerminal};
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

/// Collect seed words from positional inputs.
///
/// An input naming an existing file is read one word per line; anything
/// else is taken as a literal word. With no inputs and piped stdin,
/// seeds come from stdin. Lines are trimmed, blank lines skipped, and
/// no dedup happens here.
pub fn collect_seeds(inputs: &[String]) -> Result<Vec<String>> {
    if inputs.is_empty() {
        return read_stdin_seeds();
    }

    let mut seeds = Vec::new();
    for input in inputs {
        let path = Path::new(input);
        if path.is_file() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("reading seed file {}", path.display()))?;
            let before = seeds.len();
            seeds.extend(non_blank_lines(&content));
            debug!("read {} seed(s) from '{input}'", seeds.len() - before);
        } else {
            let word = input.trim();
            if !word.is_empty() {
                seeds.push(word.to_string());
            }
        }
    }
    Ok(seeds)
}

fn read_stdin_seeds() -> Result<Vec<String>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(Vec::new());
    }

    let mut seeds = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("reading seeds from stdin")?;
        let word = line.trim();
        if !word.is_empty() {
            seeds.push(word.to_string());
        }
    }
    Ok(seeds)
}

fn non_blank_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_literal_words_pass_through() {
        let seeds = collect_seeds(&["admin".to_string(), "root".to_string()]).unwrap();
        assert_eq!(seeds, vec!["admin", "root"]);
    }

    #[test]
    fn test_file_inputs_read_one_word_per_line() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"password\n\n  letmein  \n").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let seeds = collect_seeds(&[path]).unwrap();
        assert_eq!(seeds, vec!["password", "letmein"]);
    }

    #[test]
    fn test_files_and_words_can_mix() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"alpha\n").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let seeds = collect_seeds(&["admin".to_string(), path]).unwrap();
        assert_eq!(seeds, vec!["admin", "alpha"]);
    }

    #[test]
    fn test_no_dedup_at_the_source() {
        let seeds = collect_seeds(&["admin".to_string(), "admin".to_string()]).unwrap();
        assert_eq!(seeds, vec!["admin", "admin"]);
    }

    #[test]
    fn test_blank_literal_inputs_are_skipped() {
        let seeds = collect_seeds(&["  ".to_string(), "admin".to_string()]).unwrap();
        assert_eq!(seeds, vec!["admin"]);
    }
}
