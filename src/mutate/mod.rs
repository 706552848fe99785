//! Lexical mutation engine.
//!
//! Expands a base word into deterministic variants across five
//! independent rule families: leet-speak substitution, case variants,
//! common suffixes, common prefixes, and keyboard-adjacency typos.
//! Families run over the base word only and are never chained onto
//! each other's output, which keeps the search space bounded.

mod tables;

use std::collections::HashSet;

use tables::{year_suffixes, COMMON_PREFIXES, COMMON_SUFFIXES, KEYBOARD_ADJACENT, LEET_MAP};

/// Most positions substituted at once by the leet family
const MAX_LEET_POSITIONS: usize = 3;

/// Hard cap on the leet family's own output
const LEET_FAMILY_CAP: usize = 500;

/// Closed catalog of mutation rule families, in application priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationRule {
    Leet,
    Case,
    Suffix,
    Prefix,
    Typo,
}

impl MutationRule {
    /// Fixed priority order used to fill the variant budget. When the
    /// budget runs out mid-family, the family's internally-ordered
    /// output is truncated, never reordered.
    pub const PRIORITY: [MutationRule; 5] = [
        MutationRule::Leet,
        MutationRule::Case,
        MutationRule::Suffix,
        MutationRule::Prefix,
        MutationRule::Typo,
    ];

    fn apply(self, word: &str) -> Vec<String> {
        match self {
            MutationRule::Leet => leet_variants(word),
            MutationRule::Case => case_variants(word),
            MutationRule::Suffix => suffix_variants(word),
            MutationRule::Prefix => prefix_variants(word),
            MutationRule::Typo => typo_variants(word),
        }
    }
}

/// Generate at most `max_variants` mutations of `word`.
///
/// The output is deterministic, contains no duplicates, and never
/// re-emits `word` itself.
pub fn mutate(word: &str, max_variants: usize) -> Vec<String> {
    if word.is_empty() || max_variants == 0 {
        return Vec::new();
    }

    let mut seen: HashSet<String> = HashSet::new();
    seen.insert(word.to_string());
    let mut variants: Vec<String> = Vec::new();

    'families: for rule in MutationRule::PRIORITY {
        for variant in rule.apply(word) {
            if variants.len() == max_variants {
                break 'families;
            }
            if seen.insert(variant.clone()) {
                variants.push(variant);
            }
        }
    }

    debug_assert!(variants.len() <= max_variants);
    variants
}

/// Leet substitutions over the lowercased word, in increasing
/// substitution cardinality so truncation keeps the simplest variants.
fn leet_variants(word: &str) -> Vec<String> {
    let lower: Vec<char> = word.to_lowercase().chars().collect();
    let slots: Vec<(usize, &'static [char])> = lower
        .iter()
        .enumerate()
        .filter_map(|(i, c)| LEET_MAP.get(c).map(|options| (i, *options)))
        .collect();

    if slots.is_empty() {
        return Vec::new();
    }

    let mut variants = Vec::new();
    for cardinality in 1..=MAX_LEET_POSITIONS.min(slots.len()) {
        for combo in combinations(&slots, cardinality) {
            let options: Vec<&'static [char]> = combo.iter().map(|&(_, opts)| opts).collect();
            for choice in cartesian_product(&options) {
                let mut chars = lower.clone();
                for (&(pos, _), &replacement) in combo.iter().zip(choice.iter()) {
                    chars[pos] = replacement;
                }
                variants.push(chars.iter().collect());
                if variants.len() >= LEET_FAMILY_CAP {
                    return variants;
                }
            }
        }
    }
    variants
}

/// Exactly {lowercase, UPPERCASE, Titlecase, aLtErNaTiNg}, minus any
/// variant equal to the original.
fn case_variants(word: &str) -> Vec<String> {
    [
        word.to_lowercase(),
        word.to_uppercase(),
        titlecase(word),
        alternating_case(word),
    ]
    .into_iter()
    .filter(|variant| variant != word)
    .collect()
}

fn titlecase(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        for c in chars {
            out.extend(c.to_lowercase());
        }
    }
    out
}

fn alternating_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    for (i, c) in word.chars().enumerate() {
        if i % 2 == 0 {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
    }
    out
}

fn suffix_variants(word: &str) -> Vec<String> {
    COMMON_SUFFIXES
        .iter()
        .map(|suffix| format!("{word}{suffix}"))
        .chain(
            year_suffixes()
                .into_iter()
                .map(|year| format!("{word}{year}")),
        )
        .collect()
}

fn prefix_variants(word: &str) -> Vec<String> {
    COMMON_PREFIXES
        .iter()
        .map(|prefix| format!("{prefix}{word}"))
        .collect()
}

/// Single-position keyboard-adjacency substitutions over the lowercased
/// word, positions left-to-right. Skipped for words shorter than 2
/// characters.
fn typo_variants(word: &str) -> Vec<String> {
    let lower: Vec<char> = word.to_lowercase().chars().collect();
    if lower.len() < 2 {
        return Vec::new();
    }

    let mut variants = Vec::new();
    for (i, c) in lower.iter().enumerate() {
        if let Some(adjacent) = KEYBOARD_ADJACENT.get(c) {
            for replacement in adjacent.chars() {
                let mut chars = lower.clone();
                chars[i] = replacement;
                variants.push(chars.iter().collect());
            }
        }
    }
    variants
}

/// All k-element combinations of `items`, in lexicographic index order
fn combinations<T: Copy>(items: &[T], k: usize) -> Vec<Vec<T>> {
    if k == 0 {
        return vec![Vec::new()];
    }
    if items.len() < k {
        return Vec::new();
    }
    let mut out = Vec::new();
    for (i, &first) in items.iter().enumerate() {
        if items.len() - i < k {
            break;
        }
        for mut rest in combinations(&items[i + 1..], k - 1) {
            rest.insert(0, first);
            out.push(rest);
        }
    }
    out
}

/// Cartesian product with the rightmost slot varying fastest
fn cartesian_product(options: &[&[char]]) -> Vec<Vec<char>> {
    let mut out: Vec<Vec<char>> = vec![Vec::new()];
    for slot in options {
        let mut next = Vec::with_capacity(out.len() * slot.len());
        for prefix in &out {
            for &c in *slot {
                let mut row = prefix.clone();
                row.push(c);
                next.push(row);
            }
        }
        out = next;
    }
    out
}
