//! Fixed substitution and affix tables for the mutation rule families.

use chrono::{Datelike, Utc};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Leet-speak substitutions, keyed by the lowercase letter they replace.
/// Replacement order within a slice is the emission order.
pub(crate) static LEET_MAP: Lazy<HashMap<char, &'static [char]>> = Lazy::new(|| {
    let entries: &[(char, &'static [char])] = &[
        ('a', &['@', '4']),
        ('b', &['8']),
        ('c', &['(']),
        ('e', &['3']),
        ('g', &['6', '9']),
        ('h', &['#']),
        ('i', &['1', '!', '|']),
        ('l', &['1']),
        ('o', &['0']),
        ('s', &['$', '5']),
        ('t', &['7']),
        ('z', &['2']),
    ];
    entries.iter().copied().collect()
});

/// QWERTY keyboard-adjacent characters.
// TODO add support for alternate layouts
pub(crate) static KEYBOARD_ADJACENT: Lazy<HashMap<char, &'static str>> = Lazy::new(|| {
    let entries: &[(char, &'static str)] = &[
        ('a', "qwsz"),
        ('b', "vghn"),
        ('c', "xdfv"),
        ('d', "erfcxs"),
        ('e', "rdsw3"),
        ('f', "rtgvcd"),
        ('g', "tyhbvf"),
        ('h', "yujnbg"),
        ('i', "ujko8"),
        ('j', "uikmnh"),
        ('k', "iolmj"),
        ('l', "opk"),
        ('m', "njk"),
        ('n', "bhjm"),
        ('o', "iklp9"),
        ('p', "ol0"),
        ('q', "wa12"),
        ('r', "edft4"),
        ('s', "wedxza"),
        ('t', "rfgy5"),
        ('u', "yhji7"),
        ('v', "cfgb"),
        ('w', "qase2"),
        ('x', "zsdc"),
        ('y', "tghu6"),
        ('z', "asx"),
    ];
    entries.iter().copied().collect()
});

/// Common password suffixes, in emission order. Year suffixes from
/// [`year_suffixes`] follow this list.
pub(crate) const COMMON_SUFFIXES: &[&str] = &[
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "12", "123", "1234", "12345", "01", "02",
    "69", "99", "00", "24", "25", "67", "!", "!!", "!!!", "@", "#", "$",
];

/// Common password prefixes, in emission order
pub(crate) const COMMON_PREFIXES: &[&str] = &["!", "@", "#", "1", "the", "my"];

/// Sliding window of year suffixes: sixteen years back through next year.
pub(crate) fn year_suffixes() -> Vec<String> {
    let current = Utc::now().year();
    ((current - 16)..=(current + 1))
        .map(|year| year.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_window_spans_past_and_next_year() {
        let years = year_suffixes();
        assert_eq!(years.len(), 18);
        let current = Utc::now().year();
        assert_eq!(years[0], (current - 16).to_string());
        assert_eq!(years[17], (current + 1).to_string());
    }

    #[test]
    fn test_every_leet_key_is_lowercase_ascii() {
        for key in LEET_MAP.keys() {
            assert!(key.is_ascii_lowercase());
        }
    }
}
