//! Filter expression compiler and evaluator.
//!
//! A rule string like `length>5,starts-with=a` compiles into a
//! [`FilterExpression`]: an ordered list of clauses AND-ed together.
//! Compilation produces an inspectable value, never executable code.

use crate::core::errors::{Error, Result};

/// Comparison operator accepted by the `length` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthOp {
    Gt,
    Lt,
    Eq,
}

/// One compiled filter clause.
///
/// String comparisons are case-insensitive; `length` counts characters,
/// not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterRule {
    Length { op: LengthOp, value: usize },
    StartsWith(String),
    EndsWith(String),
    Contains(String),
    Excludes(String),
}

impl FilterRule {
    fn matches(&self, word: &str) -> bool {
        match self {
            FilterRule::Length { op, value } => {
                let len = word.chars().count();
                match op {
                    LengthOp::Gt => len > *value,
                    LengthOp::Lt => len < *value,
                    LengthOp::Eq => len == *value,
                }
            }
            FilterRule::StartsWith(prefix) => {
                word.to_lowercase().starts_with(&prefix.to_lowercase())
            }
            FilterRule::EndsWith(suffix) => word.to_lowercase().ends_with(&suffix.to_lowercase()),
            FilterRule::Contains(needle) => word.to_lowercase().contains(&needle.to_lowercase()),
            FilterRule::Excludes(needle) => !word.to_lowercase().contains(&needle.to_lowercase()),
        }
    }
}

/// An ordered set of filter clauses combined by logical AND
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterExpression {
    rules: Vec<FilterRule>,
}

impl FilterExpression {
    /// Compile a comma-separated rule string.
    ///
    /// Clauses are trimmed; empty clauses are skipped. An unrecognized
    /// attribute or malformed operator/operand fails compilation.
    pub fn compile(rule_string: &str) -> Result<FilterExpression> {
        let mut rules = Vec::new();
        for clause in rule_string.split(',') {
            let clause = clause.trim();
            if clause.is_empty() {
                continue;
            }
            rules.push(parse_clause(clause)?);
        }
        Ok(FilterExpression { rules })
    }

    pub fn rules(&self) -> &[FilterRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// AND of all clause predicates; an empty expression passes everything.
    pub fn matches(&self, word: &str) -> bool {
        self.rules.iter().all(|rule| rule.matches(word))
    }
}

fn parse_clause(clause: &str) -> Result<FilterRule> {
    if let Some(rest) = clause.strip_prefix("length") {
        let mut chars = rest.chars();
        let op = match chars.next() {
            Some('>') => LengthOp::Gt,
            Some('<') => LengthOp::Lt,
            Some('=') => LengthOp::Eq,
            _ => {
                return Err(Error::filter_parse(
                    clause,
                    "expected one of '>', '<', '=' after 'length'",
                ))
            }
        };
        let value = chars.as_str().trim().parse::<usize>().map_err(|_| {
            Error::filter_parse(clause, "length operand must be a non-negative integer")
        })?;
        return Ok(FilterRule::Length { op, value });
    }

    let (attribute, operand) = clause
        .split_once('=')
        .ok_or_else(|| Error::filter_parse(clause, "expected 'attribute=value'"))?;

    let operand = operand.to_string();
    match attribute {
        "starts-with" => Ok(FilterRule::StartsWith(operand)),
        "ends-with" => Ok(FilterRule::EndsWith(operand)),
        "contains" => Ok(FilterRule::Contains(operand)),
        "excludes" => Ok(FilterRule::Excludes(operand)),
        _ => Err(Error::filter_parse(clause, "unrecognized attribute")),
    }
}
