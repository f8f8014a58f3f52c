// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled key matchers with automatic optimization.

use aho_corasick::{AhoCorasick, MatchKind};
use memchr::memmem::Finder;
use regex::Regex;

use crate::error::{Error, Result};

/// A compiled matcher over one group of literal keys.
pub enum GroupMatcher {
    /// Single literal key (fastest).
    Literal(LiteralMatcher),
    /// Multiple literal keys (Aho-Corasick).
    MultiLiteral(MultiLiteralMatcher),
    /// Escaped alternation with one capture group per key.
    Alternation(AlternationMatcher),
}

/// Matcher for a single key using SIMD-optimized memchr.
pub struct LiteralMatcher {
    len: usize,
    finder: Finder<'static>,
}

/// Matcher for many keys using a leftmost-first Aho-Corasick automaton.
pub struct MultiLiteralMatcher {
    automaton: AhoCorasick,
}

/// Matcher compiling keys into `(k1)|(k2)|...` with every key escaped.
pub struct AlternationMatcher {
    regex: Regex,
}

/// A key occurrence found in content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMatch {
    /// Byte offset where match starts.
    pub start: usize,
    /// Byte offset where match ends.
    pub end: usize,
    /// Index of the matched key within the group.
    pub key: usize,
}

impl GroupMatcher {
    /// Compile keys for a single simultaneous scan.
    ///
    /// - One key -> LiteralMatcher
    /// - Several keys -> MultiLiteralMatcher
    pub fn literals(keys: &[&str]) -> Result<Self> {
        match keys {
            [] => Err(Error::Pattern("cannot compile an empty key group".into())),
            [key] => Ok(GroupMatcher::Literal(LiteralMatcher::new(key)?)),
            _ => Ok(GroupMatcher::MultiLiteral(MultiLiteralMatcher::new(keys)?)),
        }
    }

    /// Compile keys into one escaped alternation.
    pub fn alternation(keys: &[&str]) -> Result<Self> {
        Ok(GroupMatcher::Alternation(AlternationMatcher::new(keys)?))
    }

    /// Find all non-overlapping key matches, left to right.
    pub fn find_all(&self, content: &str) -> Vec<KeyMatch> {
        match self {
            GroupMatcher::Literal(m) => m.find_all(content),
            GroupMatcher::MultiLiteral(m) => m.find_all(content),
            GroupMatcher::Alternation(m) => m.find_all(content),
        }
    }

    /// Short name of the matcher tier, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            GroupMatcher::Literal(_) => "literal",
            GroupMatcher::MultiLiteral(_) => "multi-literal",
            GroupMatcher::Alternation(_) => "alternation",
        }
    }
}

/// Reject keys that would match the empty string.
fn check_keys(keys: &[&str]) -> Result<()> {
    if keys.iter().any(|k| k.is_empty()) {
        return Err(Error::EmptyKey);
    }
    Ok(())
}

impl LiteralMatcher {
    pub fn new(key: &str) -> Result<Self> {
        check_keys(&[key])?;
        Ok(Self {
            len: key.len(),
            finder: Finder::new(key).into_owned(),
        })
    }

    pub fn find_all(&self, content: &str) -> Vec<KeyMatch> {
        self.finder
            .find_iter(content.as_bytes())
            .map(|pos| KeyMatch {
                start: pos,
                end: pos + self.len,
                key: 0,
            })
            .collect()
    }
}

impl MultiLiteralMatcher {
    /// Create a new multi-literal matcher.
    ///
    /// Earlier keys win when several keys match at the same position.
    pub fn new(keys: &[&str]) -> Result<Self> {
        check_keys(keys)?;
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostFirst)
            .build(keys)?;
        Ok(Self { automaton })
    }

    pub fn find_all(&self, content: &str) -> Vec<KeyMatch> {
        self.automaton
            .find_iter(content)
            .map(|m| KeyMatch {
                start: m.start(),
                end: m.end(),
                key: m.pattern().as_usize(),
            })
            .collect()
    }
}

impl AlternationMatcher {
    /// Create a new alternation matcher.
    ///
    /// Earlier keys win when several keys match at the same position.
    pub fn new(keys: &[&str]) -> Result<Self> {
        check_keys(keys)?;
        if keys.is_empty() {
            return Err(Error::Pattern("cannot compile an empty key group".into()));
        }
        let regex = Regex::new(&alternation_pattern(keys))?;
        Ok(Self { regex })
    }

    pub fn find_all(&self, content: &str) -> Vec<KeyMatch> {
        self.regex
            .captures_iter(content)
            .filter_map(|caps| {
                // Group 0 is the whole match; key i is capture group i + 1.
                let (key, m) = caps
                    .iter()
                    .skip(1)
                    .enumerate()
                    .find_map(|(i, g)| g.map(|m| (i, m)))?;
                Some(KeyMatch {
                    start: m.start(),
                    end: m.end(),
                    key,
                })
            })
            .collect()
    }
}

/// Build `(k1)|(k2)|...` with every key escaped.
pub fn alternation_pattern(keys: &[&str]) -> String {
    keys.iter()
        .map(|k| format!("({})", regex::escape(k)))
        .collect::<Vec<_>>()
        .join("|")
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
