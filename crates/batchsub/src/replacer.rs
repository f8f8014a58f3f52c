// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Batched literal replacement.
//!
//! A [`BatchReplacer`] compiles every key of a [`ReplacementMap`] once and
//! then rewrites any number of strings. Two strategies are available:
//!
//! - [`Strategy::Simultaneous`] (default): one leftmost-first scan over all
//!   keys. Replacement text is never rescanned.
//! - [`Strategy::Staged`]: keys are split into groups of at most `ceiling`
//!   alternatives and each group is applied in turn to the output of the
//!   previous one. Text produced by an earlier group can therefore be
//!   replaced again by a later group.

use std::fmt;

use crate::error::{Error, Result};
use crate::map::ReplacementMap;
use crate::pattern::{DEFAULT_CEILING, GroupMatcher, partition};
use crate::template::Template;

/// How keys are compiled and applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Single pass over all keys at once.
    #[default]
    Simultaneous,
    /// Sequential passes over groups of at most `ceiling` keys.
    ///
    /// Later groups see the output of earlier groups, so values that equal a
    /// later key are replaced again.
    Staged { ceiling: usize },
}

impl Strategy {
    /// Staged strategy with the default ceiling of 99 keys per group.
    pub fn staged() -> Self {
        Strategy::Staged {
            ceiling: DEFAULT_CEILING,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Simultaneous => f.write_str("simultaneous"),
            Strategy::Staged { ceiling } => write!(f, "staged (ceiling {})", ceiling),
        }
    }
}

/// One compiled group and the entries it covers.
struct Group {
    matcher: GroupMatcher,
    /// Index of the group's first key in `BatchReplacer::entries`.
    offset: usize,
}

/// Replaces every key of a map with its (templated) value.
pub struct BatchReplacer {
    entries: Vec<(String, String)>,
    groups: Vec<Group>,
    strategy: Strategy,
}

impl BatchReplacer {
    /// Compile a replacer using [`Strategy::Simultaneous`].
    pub fn new(map: &ReplacementMap) -> Result<Self> {
        Self::with_strategy(map, Strategy::default())
    }

    /// Compile a replacer with an explicit strategy.
    ///
    /// Fails with [`Error::EmptyKey`] if any key is empty and with
    /// [`Error::InvalidCeiling`] for a staged ceiling of zero.
    pub fn with_strategy(map: &ReplacementMap, strategy: Strategy) -> Result<Self> {
        if map.keys().any(str::is_empty) {
            return Err(Error::EmptyKey);
        }

        let entries: Vec<(String, String)> = map
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();

        let groups = match strategy {
            Strategy::Staged { ceiling: 0 } => return Err(Error::InvalidCeiling),
            Strategy::Staged { ceiling } => {
                compile_groups(&keys, ceiling, GroupMatcher::alternation)?
            }
            Strategy::Simultaneous => compile_groups(&keys, keys.len(), GroupMatcher::literals)?,
        };

        tracing::debug!(
            keys = entries.len(),
            groups = groups.len(),
            %strategy,
            "compiled batch replacer"
        );

        Ok(Self {
            entries,
            groups,
            strategy,
        })
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Number of compiled matchers.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace every key with its value.
    pub fn replace(&self, haystack: &str) -> String {
        self.replace_all(haystack, &Template::default())
    }

    /// Replace every key with `template` rendered for that key and value.
    pub fn replace_all(&self, haystack: &str, template: &Template) -> String {
        self.replace_all_counted(haystack, template).0
    }

    /// Like [`BatchReplacer::replace_all`], also returning how many
    /// replacements were made across all groups.
    pub fn replace_all_counted(&self, haystack: &str, template: &Template) -> (String, usize) {
        let mut current = haystack.to_string();
        let mut total = 0;

        for (index, group) in self.groups.iter().enumerate() {
            let matches = group.matcher.find_all(&current);
            if matches.is_empty() {
                continue;
            }
            tracing::trace!(group = index, matches = matches.len(), "applying group");
            total += matches.len();

            let mut out = String::with_capacity(current.len());
            let mut last = 0;
            for m in matches {
                let (key, value) = &self.entries[group.offset + m.key];
                out.push_str(&current[last..m.start]);
                template.render_into(&mut out, key, value);
                last = m.end;
            }
            out.push_str(&current[last..]);
            current = out;
        }

        (current, total)
    }
}

impl fmt::Debug for BatchReplacer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BatchReplacer")
            .field("keys", &self.entries.len())
            .field("groups", &self.groups.len())
            .field("strategy", &self.strategy)
            .finish()
    }
}

fn compile_groups(
    keys: &[&str],
    ceiling: usize,
    compile: fn(&[&str]) -> Result<GroupMatcher>,
) -> Result<Vec<Group>> {
    let mut offset = 0;
    partition(keys, ceiling)
        .into_iter()
        .map(|chunk| {
            let group = Group {
                matcher: compile(chunk)?,
                offset,
            };
            offset += chunk.len();
            Ok(group)
        })
        .collect()
}

#[cfg(test)]
#[path = "replacer_tests.rs"]
mod tests;
