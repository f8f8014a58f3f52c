// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Key grouping and matcher compilation.
//!
//! Implements the matcher hierarchy:
//! - Single literal: memchr::memmem
//! - Multiple literals: aho-corasick
//! - Bounded groups: escaped regex alternation

pub mod matcher;

pub use matcher::{GroupMatcher, KeyMatch};

/// Maximum number of alternatives per compiled group in staged mode.
pub const DEFAULT_CEILING: usize = 99;

/// Split keys into ordered groups of at most `ceiling` entries.
///
/// A ceiling of zero yields no groups.
pub fn partition<T>(keys: &[T], ceiling: usize) -> Vec<&[T]> {
    if ceiling == 0 {
        return Vec::new();
    }
    keys.chunks(ceiling).collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
