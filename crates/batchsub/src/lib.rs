// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Batched multi-literal string replacement.
//!
//! ```
//! use batchsub::{ReplacementMap, substitute};
//!
//! let map = ReplacementMap::from([("a ", "A "), ("ba", "Ba")]);
//! assert_eq!(substitute(&map, "a lonely banana", "{value}").unwrap(), "A lonely Banana");
//!
//! let map = ReplacementMap::from([("lonely", "alone")]);
//! assert_eq!(
//!     substitute(&map, "a lonely banana", "{key} -> {value}").unwrap(),
//!     "a lonely -> alone banana"
//! );
//! ```

pub mod config;
pub mod error;
pub mod map;
pub mod pattern;
pub mod replacer;
pub mod rewrite;
pub mod template;

pub use config::Config;
pub use error::{Error, Result};
pub use map::ReplacementMap;
pub use pattern::DEFAULT_CEILING;
pub use replacer::{BatchReplacer, Strategy};
pub use rewrite::{Encoding, FileRewriter, RewriteStats, substitute_in_file};
pub use template::{DEFAULT_TEMPLATE, Template};

/// Replace every key of `map` found in `haystack` with `template` rendered
/// for that key and its value.
///
/// The replacer is built for this call only; reuse a [`BatchReplacer`] when
/// rewriting many strings with the same map.
pub fn substitute(map: &ReplacementMap, haystack: &str, template: &str) -> Result<String> {
    substitute_with(map, haystack, template, Strategy::default())
}

/// [`substitute`] with an explicit [`Strategy`].
pub fn substitute_with(
    map: &ReplacementMap,
    haystack: &str,
    template: &str,
    strategy: Strategy,
) -> Result<String> {
    let replacer = BatchReplacer::with_strategy(map, strategy)?;
    let template = Template::parse(template)?;
    Ok(replacer.replace_all(haystack, &template))
}

#[cfg(test)]
pub mod test_utils;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
