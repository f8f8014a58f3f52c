// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// Batchsub error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Template references an unknown field or has unbalanced braces.
    #[error("template error: {template:?}: {message}")]
    Template { template: String, message: String },

    /// Replacement map contains an empty key.
    #[error("replacement keys must be non-empty")]
    EmptyKey,

    /// Staged strategy configured with a zero alternation ceiling.
    #[error("alternation ceiling must be at least 1")]
    InvalidCeiling,

    /// Matcher compilation failed.
    #[error("pattern error: {0}")]
    Pattern(String),

    /// File I/O error
    #[error("io error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Text could not be decoded from, or encoded to, the file encoding.
    #[error("encoding error: {}:{line}: {message}", .path.display())]
    Encoding {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::Pattern(err.to_string())
    }
}

impl From<aho_corasick::BuildError> for Error {
    fn from(err: aho_corasick::BuildError) -> Self {
        Error::Pattern(format!("aho-corasick error: {}", err))
    }
}

/// Result type using batchsub Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
