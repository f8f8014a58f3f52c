// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Reads a replacement map and replacer settings from TOML:
//!
//! ```toml
//! version = 1
//!
//! [replace]
//! strategy = "staged"
//! ceiling = 99
//! template = "{key} -> {value}"
//! encoding = "utf-8"
//!
//! [map]
//! lonely = "alone"
//! ```
//!
//! TOML tables iterate in sorted key order, so keys loaded from `[map]` are
//! grouped in that order.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::map::ReplacementMap;
use crate::pattern::DEFAULT_CEILING;
use crate::replacer::{BatchReplacer, Strategy};
use crate::rewrite::{Encoding, FileRewriter};
use crate::template::{DEFAULT_TEMPLATE, Template};

/// The only config version understood by this release.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "replace", "map"];

/// Known keys in the `[replace]` table.
const KNOWN_REPLACE_KEYS: &[&str] = &["strategy", "ceiling", "template", "encoding"];

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    #[serde(default)]
    version: Option<i64>,

    #[serde(default)]
    replace: Option<toml::Value>,

    #[serde(default)]
    map: Option<toml::Value>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Replacer settings.
    pub replace: ReplaceConfig,

    /// Keys and their replacement values.
    pub map: ReplacementMap,
}

/// Settings from the `[replace]` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceConfig {
    pub strategy: Strategy,
    pub template: String,
    pub encoding: Encoding,
}

impl Default for ReplaceConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            template: DEFAULT_TEMPLATE.to_string(),
            encoding: Encoding::default(),
        }
    }
}

impl Config {
    /// Compile the configured map with the configured strategy.
    pub fn replacer(&self) -> Result<BatchReplacer> {
        BatchReplacer::with_strategy(&self.map, self.replace.strategy)
    }

    pub fn template(&self) -> Result<Template> {
        Template::parse(&self.replace.template)
    }

    /// Build a file rewriter from every configured setting.
    pub fn rewriter(&self) -> Result<FileRewriter> {
        Ok(FileRewriter::new(
            self.replacer()?,
            self.template()?,
            self.replace.encoding,
        ))
    }
}

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parse config from string content, warning on unknown keys.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let flexible: FlexibleConfig =
        toml::from_str(content).map_err(|e| config_error(path, e.to_string()))?;

    let version = flexible
        .version
        .ok_or_else(|| config_error(path, "missing required field: version".to_string()))?;
    if version != SUPPORTED_VERSION {
        return Err(config_error(
            path,
            format!(
                "unsupported config version {} (supported: {})",
                version, SUPPORTED_VERSION
            ),
        ));
    }

    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, key);
        }
    }

    let replace = match flexible.replace {
        None => ReplaceConfig::default(),
        Some(toml::Value::Table(t)) => parse_replace_config(&t, path)?,
        Some(_) => return Err(config_error(path, "replace must be a table".to_string())),
    };

    let map = match flexible.map {
        None => ReplacementMap::new(),
        Some(toml::Value::Table(t)) => parse_map(&t, path)?,
        Some(_) => return Err(config_error(path, "map must be a table".to_string())),
    };

    tracing::debug!(
        path = %path.display(),
        keys = map.len(),
        strategy = %replace.strategy,
        "loaded config"
    );

    Ok(Config { replace, map })
}

fn parse_replace_config(t: &toml::Table, path: &Path) -> Result<ReplaceConfig> {
    for key in t.keys() {
        if !KNOWN_REPLACE_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, &format!("replace.{}", key));
        }
    }

    let ceiling = match t.get("ceiling") {
        None => None,
        Some(toml::Value::Integer(n)) if *n >= 1 => Some(*n as usize),
        Some(toml::Value::Integer(n)) => {
            return Err(config_error(
                path,
                format!("replace.ceiling must be at least 1, got {}", n),
            ));
        }
        Some(_) => {
            return Err(config_error(
                path,
                "replace.ceiling must be an integer".to_string(),
            ));
        }
    };

    let strategy = match string_field(t, "strategy", path)?.as_deref() {
        None | Some("simultaneous") => {
            if ceiling.is_some() {
                tracing::warn!(
                    "{}: replace.ceiling only applies to the staged strategy (ignored)",
                    path.display()
                );
            }
            Strategy::Simultaneous
        }
        Some("staged") => Strategy::Staged {
            ceiling: ceiling.unwrap_or(DEFAULT_CEILING),
        },
        Some(other) => {
            return Err(config_error(
                path,
                format!(
                    "unknown replace.strategy `{}` (expected `simultaneous` or `staged`)",
                    other
                ),
            ));
        }
    };

    let template = string_field(t, "template", path)?.unwrap_or_else(|| DEFAULT_TEMPLATE.into());
    // Validated here so a bad template fails at load time.
    Template::parse(&template).map_err(|e| config_error(path, e.to_string()))?;

    let encoding = match string_field(t, "encoding", path)? {
        None => Encoding::default(),
        Some(label) => Encoding::from_label(&label)
            .ok_or_else(|| config_error(path, format!("unsupported encoding: {}", label)))?,
    };

    Ok(ReplaceConfig {
        strategy,
        template,
        encoding,
    })
}

fn parse_map(t: &toml::Table, path: &Path) -> Result<ReplacementMap> {
    let mut map = ReplacementMap::new();
    for (key, value) in t {
        if key.is_empty() {
            return Err(config_error(path, "map keys must be non-empty".to_string()));
        }
        let Some(value) = value.as_str() else {
            return Err(config_error(
                path,
                format!("map.{:?} must be a string", key),
            ));
        };
        map.insert(key.as_str(), value);
    }
    Ok(map)
}

/// Read an optional string field from a TOML table.
fn string_field(t: &toml::Table, key: &str, path: &Path) -> Result<Option<String>> {
    match t.get(key) {
        None => Ok(None),
        Some(toml::Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(config_error(
            path,
            format!("replace.{} must be a string", key),
        )),
    }
}

fn config_error(path: &Path, message: String) -> Error {
    Error::Config {
        message,
        path: Some(path.to_path_buf()),
    }
}

fn warn_unknown_key(path: &Path, key: &str) {
    tracing::warn!(
        "{}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
