// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Replacement templates.
//!
//! A template renders the text spliced in place of each match. Two fields are
//! defined: `{key}` (the matched text) and `{value}` (its mapped value).
//! `{{` and `}}` produce literal braces.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Template used when the caller does not supply one.
pub const DEFAULT_TEMPLATE: &str = "{value}";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Key,
    Value,
}

/// A parsed replacement template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Default for Template {
    fn default() -> Self {
        Self {
            source: DEFAULT_TEMPLATE.to_string(),
            segments: vec![Segment::Value],
        }
    }
}

impl Template {
    /// Parse a template string.
    ///
    /// Fails on unknown field names, empty `{}` fields, an unclosed `{` or a
    /// lone `}`.
    pub fn parse(source: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '}' => return Err(template_error(source, "single '}' encountered")),
                '{' => {
                    let mut name = String::new();
                    let mut closed = false;
                    for c in chars.by_ref() {
                        if c == '}' {
                            closed = true;
                            break;
                        }
                        name.push(c);
                    }
                    if !closed {
                        return Err(template_error(source, "unclosed '{' in field"));
                    }
                    let segment = match name.as_str() {
                        "key" => Segment::Key,
                        "value" => Segment::Value,
                        "" => {
                            return Err(template_error(
                                source,
                                "empty field (use {key} or {value})",
                            ));
                        }
                        other => {
                            return Err(template_error(
                                source,
                                &format!("unknown field `{}` (expected `key` or `value`)", other),
                            ));
                        }
                    };
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(segment);
                }
                _ => literal.push(c),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// The template text as given to [`Template::parse`].
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Append the rendered replacement for one match to `out`.
    pub fn render_into(&self, out: &mut String, key: &str, value: &str) {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Key => out.push_str(key),
                Segment::Value => out.push_str(value),
            }
        }
    }

    pub fn render(&self, key: &str, value: &str) -> String {
        let mut out = String::new();
        self.render_into(&mut out, key, value);
        out
    }
}

impl FromStr for Template {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Template::parse(s)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn template_error(source: &str, message: &str) -> Error {
    Error::Template {
        template: source.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
