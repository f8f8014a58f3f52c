// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-place file rewriting.
//!
//! Files are processed line by line; a key spanning a line break is never
//! matched. Output goes to a temporary file in the same directory which is
//! then persisted over the original. The temporary file is removed on every
//! error path.

use std::borrow::Cow;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::map::ReplacementMap;
use crate::replacer::BatchReplacer;
use crate::template::Template;

/// Text encoding of a rewritten file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Encoding {
    /// UTF-8; invalid byte sequences are an error.
    #[default]
    Utf8,
    /// ISO-8859-1; characters above U+00FF cannot be written back.
    Latin1,
}

impl Encoding {
    /// Look up an encoding by label, ignoring case.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Some(Encoding::Utf8),
            "latin-1" | "latin1" | "iso-8859-1" => Some(Encoding::Latin1),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Latin1 => "latin-1",
        }
    }

    fn decode(&self, bytes: Vec<u8>) -> std::result::Result<String, String> {
        match self {
            Encoding::Utf8 => String::from_utf8(bytes).map_err(|e| e.utf8_error().to_string()),
            Encoding::Latin1 => Ok(bytes.into_iter().map(char::from).collect()),
        }
    }

    fn encode<'a>(&self, text: &'a str) -> std::result::Result<Cow<'a, [u8]>, String> {
        match self {
            Encoding::Utf8 => Ok(text.as_bytes().into()),
            Encoding::Latin1 => text
                .chars()
                .map(|c| {
                    u8::try_from(c).map_err(|_| format!("character {:?} is not latin-1", c))
                })
                .collect::<std::result::Result<Vec<u8>, String>>()
                .map(Into::into),
        }
    }
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Encoding::from_label(s).ok_or_else(|| Error::Config {
            message: format!("unsupported encoding: {}", s),
            path: None,
        })
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of rewriting one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteStats {
    /// Lines read.
    pub lines: usize,
    /// Keys replaced across all lines.
    pub replacements: usize,
}

/// Rewrites files in place with a compiled replacer.
#[derive(Debug)]
pub struct FileRewriter {
    replacer: BatchReplacer,
    template: Template,
    encoding: Encoding,
}

impl FileRewriter {
    pub fn new(replacer: BatchReplacer, template: Template, encoding: Encoding) -> Self {
        Self {
            replacer,
            template,
            encoding,
        }
    }

    /// Rewrite `path`, replacing its contents once every line is processed.
    ///
    /// The original file is untouched if any step fails.
    pub fn rewrite(&self, path: &Path) -> Result<RewriteStats> {
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        let permissions = file
            .metadata()
            .map_err(|e| Error::io(path, e))?
            .permissions();

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut temp = NamedTempFile::new_in(dir).map_err(|e| Error::io(dir, e))?;

        let temp_path = temp.path().to_path_buf();
        let stats = self.copy_lines(path, BufReader::new(file), &temp_path, &mut temp)?;

        std::fs::set_permissions(&temp_path, permissions)
            .map_err(|e| Error::io(&temp_path, e))?;
        temp.persist(path).map_err(|e| Error::io(path, e.error))?;

        tracing::debug!(
            path = %path.display(),
            lines = stats.lines,
            replacements = stats.replacements,
            encoding = %self.encoding,
            "rewrote file"
        );
        Ok(stats)
    }

    fn copy_lines(
        &self,
        path: &Path,
        mut reader: impl BufRead,
        temp_path: &Path,
        out: impl Write,
    ) -> Result<RewriteStats> {
        let mut writer = BufWriter::new(out);
        let mut stats = RewriteStats::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| Error::io(path, e))?;
            if read == 0 {
                break;
            }
            stats.lines += 1;

            let line = self
                .encoding
                .decode(std::mem::take(&mut buf))
                .map_err(|message| encoding_error(path, stats.lines, message))?;
            let (replaced, count) = self.replacer.replace_all_counted(&line, &self.template);
            stats.replacements += count;

            let bytes = self
                .encoding
                .encode(&replaced)
                .map_err(|message| encoding_error(path, stats.lines, message))?;
            writer
                .write_all(&bytes)
                .map_err(|e| Error::io(temp_path, e))?;
        }

        writer.flush().map_err(|e| Error::io(temp_path, e))?;
        Ok(stats)
    }
}

fn encoding_error(path: &Path, line: usize, message: String) -> Error {
    Error::Encoding {
        path: path.to_path_buf(),
        line,
        message,
    }
}

/// Replace every key in the file at `path`, line by line.
///
/// The replacer and template are built once for the whole file.
pub fn substitute_in_file(
    map: &ReplacementMap,
    path: &Path,
    template: &str,
    encoding: Encoding,
) -> Result<()> {
    let replacer = BatchReplacer::new(map)?;
    let rewriter = FileRewriter::new(replacer, Template::parse(template)?, encoding);
    rewriter.rewrite(path)?;
    Ok(())
}

#[cfg(test)]
#[path = "rewrite_tests.rs"]
mod tests;
