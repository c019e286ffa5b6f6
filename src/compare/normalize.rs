//! Content normalization
//!
//! Strips boilerplate that says nothing about a file's substance (a license
//! header, import lines) so that similarity reflects real edits. What counts
//! as boilerplate is a [`Dialect`] preset, optionally overridden by explicit
//! configuration.

use crate::error::DiffError;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Apache Software Foundation license header, as found at the top of ASF Java sources.
const APACHE_LICENSE_HEADER: &[&str] = &[
    "/*",
    " * Licensed to the Apache Software Foundation (ASF) under one",
    " * or more contributor license agreements.  See the NOTICE file",
    " * distributed with this work for additional information",
    " * regarding copyright ownership.  The ASF licenses this file",
    " * to you under the Apache License, Version 2.0 (the",
    " * \"License\"); you may not use this file except in compliance",
    " * with the License.  You may obtain a copy of the License at",
    " *",
    " *     http://www.apache.org/licenses/LICENSE-2.0",
    " *",
    " * Unless required by applicable law or agreed to in writing,",
    " * software distributed under the License is distributed on an",
    " * \"AS IS\" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY",
    " * KIND, either express or implied.  See the License for the",
    " * specific language governing permissions and limitations",
    " * under the License.",
    " */",
];

const JAVA_IMPORT_PATTERN: &str = "^import ";

/// Named boilerplate presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// ASF license header and `import ` lines
    Java,
    /// Nothing stripped
    #[default]
    Plain,
}

impl Dialect {
    pub fn boilerplate_block(&self) -> Vec<String> {
        match self {
            Dialect::Java => APACHE_LICENSE_HEADER.iter().map(|l| l.to_string()).collect(),
            Dialect::Plain => Vec::new(),
        }
    }

    pub fn noise_line_patterns(&self) -> Vec<String> {
        match self {
            Dialect::Java => vec![JAVA_IMPORT_PATTERN.to_string()],
            Dialect::Plain => Vec::new(),
        }
    }
}

/// Normalizer configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Preset supplying the defaults below
    #[serde(default)]
    pub dialect: Dialect,

    /// Header lines dropped when a file starts with them (compared trimmed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boilerplate_block: Option<Vec<String>>,

    /// Regular expressions; any line matching one is dropped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noise_line_patterns: Option<Vec<String>>,
}

/// Produces the comparable form of a file's text.
#[derive(Debug, Clone)]
pub struct Normalizer {
    /// Reference header, each line trimmed
    boilerplate: Vec<String>,
    noise: Vec<Regex>,
}

impl Normalizer {
    /// Build from an explicit header block and compiled noise-line patterns.
    pub fn new(boilerplate_block: &[String], noise: Vec<Regex>) -> Self {
        Self {
            boilerplate: boilerplate_block.iter().map(|l| l.trim().to_string()).collect(),
            noise,
        }
    }

    /// Normalizer that keeps every line.
    pub fn passthrough() -> Self {
        Self::new(&[], Vec::new())
    }

    /// Build from configuration; explicit fields take precedence over the dialect.
    pub fn from_config(config: &NormalizerConfig) -> Result<Self, DiffError> {
        let boilerplate = config
            .boilerplate_block
            .clone()
            .unwrap_or_else(|| config.dialect.boilerplate_block());
        let patterns = config
            .noise_line_patterns
            .clone()
            .unwrap_or_else(|| config.dialect.noise_line_patterns());

        let noise = patterns
            .iter()
            .map(|p| {
                Regex::new(p).map_err(|e| {
                    DiffError::ConfigError(format!("Invalid noise line pattern '{}': {}", p, e))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(&boilerplate, noise))
    }

    /// Normalize raw file text.
    ///
    /// `\r\n`, `\n` and a lone `\r` all end a line, and a final terminator
    /// does not start another line. Every kept line is emitted followed by
    /// `\n`, so normalizing the output again is a no-op.
    pub fn normalize(&self, text: &str) -> String {
        self.normalize_lines(&split_lines(text))
    }

    /// Normalize a file already split into lines.
    pub fn normalize_lines(&self, lines: &[&str]) -> String {
        let body = if self.starts_with_boilerplate(lines) {
            &lines[self.boilerplate.len()..]
        } else {
            lines
        };

        let mut out = String::new();
        for line in body.iter().filter(|line| !self.is_noise(line)) {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    fn starts_with_boilerplate(&self, lines: &[&str]) -> bool {
        if self.boilerplate.is_empty() || lines.len() < self.boilerplate.len() {
            return false;
        }
        lines
            .iter()
            .zip(&self.boilerplate)
            .all(|(line, reference)| line.trim() == reference)
    }

    fn is_noise(&self, line: &str) -> bool {
        self.noise.iter().any(|re| re.is_match(line))
    }
}

/// Split text into lines without their terminators.
fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        lines.push(&text[start..]);
    }
    lines
}
