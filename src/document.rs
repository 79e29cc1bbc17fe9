// Copyright 2025 coScene
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Line-preserving document model for the Cassandra YAML file
//
// The file is held as raw lines; every mutation replaces exactly one full
// line and keeps its indentation. Rendering reproduces untouched lines
// byte-for-byte, so edits never disturb content outside the targeted spans.

use std::ops::Range;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("section '{0}' not found")]
    SectionNotFound(String),

    #[error("field '{key}' not found in section '{section}'")]
    FieldNotFound { section: String, key: String },

    #[error("top-level key '{0}' not found")]
    KeyNotFound(String),
}

pub type Result<T> = std::result::Result<T, DocumentError>;

/// In-memory view of the configuration file's text
#[derive(Debug, Clone)]
pub struct YamlDocument {
    lines: Vec<String>,
    trailing_newline: bool,
}

impl YamlDocument {
    /// Parse text into lines, remembering whether it ended with a newline
    pub fn parse(text: &str) -> Self {
        let trailing_newline = text.ends_with('\n');
        let body = if trailing_newline {
            &text[..text.len() - 1]
        } else {
            text
        };
        let lines = body.split('\n').map(str::to_string).collect();
        Self {
            lines,
            trailing_newline,
        }
    }

    /// Render the document back to text
    pub fn render(&self) -> String {
        let mut out = self.lines.join("\n");
        if self.trailing_newline {
            out.push('\n');
        }
        out
    }

    /// Replace the first occurrence of `key` inside `section`'s block
    ///
    /// The block starts after the section header line and ends at the first
    /// blank line (or end of file). The replaced line keeps its indentation
    /// and becomes the canonical `key: value` form.
    pub fn set_in_section(&mut self, section: &str, key: &str, value: &str) -> Result<()> {
        let block = self.section_block(section)?;
        for idx in block {
            if let Some(indent) = active_key_indent(&self.lines[idx], key) {
                self.lines[idx] = format!("{}{}: {}", indent, key, value);
                return Ok(());
            }
        }
        Err(DocumentError::FieldNotFound {
            section: section.to_string(),
            key: key.to_string(),
        })
    }

    /// Replace the first active top-level `key` line with `key: value`
    pub fn set_top_level(&mut self, key: &str, value: &str) -> Result<()> {
        match self.find_active_top_level(key) {
            Some(idx) => {
                self.lines[idx] = format!("{}: {}", key, value);
                Ok(())
            }
            None => Err(DocumentError::KeyNotFound(key.to_string())),
        }
    }

    /// Comment out the first active top-level `key` line
    ///
    /// A line that is already commented out counts as done, so re-running
    /// the same provisioning pass is a no-op.
    pub fn comment_out_top_level(&mut self, key: &str) -> Result<()> {
        if let Some(idx) = self.find_active_top_level(key) {
            self.lines[idx] = format!("# {}", self.lines[idx]);
            return Ok(());
        }
        if self.find_commented_top_level(key).is_some() {
            return Ok(());
        }
        Err(DocumentError::KeyNotFound(key.to_string()))
    }

    /// Activate a commented-out top-level `key` line with the given value
    ///
    /// If the line is already active its value is rewritten instead.
    pub fn uncomment_top_level(&mut self, key: &str, value: &str) -> Result<()> {
        if let Some(idx) = self.find_active_top_level(key) {
            self.lines[idx] = format!("{}: {}", key, value);
            return Ok(());
        }
        if let Some(idx) = self.find_commented_top_level(key) {
            self.lines[idx] = format!("{}: {}", key, value);
            return Ok(());
        }
        Err(DocumentError::KeyNotFound(key.to_string()))
    }

    /// Line range of a section's block: after the header, up to the first
    /// blank line or end of file
    fn section_block(&self, section: &str) -> Result<Range<usize>> {
        let header = self
            .lines
            .iter()
            .position(|line| active_key_indent(line, section).map_or(false, str::is_empty))
            .ok_or_else(|| DocumentError::SectionNotFound(section.to_string()))?;

        let end = self.lines[header + 1..]
            .iter()
            .position(|line| line.is_empty())
            .map(|offset| header + 1 + offset)
            .unwrap_or(self.lines.len());

        Ok(header + 1..end)
    }

    fn find_active_top_level(&self, key: &str) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| active_key_indent(line, key).map_or(false, str::is_empty))
    }

    fn find_commented_top_level(&self, key: &str) -> Option<usize> {
        self.lines.iter().position(|line| {
            line.strip_prefix('#')
                .map(str::trim_start)
                .and_then(|rest| active_key_indent(rest, key))
                .map_or(false, str::is_empty)
        })
    }
}

/// If `line` is a `key:` field line, return its indentation
fn active_key_indent<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let trimmed = line.trim_start();
    let indent = &line[..line.len() - trimmed.len()];
    let rest = trimmed.strip_prefix(key)?.strip_prefix(':')?;
    if rest.is_empty() || rest.starts_with(' ') || rest.starts_with('\t') {
        Some(indent)
    } else {
        None
    }
}
