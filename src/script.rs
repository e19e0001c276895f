// SPDX-License-Identifier: PMPL-1.0-or-later

//! The old/new line-pair scan over a single `.rpy` script.
//!
//! Ren'Py translation blocks pair a source declaration with a target
//! declaration, not necessarily on adjacent lines:
//!
//! ```text
//! # game/script.rpy:42
//! old "Hello"
//! new ""
//! ```
//!
//! The scan buffers the quoted payload of each `old` line and fills the
//! next `new` line if (and only if) its payload is empty. Everything
//! else, including `new` lines that already carry text, is echoed
//! byte-for-byte. Unrelated lines between the pair (comments, blank
//! lines) do not clear the buffer; only a `new` line consumes it.

use crate::types::Translator;
use anyhow::{Context, Result};
use regex::{NoExpand, Regex};
use std::fs;
use std::path::Path;

/// Counters for one file's transformation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformStats {
    /// Empty `new` payloads that were filled with a translation.
    pub filled: usize,
    /// Paired `new` lines left alone because they already had text.
    pub already_translated: usize,
}

/// Precompiled patterns for the old/new declaration scan.
pub struct ScriptScanner {
    old_re: Regex,
    new_re: Regex,
    sub_re: Regex,
}

impl Default for ScriptScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptScanner {
    pub fn new() -> Self {
        // Static literals; a failed compile here is a programming error.
        Self {
            old_re: Regex::new(r#"^\s*old\s+"(.*)""#).unwrap(),
            new_re: Regex::new(r#"^\s*new\s+"(.*)""#).unwrap(),
            sub_re: Regex::new(r#"new\s+".*""#).unwrap(),
        }
    }

    /// Runs the pair scan over `lines`, returning the rewritten lines
    /// and what was changed.
    ///
    /// At most one source payload is pending at a time. It is set only
    /// by an `old` line (a second `old` line replaces it) and cleared
    /// by the next `new` line whether or not that line gets filled. An
    /// empty `new` line with nothing pending is left unfilled.
    pub fn transform_lines(
        &self,
        lines: &[&str],
        translator: &dyn Translator,
    ) -> (Vec<String>, TransformStats) {
        let mut output = Vec::with_capacity(lines.len());
        let mut stats = TransformStats::default();
        let mut pending: Option<String> = None;

        for line in lines {
            if let Some(caps) = self.old_re.captures(line) {
                let payload = caps.get(1).map_or("", |m| m.as_str());
                pending = Some(payload.to_string());
                output.push((*line).to_string());
                continue;
            }

            match (self.new_re.captures(line), pending.take()) {
                (Some(caps), Some(source)) => {
                    let payload = caps.get(1).map_or("", |m| m.as_str());
                    if payload.trim().is_empty() {
                        let translation = translator.translate(&source);
                        let replacement = format!("new \"{}\"", translation);
                        // NoExpand: translated text must never be treated
                        // as a group reference.
                        let updated = self.sub_re.replace(line, NoExpand(&replacement));
                        output.push(updated.into_owned());
                        stats.filled += 1;
                    } else {
                        output.push((*line).to_string());
                        stats.already_translated += 1;
                    }
                }
                (_, restored) => {
                    // Not a fillable pair: a `new` line with nothing
                    // pending stays as-is, and a non-matching line must
                    // not disturb the buffer.
                    if self.new_re.is_match(line) {
                        pending = None;
                    } else {
                        pending = restored;
                    }
                    output.push((*line).to_string());
                }
            }
        }

        (output, stats)
    }

    /// Transforms one script file in place.
    ///
    /// Reads the whole file as UTF-8, runs the pair scan, and writes
    /// the result back over the original path.
    pub fn process_file(&self, path: &Path, translator: &dyn Translator) -> Result<TransformStats> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let lines: Vec<&str> = content.lines().collect();

        let (output, stats) = self.transform_lines(&lines, translator);

        fs::write(path, output.join("\n"))
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(stats)
    }
}
