//! Splices a rendered table into a host document.
//!
//! The table lives between two marker lines. Everything up to and including
//! the begin marker, and everything from the end marker on, is kept as-is.

use std::path::{Path, PathBuf};

use crate::domain::errors::{DomainError, DomainResult};

pub const BEGIN_MARKER: &str = "<!--BEGIN_TABLE-->";
pub const END_MARKER: &str = "<!--END_TABLE-->";

fn is_marker(line: &str, marker: &str) -> bool {
    line.trim_end_matches('\r') == marker
}

/// Line indices of the begin marker and the first end marker after it.
fn find_markers(lines: &[&str]) -> Option<(usize, usize)> {
    let begin = lines.iter().position(|line| is_marker(line, BEGIN_MARKER))?;
    let end = lines[begin + 1..]
        .iter()
        .position(|line| is_marker(line, END_MARKER))?;
    Some((begin, begin + 1 + end))
}

fn splice_lines(lines: &[&str], begin: usize, end: usize, rows: &[String]) -> String {
    let mut out: Vec<&str> = Vec::with_capacity(begin + 1 + rows.len() + (lines.len() - end));
    out.extend_from_slice(&lines[..=begin]);
    out.extend(rows.iter().map(String::as_str));
    out.extend_from_slice(&lines[end..]);
    out.join("\n")
}

/// Replace the lines between the markers with `rows`.
///
/// Returns `None` when the begin marker is missing, or when no end marker
/// follows it. The trailing-newline state of `text` is preserved.
pub fn splice_table(text: &str, rows: &[String]) -> Option<String> {
    let lines: Vec<&str> = text.split('\n').collect();
    let (begin, end) = find_markers(&lines)?;
    Some(splice_lines(&lines, begin, end, rows))
}

/// A document known to contain both table markers.
///
/// Loading validates the markers up front, so a bad target fails before
/// any issue is fetched.
#[derive(Debug, Clone)]
pub struct HostDocument {
    path: PathBuf,
    text: String,
    begin: usize,
    end: usize,
}

impl HostDocument {
    /// Read `path` and locate its markers.
    pub async fn load(path: impl Into<PathBuf>) -> DomainResult<Self> {
        let path = path.into();
        let text = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| DomainError::io(&path, e))?;
        Self::parse(path, text)
    }

    /// Wrap already loaded text.
    pub fn parse(path: impl Into<PathBuf>, text: String) -> DomainResult<Self> {
        let path = path.into();
        let lines: Vec<&str> = text.split('\n').collect();
        let Some((begin, end)) = find_markers(&lines) else {
            return Err(DomainError::MissingMarkers { path });
        };
        Ok(Self {
            path,
            text,
            begin,
            end,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The document text with `rows` between the markers.
    pub fn splice(&self, rows: &[String]) -> String {
        let lines: Vec<&str> = self.text.split('\n').collect();
        splice_lines(&lines, self.begin, self.end, rows)
    }

    /// Write the spliced document back. Returns whether the text changed.
    pub async fn write(&self, rows: &[String]) -> DomainResult<bool> {
        let updated = self.splice(rows);
        let changed = updated != self.text;
        tokio::fs::write(&self.path, updated)
            .await
            .map_err(|e| DomainError::io(&self.path, e))?;
        Ok(changed)
    }
}

/// Read `path`, splice `rows` between its markers and write it back.
///
/// Nothing is written when the markers are missing.
pub async fn inject_file(path: &Path, rows: &[String]) -> DomainResult<bool> {
    HostDocument::load(path).await?.write(rows).await
}
