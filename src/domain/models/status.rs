//! Status registry and label classification.
//!
//! The registry is an ordered list of `(label, display)` pairs. Its order
//! is the order status groups are rendered in when no explicit filter is
//! given: work in flight first, finished and abandoned work last.

use std::collections::HashSet;

use serde::Serialize;

/// Label prefix shared by every status label.
pub const STATUS_PREFIX: &str = "status/";

/// Placeholder status for issues with zero or conflicting status labels.
///
/// Never applied as a real GitHub label; it only serves as a registry key.
pub const UNKNOWN_STATUS: &str = "status/unknown";

const DEFAULT_STATUSES: &[(&str, &str)] = &[
    (UNKNOWN_STATUS, "❓unknown"),
    ("status/implementing", "👷 implementing"),
    ("status/planning", "📆 planning"),
    ("status/approved", "👍 approved"),
    ("status/final-comment-period", "⏰ final comments"),
    ("status/api-approved", "📐 API approved"),
    ("status/review", "✍️ review"),
    ("status/proposed", "💡 proposed"),
    ("status/done", "✅ done"),
    ("status/stale", "🤷‍♂️ stale"),
    ("status/rejected", "👎 rejected"),
];

/// A single status label and its human-readable rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusEntry {
    /// GitHub label name, e.g. `status/done`.
    pub label: String,
    /// Emoji-prefixed text shown in the Status column.
    pub display: String,
}

impl StatusEntry {
    pub fn new(label: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            display: display.into(),
        }
    }

    /// Whether this entry is the unknown sentinel.
    pub fn is_unknown(&self) -> bool {
        self.label == UNKNOWN_STATUS
    }
}

/// Immutable, ordered set of known statuses.
///
/// Always contains exactly one [`UNKNOWN_STATUS`] entry; [`StatusRegistry::new`]
/// adds it at the front when the caller leaves it out and drops duplicate
/// labels (first occurrence wins).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRegistry {
    entries: Vec<StatusEntry>,
}

impl StatusRegistry {
    /// Build a registry from `(label, display)` pairs, preserving order.
    pub fn new<I, L, D>(entries: I) -> Self
    where
        I: IntoIterator<Item = (L, D)>,
        L: Into<String>,
        D: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut entries: Vec<StatusEntry> = entries
            .into_iter()
            .map(|(label, display)| StatusEntry::new(label, display))
            .filter(|entry| seen.insert(entry.label.clone()))
            .collect();

        if !entries.iter().any(StatusEntry::is_unknown) {
            entries.insert(0, StatusEntry::new(UNKNOWN_STATUS, "❓unknown"));
        }

        Self { entries }
    }

    /// All entries in rendering order, sentinel included.
    pub fn entries(&self) -> &[StatusEntry] {
        &self.entries
    }

    /// Look up an entry by label.
    pub fn get(&self, label: &str) -> Option<&StatusEntry> {
        self.entries.iter().find(|entry| entry.label == label)
    }

    /// Display string for a status label, if registered.
    pub fn display(&self, label: &str) -> Option<&str> {
        self.get(label).map(|entry| entry.display.as_str())
    }

    /// Labels in rendering order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.label.as_str())
    }

    /// Reduce an issue's labels to exactly one status.
    ///
    /// Returns the matching registry label when exactly one recognized
    /// status label is present, and [`UNKNOWN_STATUS`] for zero or several.
    /// A label applied twice counts once.
    pub fn classify<'a, I>(&self, labels: I) -> &str
    where
        I: IntoIterator<Item = &'a str>,
    {
        let applied: HashSet<&str> = labels.into_iter().collect();

        let mut matched = self
            .entries
            .iter()
            .filter(|entry| !entry.is_unknown() && applied.contains(entry.label.as_str()));

        match (matched.next(), matched.next()) {
            (Some(only), None) => only.label.as_str(),
            _ => UNKNOWN_STATUS,
        }
    }
}

impl Default for StatusRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_STATUSES.iter().copied())
    }
}

/// Prefix a user-supplied status with `status/` unless already present.
///
/// `done` and `status/done` both normalize to `status/done`.
pub fn normalize_status(status: &str) -> String {
    let status = status.trim();
    if status.starts_with(STATUS_PREFIX) {
        status.to_string()
    } else {
        format!("{STATUS_PREFIX}{status}")
    }
}
