//! Output formatting utilities for the CLI.

pub mod progress;

use serde::Serialize;

pub trait CommandOutput: Serialize {
    fn to_human(&self) -> String;

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&result.to_json()).unwrap_or_default());
    } else {
        println!("{}", result.to_human());
    }
}

/// Issue count for one rendered status group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub issues: usize,
}

impl StatusCount {
    pub fn from_counts(counts: Vec<(&str, usize)>) -> Vec<Self> {
        counts
            .into_iter()
            .map(|(status, issues)| Self {
                status: status.to_string(),
                issues,
            })
            .collect()
    }
}
