use serde::{Deserialize, Serialize};
use std::fmt;

// ===== RULE TYPES =====

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// ===== REPORT TYPES =====
// A Report is built fresh by every `analyze` call and owns everything in it.

/// One potential issue detected in the proposal text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Finding {
    pub id: String,
    pub title: String,
    pub severity: Severity,
    /// Sentence (or matched fragment) quoted as evidence
    pub excerpt: String,
    pub explanation: String,
    pub suggestion: String,
}

/// A positive signal: a specific, relevant impact sentence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Strength {
    pub title: String,
    pub excerpt: String,
    pub note: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportMeta {
    /// Whitespace-delimited tokens in the raw input
    pub word_count: usize,
    /// First segmented sentence, or empty for blank input
    pub title_guess: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Report {
    pub flags: Vec<Finding>,
    pub strengths: Vec<Strength>,
    pub meta: ReportMeta,
}

impl Report {
    pub fn has_flag(&self, id: &str) -> bool {
        self.flags.iter().any(|flag| flag.id == id)
    }

    pub fn flag(&self, id: &str) -> Option<&Finding> {
        self.flags.iter().find(|flag| flag.id == id)
    }

    pub fn flag_ids(&self) -> Vec<&str> {
        self.flags.iter().map(|flag| flag.id.as_str()).collect()
    }
}
