// Main rules module - delegates to semantic sub-modules
// - specs.rs: the built-in flag specification table
// - engine.rs: RuleEngine and the ProposalRule trait
// - evaluation.rs: whole-text check for evaluation language
// - pattern.rs: generic trigger-pattern rules
// - impact.rs: impact statement strength
// - strengths.rs: positive impact sentences
// - suggestions.rs: canned remediation text

pub mod engine;
pub mod evaluation;
pub mod impact;
pub mod pattern;
pub mod specs;
pub mod strengths;
pub mod suggestions;

pub use engine::*;
pub use specs::{find_spec, flag_specs, FlagSpec};

/// Case-insensitive substring test against a list of keywords.
/// `lowered` must already be lowercase.
pub(crate) fn contains_any<S: AsRef<str>>(lowered: &str, keywords: &[S]) -> bool {
    keywords
        .iter()
        .any(|keyword| lowered.contains(&keyword.as_ref().to_lowercase()))
}
