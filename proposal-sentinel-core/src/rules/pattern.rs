use super::engine::{ProposalRule, ProposalText};
use super::specs::FlagSpec;
use crate::types::Finding;
use regex::Regex;

// PatternRule - fires when any trigger pattern of its spec matches the raw text
pub struct PatternRule<'a> {
    spec: &'a FlagSpec,
}

impl<'a> PatternRule<'a> {
    pub fn new(spec: &'a FlagSpec) -> Self {
        Self { spec }
    }

    /// First sentence matching `pattern`, else the raw matched text.
    fn excerpt_for(pattern: &Regex, matched: &str, sentences: &[String]) -> String {
        sentences
            .iter()
            .find(|sentence| pattern.is_match(sentence))
            .cloned()
            .unwrap_or_else(|| matched.to_string())
    }
}

impl<'a> ProposalRule for PatternRule<'a> {
    fn evaluate(&self, text: &ProposalText<'_>) -> Option<Finding> {
        // Only the first matching pattern counts
        self.spec.patterns.iter().find_map(|pattern| {
            pattern.find(text.raw).map(|m| {
                let excerpt = Self::excerpt_for(pattern, m.as_str(), text.sentences);
                self.spec.to_finding(excerpt)
            })
        })
    }

    fn id(&self) -> &str {
        self.spec.id
    }
}
